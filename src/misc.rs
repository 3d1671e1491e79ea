use chrono::{Local, Utc};
use slog::{Logger, Record};
use slog_scope::GlobalLoggerGuard;
use std::io;

use crate::types::TimeZone;
use crate::{ErrorKind, Result};
use trackable::error::ErrorKindExt;

/// Sets the given logger as the destination of the log records emitted via
/// the [`log`](https://docs.rs/log) crate.
///
/// The returned guard must be kept alive for the bridge to stay in effect.
///
/// # Examples
///
/// ```no_run
/// use logwire::terminal::TerminalLoggerBuilder;
/// use logwire::{set_stdlog_logger, Build};
///
/// # fn main() -> Result<(), logwire::Error> {
/// let logger = TerminalLoggerBuilder::new().build()?;
/// let _guard = set_stdlog_logger(logger)?;
/// log::info!("Hello from the log crate!");
/// # Ok(())
/// # }
/// ```
pub fn set_stdlog_logger(logger: Logger) -> Result<GlobalLoggerGuard> {
    let guard = slog_scope::set_global_logger(logger);
    track!(slog_stdlog::init().map_err(|e| crate::Error::from(ErrorKind::Other.cause(e))))?;
    Ok(guard)
}

pub(crate) fn module_and_line(record: &Record) -> String {
    format!("{}:{}", record.module(), record.line())
}

pub(crate) fn timezone_to_timestamp_fn(
    timezone: TimeZone,
) -> fn(&mut dyn io::Write) -> io::Result<()> {
    match timezone {
        TimeZone::Utc => timestamp_utc,
        TimeZone::Local => timestamp_local,
    }
}

pub(crate) fn timestamp_none(_: &mut dyn io::Write) -> io::Result<()> {
    Ok(())
}

fn timestamp_utc(io: &mut dyn io::Write) -> io::Result<()> {
    write!(io, "{}", Utc::now().format("%y.%m.%d %H:%M:%S"))
}

fn timestamp_local(io: &mut dyn io::Write) -> io::Result<()> {
    write!(io, "{}", Local::now().format("%y.%m.%d %H:%M:%S"))
}
