//! Helpers that trace function calls and wall-clock time through an
//! existing logger.
//!
//! Both helpers wrap a closure and emit at the debug level, so whether the
//! trace reaches a sink is controlled by the logger's own severity
//! threshold; instrumented code needs no changes when tracing is turned
//! off.
use slog::Logger;
use std::fmt;
use std::time::Instant;

/// Runs `f` and logs its elapsed wall-clock time at the debug level.
///
/// Returns whatever `f` returns.
///
/// # Examples
///
/// ```
/// use logwire::instrument::log_timing;
/// use logwire::null::NullLoggerBuilder;
/// use logwire::Build;
///
/// # fn main() -> Result<(), logwire::Error> {
/// let logger = NullLoggerBuilder.build()?;
/// let total = log_timing(&logger, "sum", || (1..=100).sum::<u32>());
/// assert_eq!(total, 5050);
/// # Ok(())
/// # }
/// ```
pub fn log_timing<F, T>(logger: &Logger, name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    debug!(
        logger,
        "[Timer] {} -- {} sec(s) {} msec(s)",
        name,
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    value
}

/// Runs `f`, logging the call with its arguments before and the returned
/// value after, both at the debug level.
///
/// `args` is rendered into both lines; build it with `format_args!`.
///
/// # Examples
///
/// ```
/// use logwire::instrument::log_call;
/// use logwire::null::NullLoggerBuilder;
/// use logwire::Build;
///
/// # fn main() -> Result<(), logwire::Error> {
/// let logger = NullLoggerBuilder.build()?;
/// let sum = log_call(&logger, "add", format_args!("{}, {}", 2, 3), || 2 + 3);
/// assert_eq!(sum, 5);
/// # Ok(())
/// # }
/// ```
pub fn log_call<F, T>(logger: &Logger, name: &str, args: fmt::Arguments, f: F) -> T
where
    F: FnOnce() -> T,
    T: fmt::Debug,
{
    debug!(logger, "[Call] {}({})", name, args);
    let value = f();
    debug!(logger, "[Return] {}({}) = {:?}", name, args, value);
    value
}
