use slog::{Drain, FnValue, Logger};
use slog_async::Async;
use std::fmt::Debug;

use crate::compose::CompositeLoggerBuilder;
use crate::file::FileLoggerBuilder;
use crate::misc;
use crate::null::NullLoggerBuilder;
use crate::syslog::SyslogBuilder;
use crate::terminal::TerminalLoggerBuilder;
use crate::types::{OverflowStrategy, Severity, SourceLocation};
use crate::Result;

/// This trait allows to build a logger instance.
pub trait Build {
    /// Builds a logger.
    fn build(&self) -> Result<Logger>;
}

/// Logger builder.
#[allow(missing_docs)]
#[derive(Debug)]
pub enum LoggerBuilder {
    Composite(CompositeLoggerBuilder),
    File(FileLoggerBuilder),
    Null(NullLoggerBuilder),
    Syslog(SyslogBuilder),
    Terminal(TerminalLoggerBuilder),
}
impl Build for LoggerBuilder {
    fn build(&self) -> Result<Logger> {
        match *self {
            LoggerBuilder::Composite(ref b) => track!(b.build()),
            LoggerBuilder::File(ref b) => track!(b.build()),
            LoggerBuilder::Null(ref b) => track!(b.build()),
            LoggerBuilder::Syslog(ref b) => track!(b.build()),
            LoggerBuilder::Terminal(ref b) => track!(b.build()),
        }
    }
}

/// Settings shared by every sink builder.
#[derive(Debug)]
pub(crate) struct BuilderCommon {
    pub level: Severity,
    pub source_location: SourceLocation,
    pub channel_size: usize,
    pub overflow_strategy: OverflowStrategy,
}
impl Default for BuilderCommon {
    fn default() -> Self {
        BuilderCommon {
            level: Severity::default(),
            source_location: SourceLocation::default(),
            channel_size: 1024,
            overflow_strategy: OverflowStrategy::default(),
        }
    }
}
impl BuilderCommon {
    /// Wraps `drain` in the asynchronous channel and the level filter, then
    /// turns it into a `Logger`.
    pub fn build_with_drain<D>(&self, drain: D) -> Logger
    where
        D: Drain + Send + 'static,
        D::Err: Debug,
    {
        let drain = Async::new(drain.fuse())
            .chan_size(self.channel_size)
            .overflow_strategy(self.overflow_strategy.to_async_type())
            .build()
            .fuse();
        let drain = self.level.set_level_filter(drain).fuse();
        match self.source_location {
            SourceLocation::None => Logger::root(drain, o!()),
            SourceLocation::ModuleAndLine => {
                Logger::root(drain, o!("module" => FnValue(misc::module_and_line)))
            }
        }
    }
}
