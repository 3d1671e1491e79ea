//! Composite logger that fans records out to several sinks.
use serde::{Deserialize, Serialize};
use slog::{Discard, Drain, Duplicate, Logger};

use crate::config::LoggerConfig;
use crate::{Build, Config, LoggerBuilder, Result};

/// A logger builder which fans every record out to a set of sinks.
///
/// Each sink keeps its own severity threshold: a record reaches every sink
/// whose threshold it meets or exceeds, and is filtered independently by the
/// others.
///
/// # Examples
///
/// ```
/// use logwire::compose::CompositeLoggerBuilder;
/// use logwire::terminal::TerminalLoggerBuilder;
/// use logwire::null::NullLoggerBuilder;
/// use logwire::{Build, LoggerBuilder};
///
/// # fn main() -> Result<(), logwire::Error> {
/// let mut builder = CompositeLoggerBuilder::new();
/// builder.sink(LoggerBuilder::Terminal(TerminalLoggerBuilder::new()));
/// builder.sink(LoggerBuilder::Null(NullLoggerBuilder));
///
/// let logger = builder.build()?;
/// slog::info!(logger, "Hello World!");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct CompositeLoggerBuilder {
    sinks: Vec<LoggerBuilder>,
}
impl CompositeLoggerBuilder {
    /// Makes a new `CompositeLoggerBuilder` instance with no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink to this composite.
    pub fn sink(&mut self, builder: LoggerBuilder) -> &mut Self {
        self.sinks.push(builder);
        self
    }
}
impl Build for CompositeLoggerBuilder {
    fn build(&self) -> Result<Logger> {
        let mut built = Vec::with_capacity(self.sinks.len());
        for sink in &self.sinks {
            built.push(track!(sink.build())?);
        }
        let logger = built
            .into_iter()
            .reduce(|a, b| Logger::root(Duplicate::new(a, b).fuse(), o!()))
            .unwrap_or_else(|| Logger::root(Discard, o!()));
        Ok(logger)
    }
}

/// The configuration of `CompositeLoggerBuilder`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CompositeLoggerConfig {
    /// Configurations of the sinks records are fanned out to.
    #[serde(default)]
    pub sinks: Vec<LoggerConfig>,
}
impl Config for CompositeLoggerConfig {
    type Builder = CompositeLoggerBuilder;
    fn try_to_builder(&self) -> Result<Self::Builder> {
        let mut builder = CompositeLoggerBuilder::new();
        for sink in &self.sinks {
            builder.sink(track!(sink.try_to_builder())?);
        }
        Ok(builder)
    }
}
