//! Null logger.
use serde::{Deserialize, Serialize};
use slog::{Discard, Logger};

use crate::{Build, Config, Result};

/// A logger builder which builds loggers that discard all log records.
///
/// # Examples
///
/// ```
/// use logwire::null::NullLoggerBuilder;
/// use logwire::Build;
///
/// # fn main() -> Result<(), logwire::Error> {
/// let logger = NullLoggerBuilder.build()?;
/// slog::info!(logger, "nobody hears this");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NullLoggerBuilder;
impl Build for NullLoggerBuilder {
    fn build(&self) -> Result<Logger> {
        Ok(Logger::root(Discard, o!()))
    }
}

/// The configuration of `NullLoggerBuilder`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NullLoggerConfig {}
impl Config for NullLoggerConfig {
    type Builder = NullLoggerBuilder;
    fn try_to_builder(&self) -> Result<Self::Builder> {
        Ok(NullLoggerBuilder)
    }
}
