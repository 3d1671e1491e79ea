use serde::{Deserialize, Serialize};
use slog::Logger;

use crate::compose::CompositeLoggerConfig;
use crate::file::FileLoggerConfig;
use crate::null::NullLoggerConfig;
use crate::syslog::SyslogConfig;
use crate::terminal::TerminalLoggerConfig;
use crate::types::Severity;
use crate::{Build, LoggerBuilder, Result};

/// Configuration of a logger builder.
pub trait Config {
    /// Logger builder.
    type Builder: Build;

    /// Makes a logger builder associated with this configuration.
    fn try_to_builder(&self) -> Result<Self::Builder>;

    /// Builds a logger with this configuration.
    fn build_logger(&self) -> Result<Logger> {
        let builder = track!(self.try_to_builder())?;
        let logger = track!(builder.build())?;
        Ok(logger)
    }
}

/// The configuration of `LoggerBuilder`.
///
/// # Examples
///
/// Terminal logger.
///
/// ```
/// use logwire::LoggerConfig;
///
/// let toml = r#"
/// type = "terminal"
/// level = "warning"
/// "#;
/// let _config: LoggerConfig = serdeconv::from_toml_str(toml).unwrap();
/// ```
///
/// Remote syslog logger.
///
/// ```
/// use logwire::LoggerConfig;
///
/// let toml = r#"
/// type = "syslog"
/// host = "logs.example.com"
/// port = 6514
/// facility = "local0"
/// "#;
/// let _config: LoggerConfig = serdeconv::from_toml_str(toml).unwrap();
/// ```
///
/// Composite logger fanning out to a terminal and a file sink.
///
/// ```
/// use logwire::LoggerConfig;
///
/// let toml = r#"
/// type = "composite"
///
/// [[sinks]]
/// type = "terminal"
/// level = "debug"
///
/// [[sinks]]
/// type = "file"
/// path = "/path/to/file.log"
/// level = "error"
/// "#;
/// let _config: LoggerConfig = serdeconv::from_toml_str(toml).unwrap();
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LoggerConfig {
    Composite(CompositeLoggerConfig),
    File(FileLoggerConfig),
    Null(NullLoggerConfig),
    Syslog(SyslogConfig),
    Terminal(TerminalLoggerConfig),
}
impl LoggerConfig {
    /// Sets the log level of this logger.
    ///
    /// For a composite logger the level is applied to every sink.
    pub fn set_loglevel(&mut self, level: Severity) {
        match *self {
            LoggerConfig::Composite(ref mut c) => {
                for sink in &mut c.sinks {
                    sink.set_loglevel(level);
                }
            }
            LoggerConfig::File(ref mut c) => c.level = level,
            LoggerConfig::Null(_) => {}
            LoggerConfig::Syslog(ref mut c) => c.level = level,
            LoggerConfig::Terminal(ref mut c) => c.level = level,
        }
    }
}
impl Config for LoggerConfig {
    type Builder = LoggerBuilder;
    fn try_to_builder(&self) -> Result<Self::Builder> {
        match *self {
            LoggerConfig::Composite(ref c) => {
                track!(c.try_to_builder()).map(LoggerBuilder::Composite)
            }
            LoggerConfig::File(ref c) => track!(c.try_to_builder()).map(LoggerBuilder::File),
            LoggerConfig::Null(ref c) => track!(c.try_to_builder()).map(LoggerBuilder::Null),
            LoggerConfig::Syslog(ref c) => track!(c.try_to_builder()).map(LoggerBuilder::Syslog),
            LoggerConfig::Terminal(ref c) => {
                track!(c.try_to_builder()).map(LoggerBuilder::Terminal)
            }
        }
    }
}
impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig::Terminal(TerminalLoggerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syslog::Facility;

    #[test]
    fn terminal_config_from_toml() {
        let config: LoggerConfig = serdeconv::from_toml_str(
            r#"
            type = "terminal"
            level = "warning"
            timestamp = false
            "#,
        )
        .unwrap();
        match config {
            LoggerConfig::Terminal(c) => {
                assert_eq!(c.level, Severity::Warning);
                assert!(!c.timestamp);
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn syslog_config_from_toml() {
        let config: LoggerConfig = serdeconv::from_toml_str(
            r#"
            type = "syslog"
            host = "logs.example.com"
            port = 6514
            facility = "local3"
            tls = false
            "#,
        )
        .unwrap();
        match config {
            LoggerConfig::Syslog(c) => {
                assert_eq!(c.host, "logs.example.com");
                assert_eq!(c.port, 6514);
                assert_eq!(c.facility, Facility::Local3);
                assert!(!c.tls);
                assert_eq!(c.level, Severity::Info);
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn syslog_config_requires_endpoint() {
        // host and port have no defaults
        let result = serdeconv::from_toml_str::<LoggerConfig>("type = \"syslog\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn composite_config_from_toml() {
        let mut config: LoggerConfig = serdeconv::from_toml_str(
            r#"
            type = "composite"

            [[sinks]]
            type = "terminal"
            level = "debug"

            [[sinks]]
            type = "null"
            "#,
        )
        .unwrap();
        config.set_loglevel(Severity::Critical);
        match config {
            LoggerConfig::Composite(c) => {
                assert_eq!(c.sinks.len(), 2);
                match &c.sinks[0] {
                    LoggerConfig::Terminal(t) => assert_eq!(t.level, Severity::Critical),
                    other => panic!("unexpected sink: {:?}", other),
                }
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }
}
