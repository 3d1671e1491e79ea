use serde::{Deserialize, Serialize};

use super::facility::Facility;
use super::format::MsgFormatConfig;
use super::SyslogBuilder;
use crate::types::{OverflowStrategy, Severity, SourceLocation};
use crate::Config;

/// The configuration of `SyslogBuilder`.
///
/// `host` and `port` are mandatory; everything else has a default.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct SyslogConfig {
    /// The hostname of the remote collector.
    pub host: String,

    /// The port of the remote collector.
    pub port: u16,

    /// Log level.
    #[serde(default)]
    pub level: Severity,

    /// The syslog facility frames are tagged with.
    #[serde(default)]
    pub facility: Facility,

    /// System identity embedded in every frame. Defaults to the local
    /// hostname.
    #[serde(default)]
    pub system: Option<String>,

    /// Whether the connection is protected by TLS. Defaults to `true`.
    #[serde(default = "default_tls")]
    pub tls: bool,

    /// Whether every frame is terminated with a newline. Defaults to
    /// `false`.
    #[serde(default)]
    pub newline_framing: bool,

    /// How record bodies are rendered.
    ///
    /// Possible values are `default` and `basic`.
    #[serde(default)]
    pub format: MsgFormatConfig,

    /// Source code location.
    #[serde(default)]
    pub source_location: SourceLocation,

    /// Asynchronous channel size.
    #[serde(default = "default_channel_size")]
    pub channel_size: usize,

    /// Whether to drop logs on overflow.
    ///
    /// The possible values are `drop`, `drop_and_report`, or `block`.
    ///
    /// The default value is `drop_and_report`.
    #[serde(default)]
    pub overflow_strategy: OverflowStrategy,
}

impl Config for SyslogConfig {
    type Builder = SyslogBuilder;

    fn try_to_builder(&self) -> crate::Result<Self::Builder> {
        let mut builder = SyslogBuilder::new(&self.host, self.port);
        builder.level(self.level);
        builder.facility(self.facility);
        builder.tls(self.tls);
        builder.newline_framing(self.newline_framing);
        builder.format_arc(self.format.into());
        builder.source_location(self.source_location);
        builder.channel_size(self.channel_size);
        builder.overflow_strategy(self.overflow_strategy);
        if let Some(ref system) = self.system {
            builder.system(system.clone());
        }
        Ok(builder)
    }
}

fn default_tls() -> bool {
    true
}

fn default_channel_size() -> usize {
    1024
}
