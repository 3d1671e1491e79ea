use slog::Logger;
use std::sync::Arc;

use super::drain::SyslogDrain;
use super::facility::Facility;
use super::format::{DefaultMsgFormat, MsgFormat};
use super::transport::SyslogTransport;
use crate::build::BuilderCommon;
use crate::types::{OverflowStrategy, Severity, SourceLocation};
use crate::{Build, Result};

/// A logger builder which builds loggers that deliver log records to a
/// remote syslog collector.
///
/// The collector endpoint is mandatory and fixed at construction. TLS is
/// enabled by default; the handshake uses the platform's trusted certificate
/// roots and verifies the collector's certificate against the configured
/// host.
///
/// The resulting logger will work asynchronously (the default channel size
/// is 1024). Building the logger validates the configuration but opens no
/// connection; that happens when the first record is delivered.
///
/// # Examples
///
/// ```
/// use logwire::syslog::{Facility, SyslogBuilder};
/// use logwire::types::Severity;
/// use logwire::Build;
///
/// # fn main() -> Result<(), logwire::Error> {
/// let logger = SyslogBuilder::new("logs.example.com", 6514)
///     .facility(Facility::Daemon)
///     .system("api-frontend")
///     .level(Severity::Info)
///     .build()?;
/// # let _ = logger;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SyslogBuilder {
    common: BuilderCommon,
    host: String,
    port: u16,
    facility: Facility,
    system: Option<String>,
    tls: bool,
    newline_framing: bool,
    format: Arc<dyn MsgFormat>,
}

impl SyslogBuilder {
    /// Makes a new `SyslogBuilder` instance for the given collector
    /// endpoint.
    ///
    /// The endpoint is validated when `build` is called: an empty host or a
    /// zero port fails with `ErrorKind::Config`.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        SyslogBuilder {
            common: BuilderCommon::default(),
            host: host.into(),
            port,
            facility: Facility::default(),
            system: None,
            tls: true,
            newline_framing: false,
            format: Arc::new(DefaultMsgFormat),
        }
    }

    /// Sets the syslog facility frames are tagged with.
    ///
    /// By default, this is the `user` facility.
    pub fn facility(&mut self, facility: Facility) -> &mut Self {
        self.facility = facility;
        self
    }

    /// Sets the system identity embedded in every frame.
    ///
    /// Defaults to the local hostname. When TLS is active the identity is
    /// suffixed so collectors can distinguish secured senders.
    pub fn system(&mut self, system: impl Into<String>) -> &mut Self {
        self.system = Some(system.into());
        self
    }

    /// Enables or disables TLS. Enabled by default.
    pub fn tls(&mut self, enabled: bool) -> &mut Self {
        self.tls = enabled;
        self
    }

    /// Terminates every frame with a newline. Disabled by default.
    pub fn newline_framing(&mut self, enabled: bool) -> &mut Self {
        self.newline_framing = enabled;
        self
    }

    /// Sets the format used to render record bodies.
    ///
    /// The default is [`DefaultMsgFormat`].
    ///
    /// This method wraps the format in an `Arc`. If your format is already
    /// wrapped in an `Arc`, call the `format_arc` method instead.
    pub fn format(&mut self, format: impl MsgFormat + 'static) -> &mut Self {
        self.format_arc(Arc::new(format))
    }

    /// Sets the format used to render record bodies, taking it already
    /// wrapped in an `Arc`.
    pub fn format_arc(&mut self, format: Arc<dyn MsgFormat>) -> &mut Self {
        self.format = format;
        self
    }

    /// Sets the log level of this logger.
    pub fn level(&mut self, severity: Severity) -> &mut Self {
        self.common.level = severity;
        self
    }

    /// Sets the source code location type this logger will use.
    pub fn source_location(&mut self, source_location: SourceLocation) -> &mut Self {
        self.common.source_location = source_location;
        self
    }

    /// Sets the size of the asynchronous channel of this logger.
    pub fn channel_size(&mut self, channel_size: usize) -> &mut Self {
        self.common.channel_size = channel_size;
        self
    }

    /// Sets the overflow strategy for the logger.
    pub fn overflow_strategy(&mut self, overflow_strategy: OverflowStrategy) -> &mut Self {
        self.common.overflow_strategy = overflow_strategy;
        self
    }
}

impl Build for SyslogBuilder {
    fn build(&self) -> Result<Logger> {
        let mut transport = track!(SyslogTransport::new(
            &self.host,
            self.port,
            self.system.clone(),
            self.facility,
            self.tls,
        ))?;
        transport.newline_framing(self.newline_framing);
        let drain = SyslogDrain::new(transport, self.format.clone());
        Ok(self.common.build_with_drain(drain))
    }
}
