//! Logger that delivers records to a remote syslog collector over TCP,
//! protected by TLS unless explicitly disabled.
//!
//! The sink is built around [`SyslogTransport`], which owns a single lazily
//! created connection to the collector. Frames are RFC-5424-style:
//! a `<priority>` tag, a UTC timestamp, the emitting system's identity, the
//! logger name, and the rendered message body. A failed delivery invalidates
//! the connection and the next one reconnects from scratch, so transient
//! network failures heal without any intervention.
//!
//! # Examples
//!
//! ```no_run
//! use logwire::syslog::{Facility, SyslogBuilder};
//! use logwire::types::Severity;
//! use logwire::Build;
//!
//! # fn main() -> Result<(), logwire::Error> {
//! let logger = SyslogBuilder::new("logs.example.com", 6514)
//!     .facility(Facility::Local0)
//!     .level(Severity::Warning)
//!     .build()?;
//!
//! slog::warn!(logger, "running low on disk space");
//! # Ok(())
//! # }
//! ```
//!
//! Building a logger performs no network I/O; the connection is established
//! by the first record that reaches the sink.

pub mod format;

mod builder;
mod config;
mod drain;
mod facility;
mod frame;
mod transport;

pub use self::builder::SyslogBuilder;
pub use self::config::SyslogConfig;
pub use self::facility::Facility;
pub use self::transport::SyslogTransport;

#[cfg(test)]
mod tests;
