//! This crate wires together console, file and remote-syslog output for
//! [slog](https://github.com/slog-rs/slog) log records, with per-sink
//! severity thresholds and TLS-protected delivery to remote collectors.
//!
//! # Examples
//!
//! Creates a logger via `TerminalLoggerBuilder`:
//!
//! ```
//! use logwire::terminal::{Destination, TerminalLoggerBuilder};
//! use logwire::types::Severity;
//! use logwire::Build;
//!
//! # fn main() {
//! let mut builder = TerminalLoggerBuilder::new();
//! builder.level(Severity::Debug);
//! builder.destination(Destination::Stderr);
//!
//! let logger = builder.build().unwrap();
//! slog::info!(logger, "Hello World!");
//! # }
//! ```
//!
//! Creates a logger from configuration text (TOML):
//!
//! ```
//! use logwire::{Build, Config, LoggerConfig};
//!
//! # fn main() {
//! let config: LoggerConfig = serdeconv::from_toml_str(
//!     r#"
//! type = "terminal"
//! level = "debug"
//! destination = "stderr"
//! "#,
//! )
//! .unwrap();
//!
//! let builder = config.try_to_builder().unwrap();
//! let logger = builder.build().unwrap();
//! slog::info!(logger, "Hello World!");
//! # }
//! ```
#![warn(missing_docs)]
#[macro_use]
extern crate slog;
#[macro_use]
extern crate trackable;

pub use crate::build::{Build, LoggerBuilder};
pub use crate::config::{Config, LoggerConfig};
pub use crate::error::{Error, ErrorKind};
pub use crate::misc::set_stdlog_logger;

pub mod compose;
pub mod file;
pub mod instrument;
pub mod null;
pub mod syslog;
pub mod terminal;
pub mod types;

mod build;
mod config;
mod error;
mod misc;

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
