use std::io;
use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt, TrackableError};

/// The error type for this crate.
#[derive(Debug, Clone, TrackableError)]
pub struct Error(TrackableError<ErrorKind>);
impl From<io::Error> for Error {
    fn from(f: io::Error) -> Self {
        ErrorKind::Other.cause(f).into()
    }
}

/// A list of error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed settings detected while constructing a logger
    /// (e.g. an empty syslog host). Not retryable.
    Config,

    /// Name resolution of the syslog endpoint produced no usable address.
    Resolve,

    /// Every resolved address failed to connect or complete a TLS handshake.
    Connect,

    /// An established syslog connection failed while writing a frame. The
    /// connection is invalidated; the next send starts from scratch.
    Deliver,

    /// Invalid input.
    Invalid,

    /// Unknown error.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
