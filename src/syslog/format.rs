//! Rendering of record bodies sent to the collector.
//!
//! Syslog has no notion of structured log data, so Slog key-value pairs
//! must be folded into the message text if they are to survive the trip.
//! Implementations of [`MsgFormat`] decide if and how that happens.
use serde::{Deserialize, Serialize};
use slog::{OwnedKVList, Record, Serializer, KV};
use std::fmt::{self, Debug, Write};
use std::sync::Arc;

/// A way to render a log record, with its key-value pairs, into the message
/// body of a frame.
pub trait MsgFormat: Debug + Send + Sync {
    /// Renders `record` and its key-value pairs into `out`.
    fn fmt(&self, out: &mut String, record: &Record, values: &OwnedKVList) -> slog::Result;
}

impl<T: MsgFormat + ?Sized> MsgFormat for Box<T> {
    fn fmt(&self, out: &mut String, record: &Record, values: &OwnedKVList) -> slog::Result {
        MsgFormat::fmt(&**self, out, record, values)
    }
}

impl<T: MsgFormat + ?Sized> MsgFormat for Arc<T> {
    fn fmt(&self, out: &mut String, record: &Record, values: &OwnedKVList) -> slog::Result {
        MsgFormat::fmt(&**self, out, record, values)
    }
}

/// The default [`MsgFormat`]: the message followed by each key-value pair
/// as ` [key: value]`, logger-side pairs first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultMsgFormat;
impl MsgFormat for DefaultMsgFormat {
    fn fmt(&self, out: &mut String, record: &Record, values: &OwnedKVList) -> slog::Result {
        write!(out, "{}", record.msg()).map_err(slog::Error::from)?;
        let mut serializer = BracketSerializer(out);
        values.serialize(record, &mut serializer)?;
        record.kv().serialize(record, &mut serializer)?;
        Ok(())
    }
}

/// A [`MsgFormat`] that discards key-value pairs and renders only the
/// message itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicMsgFormat;
impl MsgFormat for BasicMsgFormat {
    fn fmt(&self, out: &mut String, record: &Record, _: &OwnedKVList) -> slog::Result {
        write!(out, "{}", record.msg()).map_err(slog::Error::from)?;
        Ok(())
    }
}

struct BracketSerializer<'a>(&'a mut String);
impl<'a> Serializer for BracketSerializer<'a> {
    fn emit_arguments(&mut self, key: slog::Key, val: &fmt::Arguments) -> slog::Result {
        write!(self.0, " [{}: {}]", key, val).map_err(slog::Error::from)?;
        Ok(())
    }
}

/// The configuration of the message format, for use in `SyslogConfig`.
///
/// Maps to [`DefaultMsgFormat`] or [`BasicMsgFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum MsgFormatConfig {
    /// Message plus key-value pairs.
    Default,

    /// Message only.
    Basic,
}
impl Default for MsgFormatConfig {
    fn default() -> Self {
        MsgFormatConfig::Default
    }
}
impl From<MsgFormatConfig> for Arc<dyn MsgFormat> {
    fn from(config: MsgFormatConfig) -> Self {
        match config {
            MsgFormatConfig::Default => Arc::new(DefaultMsgFormat),
            MsgFormatConfig::Basic => Arc::new(BasicMsgFormat),
        }
    }
}
