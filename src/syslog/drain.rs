use slog::{Drain, OwnedKVList, Record};
use std::result::Result as StdResult;
use std::sync::{Arc, Mutex};

use super::format::MsgFormat;
use super::transport::SyslogTransport;
use crate::types::Severity;

/// A drain that hands rendered records to a [`SyslogTransport`].
///
/// The transport surfaces delivery failures without retrying; the retry
/// policy lives here instead. A failed delivery invalidates the transport's
/// connection, so one more attempt is made to give a fresh connection a
/// chance; if that fails too, the record is dropped. Nothing is logged
/// about the failure, since this drain is itself logging infrastructure.
pub(super) struct SyslogDrain {
    transport: Mutex<SyslogTransport>,
    format: Arc<dyn MsgFormat>,
}

impl SyslogDrain {
    pub fn new(transport: SyslogTransport, format: Arc<dyn MsgFormat>) -> Self {
        SyslogDrain {
            transport: Mutex::new(transport),
            format,
        }
    }
}

impl Drain for SyslogDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(&self, record: &Record, values: &OwnedKVList) -> StdResult<Self::Ok, Self::Err> {
        // If the format fails midway, fall back to the bare message rather
        // than sending a half-rendered body.
        let mut body = String::new();
        if self.format.fmt(&mut body, record, values).is_err() {
            body = record.msg().to_string();
        }

        let severity = Severity::from_level(record.level());
        let logger = if record.tag().is_empty() {
            record.module()
        } else {
            record.tag()
        };

        let mut transport = match self.transport.lock() {
            Ok(transport) => transport,
            Err(poisoned) => poisoned.into_inner(),
        };
        if transport.send(severity, logger, &body).is_err() {
            let _ = transport.send(severity, logger, &body);
        }
        Ok(())
    }
}
