//! Wire framing of individual log events.
use chrono::{DateTime, Utc};

use super::facility::Facility;
use crate::types::Severity;

/// Suffix appended to the system identity when the connection is secured,
/// so collectors can tell secured and unsecured senders apart.
pub(super) const SECURE_IDENT_SUFFIX: &str = "@ssl";

/// Assembles one self-contained frame.
///
/// Layout: `<priority>` immediately followed by the UTC timestamp
/// (second precision, literal `Z`), then the system token, the logger name
/// and the message body, separated by single spaces. The body is carried
/// byte-for-byte; no trailing delimiter is added unless newline framing is
/// requested.
pub(super) fn encode(
    facility: Facility,
    severity: Severity,
    timestamp: DateTime<Utc>,
    system: &str,
    secure: bool,
    logger: &str,
    msg: &str,
    newline_framing: bool,
) -> Vec<u8> {
    let suffix = if secure { SECURE_IDENT_SUFFIX } else { "" };
    let mut frame = format!(
        "<{}>{} {}{} {} {}",
        facility.priority(severity),
        timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
        system,
        suffix,
        logger,
        msg
    )
    .into_bytes();
    if newline_framing {
        frame.push(b'\n');
    }
    frame
}
