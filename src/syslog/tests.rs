use chrono::TimeZone as _;
use chrono::Utc;
use std::io::BufRead;
use std::io::BufReader;
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::facility::Facility;
use super::frame;
use super::transport::SyslogTransport;
use crate::types::{Severity, SourceLocation};
use crate::{Build, ErrorKind};

fn fixed_timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
}

#[test]
fn priority_combines_facility_and_severity() {
    assert_eq!(Facility::User.priority(Severity::Error), 11);
    assert_eq!(Facility::Kern.priority(Severity::Critical), 2);
    assert_eq!(Facility::Local0.priority(Severity::Info), 134);
    assert_eq!(Facility::Local7.priority(Severity::Debug), 191);
}

#[test]
fn severity_codes_follow_the_protocol() {
    assert_eq!(Severity::Debug.syslog_code(), 7);
    assert_eq!(Severity::Info.syslog_code(), 6);
    assert_eq!(Severity::Warning.syslog_code(), 4);
    assert_eq!(Severity::Error.syslog_code(), 3);
    assert_eq!(Severity::Critical.syslog_code(), 2);
}

#[test]
fn facility_names_round_trip() {
    for facility in [Facility::Kern, Facility::User, Facility::Cron, Facility::Local5] {
        assert_eq!(facility.name().parse::<Facility>().unwrap(), facility);
    }
    assert!("nonsense".parse::<Facility>().is_err());
}

#[test]
fn frame_layout_matches_the_wire_grammar() {
    let frame = frame::encode(
        Facility::User,
        Severity::Error,
        fixed_timestamp(),
        "box",
        false,
        "app",
        "hi there",
        false,
    );
    assert_eq!(frame, b"<11>2026-01-02T03:04:05Z box app hi there");
}

#[test]
fn frame_marks_secured_senders() {
    let frame = frame::encode(
        Facility::User,
        Severity::Warning,
        fixed_timestamp(),
        "box",
        true,
        "app",
        "hi",
        false,
    );
    assert_eq!(frame, b"<12>2026-01-02T03:04:05Z box@ssl app hi");
}

#[test]
fn frame_newline_framing_appends_exactly_one_delimiter() {
    let frame = frame::encode(
        Facility::User,
        Severity::Info,
        fixed_timestamp(),
        "box",
        false,
        "app",
        "hi",
        true,
    );
    assert_eq!(frame, b"<14>2026-01-02T03:04:05Z box app hi\n");
}

#[test]
fn frame_preserves_message_bytes() {
    let msg = "h\u{e9}llo \u{2192} world";
    let frame = frame::encode(
        Facility::User,
        Severity::Info,
        fixed_timestamp(),
        "box",
        false,
        "app",
        msg,
        false,
    );
    assert!(frame.ends_with(msg.as_bytes()));
}

#[test]
fn empty_message_bodies_are_allowed() {
    let frame = frame::encode(
        Facility::User,
        Severity::Info,
        fixed_timestamp(),
        "box",
        false,
        "app",
        "",
        false,
    );
    assert_eq!(frame, b"<14>2026-01-02T03:04:05Z box app ");
}

#[test]
fn empty_host_is_rejected_without_network_activity() {
    let err = SyslogTransport::new("", 6514, None, Facility::User, true).err().unwrap();
    assert_eq!(*err.kind(), ErrorKind::Config);
}

#[test]
fn zero_port_is_rejected() {
    let err = SyslogTransport::new("logs.example.com", 0, None, Facility::User, true)
        .err()
        .unwrap();
    assert_eq!(*err.kind(), ErrorKind::Config);
}

#[test]
fn unresolvable_host_fails_with_resolve_error() {
    // RFC 2606 reserves .invalid; resolution can never succeed.
    let mut transport =
        SyslogTransport::new("host.invalid", 6514, None, Facility::User, false).unwrap();
    let err = transport.send(Severity::Info, "app", "hi").err().unwrap();
    assert_eq!(*err.kind(), ErrorKind::Resolve);
    assert!(!transport.is_connected());
}

#[test]
fn refused_connection_fails_and_leaves_no_state_behind() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut transport =
        SyslogTransport::new("127.0.0.1", addr.port(), None, Facility::User, false).unwrap();
    let err = transport.send(Severity::Info, "app", "hi").err().unwrap();
    assert_eq!(*err.kind(), ErrorKind::Connect);
    assert!(!transport.is_connected());

    // No failure state is cached; the next send attempts a fresh connect.
    let err = transport.send(Severity::Info, "app", "hi").err().unwrap();
    assert_eq!(*err.kind(), ErrorKind::Connect);
}

#[test]
fn refused_connection_with_tls_enabled_also_fails_with_connect_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut transport =
        SyslogTransport::new("127.0.0.1", addr.port(), None, Facility::User, true).unwrap();
    let err = transport.send(Severity::Info, "app", "hi").err().unwrap();
    assert_eq!(*err.kind(), ErrorKind::Connect);
}

#[test]
fn sequential_sends_reuse_one_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        for _ in 0..2 {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            tx.send(line).unwrap();
        }
    });

    let mut transport = SyslogTransport::new(
        "127.0.0.1",
        addr.port(),
        Some("host-a".to_owned()),
        Facility::User,
        false,
    )
    .unwrap();
    transport.newline_framing(true);

    transport.send(Severity::Error, "app", "first").unwrap();
    transport.send(Severity::Info, "app", "second").unwrap();
    assert!(transport.is_connected());

    // Both frames arrive over the single accepted stream.
    let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(first.starts_with("<11>"), "got: {:?}", first);
    assert!(first.ends_with(" host-a app first\n"), "got: {:?}", first);
    let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(second.starts_with("<14>"), "got: {:?}", second);
    assert!(second.ends_with(" host-a app second\n"), "got: {:?}", second);
}

#[test]
fn frame_timestamp_is_valid_iso8601_utc() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut line = String::new();
        BufReader::new(stream).read_line(&mut line).unwrap();
        tx.send(line).unwrap();
    });

    let mut transport = SyslogTransport::new(
        "127.0.0.1",
        addr.port(),
        Some("host-a".to_owned()),
        Facility::User,
        false,
    )
    .unwrap();
    transport.newline_framing(true);
    transport.send(Severity::Info, "app", "hi").unwrap();

    let line = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    let after_priority = line.split('>').nth(1).unwrap();
    let timestamp = after_priority.split(' ').next().unwrap();
    assert!(timestamp.ends_with('Z'), "got: {:?}", timestamp);
    chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%SZ").unwrap();
}

#[test]
fn close_forces_a_fresh_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for _ in 0..2 {
            let (stream, _) = listener.accept().unwrap();
            let mut line = String::new();
            BufReader::new(stream).read_line(&mut line).unwrap();
            tx.send(line).unwrap();
        }
    });

    let mut transport = SyslogTransport::new(
        "127.0.0.1",
        addr.port(),
        Some("host-a".to_owned()),
        Facility::User,
        false,
    )
    .unwrap();
    transport.newline_framing(true);

    transport.send(Severity::Info, "app", "before").unwrap();
    transport.close();
    assert!(!transport.is_connected());
    transport.send(Severity::Info, "app", "after").unwrap();

    let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(first.ends_with(" app before\n"), "got: {:?}", first);
    let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(second.ends_with(" app after\n"), "got: {:?}", second);
}

#[test]
fn failed_delivery_reconnects_and_delivers_on_the_next_send() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        drop(stream);
        // The listener is dropped here too, so nothing is serving the port
        // while the dead connection is being detected.
    });

    let mut transport =
        SyslogTransport::new("127.0.0.1", addr.port(), None, Facility::User, false).unwrap();
    transport.newline_framing(true);
    transport.send(Severity::Info, "app", "hi").unwrap();
    accepted.join().unwrap();

    // The peer is gone; within a few sends the write fails. The error is
    // surfaced and the connection is discarded.
    let mut failed = false;
    for _ in 0..100 {
        if transport.send(Severity::Info, "app", "hi").is_err() {
            failed = true;
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }
    assert!(failed, "writes to a dead peer never failed");
    assert!(!transport.is_connected());

    // A collector comes back on the same port: the very next send opens one
    // fresh connection and the frame arrives intact.
    let listener = TcpListener::bind(addr).unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut line = String::new();
        BufReader::new(stream).read_line(&mut line).unwrap();
        tx.send(line).unwrap();
    });

    transport.send(Severity::Info, "app", "recovered").unwrap();
    assert!(transport.is_connected());
    let line = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(line.ends_with(" app recovered\n"), "got: {:?}", line);
}

#[test]
fn logger_delivers_rendered_records_end_to_end() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut line = String::new();
        BufReader::new(stream).read_line(&mut line).unwrap();
        tx.send(line).unwrap();
    });

    let logger = super::SyslogBuilder::new("127.0.0.1", addr.port())
        .tls(false)
        .newline_framing(true)
        .system("host-a")
        .facility(Facility::Local0)
        .level(Severity::Debug)
        .source_location(SourceLocation::None)
        .build()
        .unwrap();
    info!(logger, "backup finished"; "files" => 3);

    let line = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(line.starts_with("<134>"), "got: {:?}", line);
    assert!(line.contains(" host-a "), "got: {:?}", line);
    assert!(
        line.ends_with("backup finished [files: 3]\n"),
        "got: {:?}",
        line
    );
}
