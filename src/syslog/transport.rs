//! Connection management and delivery to the remote collector.
use chrono::Utc;
use native_tls::{TlsConnector, TlsStream};
use std::io::{self, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use trackable::error::ErrorKindExt;

use super::facility::Facility;
use super::frame;
use crate::types::Severity;
use crate::{ErrorKind, Result};

/// Delivers formatted log lines to one remote syslog collector over a
/// stream socket, optionally protected by TLS.
///
/// The endpoint and facility are fixed at construction; reconfiguration
/// requires a new instance. The connection is created lazily by the first
/// [`send`](SyslogTransport::send) and is reused until a delivery fails, at
/// which point it is discarded so that the next send reconnects from
/// scratch. The transport itself never retries a failed send; that policy
/// belongs to the caller.
///
/// A `SyslogTransport` is meant to be driven by a single logical emitter.
/// It has no internal synchronization; concurrent callers must serialize
/// access themselves.
#[derive(Debug)]
pub struct SyslogTransport {
    host: String,
    port: u16,
    system: String,
    facility: Facility,
    secure: bool,
    newline_framing: bool,
    connection: Option<Connection>,
}

impl SyslogTransport {
    /// Makes a new `SyslogTransport` instance.
    ///
    /// `system` identifies the emitting host in every frame and defaults to
    /// the local hostname. When `secure` is `true` (the recommended
    /// setting), connections are wrapped in TLS using the platform's trusted
    /// roots and the peer certificate is verified against `host`.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Fails with `ErrorKind::Config` if `host` is empty or `port` is zero.
    pub fn new(
        host: &str,
        port: u16,
        system: Option<String>,
        facility: Facility,
        secure: bool,
    ) -> Result<Self> {
        track_assert!(!host.is_empty(), ErrorKind::Config, "Host must be set");
        track_assert_ne!(port, 0, ErrorKind::Config, "Port must be set");
        let system = system.unwrap_or_else(local_hostname);
        Ok(SyslogTransport {
            host: host.to_owned(),
            port,
            system,
            facility,
            secure,
            newline_framing: false,
            connection: None,
        })
    }

    /// Terminates every frame with a newline instead of relying on the
    /// collector to split frames on its own. Disabled by default.
    pub fn newline_framing(&mut self, enabled: bool) -> &mut Self {
        self.newline_framing = enabled;
        self
    }

    /// Delivers one log event to the collector.
    ///
    /// Connects first if no connection is live. The frame carries the
    /// priority computed from the configured facility and `severity`, the
    /// emission timestamp, the system identity, `logger` and `msg`, and is
    /// written in a single logical operation.
    ///
    /// # Errors
    ///
    /// `ErrorKind::Resolve` and `ErrorKind::Connect` surface connection
    /// establishment failures. A write failure yields `ErrorKind::Deliver`
    /// and discards the connection; calling `send` again reconnects.
    pub fn send(&mut self, severity: Severity, logger: &str, msg: &str) -> Result<()> {
        let mut connection = match self.connection.take() {
            Some(connection) => connection,
            None => track!(self.connect())?,
        };
        let frame = frame::encode(
            self.facility,
            severity,
            Utc::now(),
            &self.system,
            self.secure,
            logger,
            msg,
            self.newline_framing,
        );
        match connection.write_all(&frame).and_then(|()| connection.flush()) {
            Ok(()) => {
                self.connection = Some(connection);
                Ok(())
            }
            Err(e) => Err(ErrorKind::Deliver.cause(e).into()),
        }
    }

    /// Returns `true` while a connection to the collector is live.
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Drops the current connection, if any.
    ///
    /// The next `send` establishes a fresh one.
    pub fn close(&mut self) {
        self.connection = None;
    }

    fn connect(&self) -> Result<Connection> {
        let candidates: Vec<SocketAddr> = match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(addrs) => addrs.collect(),
            Err(e) => return Err(ErrorKind::Resolve.cause(e).into()),
        };
        track_assert!(
            !candidates.is_empty(),
            ErrorKind::Resolve,
            "No resolved addresses for {:?}",
            self.host
        );

        let mut last_err = io::Error::new(io::ErrorKind::AddrNotAvailable, "no candidates tried");
        for addr in candidates {
            // A failed candidate is dropped here, closing its socket, before
            // the next one is tried.
            match self.connect_addr(addr) {
                Ok(connection) => return Ok(connection),
                Err(e) => last_err = e,
            }
        }
        Err(ErrorKind::Connect.cause(last_err).into())
    }

    fn connect_addr(&self, addr: SocketAddr) -> io::Result<Connection> {
        let stream = TcpStream::connect(addr)?;
        if self.secure {
            let connector = TlsConnector::new().map_err(other_error)?;
            let stream = connector
                .connect(&self.host, stream)
                .map_err(other_error)?;
            Ok(Connection::Tls(Box::new(stream)))
        } else {
            Ok(Connection::Plain(stream))
        }
    }
}

fn other_error<E>(e: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::Other, e)
}

fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "localhost".to_owned())
}

#[derive(Debug)]
enum Connection {
    Plain(TcpStream),
    Tls(Box<TlsStream<TcpStream>>),
}
impl Connection {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match *self {
            Connection::Plain(ref mut stream) => stream.write_all(buf),
            Connection::Tls(ref mut stream) => stream.write_all(buf),
        }
    }
    fn flush(&mut self) -> io::Result<()> {
        match *self {
            Connection::Plain(ref mut stream) => stream.flush(),
            Connection::Tls(ref mut stream) => stream.flush(),
        }
    }
}
