//! # Session Driver
//!
//! Orchestrates one end-to-end ingestion run: connect once, walk the
//! registered collectors in order, frame and send each collector's serialized
//! results, wait for the framed acknowledgment, and retry or advance. The
//! unframed `NEXT` token separates collectors on the wire; `DONE` terminates
//! the session.
//!
//! ## State Machine
//!
//! `Connecting -> PerCollector(i) -> SendAttempt(i, attempts_left) ->
//! AwaitAck(i) -> Decide(i) -> Advance/Terminate`
//!
//! - A fetch status outside `[200, 300)` skips the collector; no frame is
//!   sent for it.
//! - Unserializable results are logged and the collector is skipped.
//! - A rejected ack decrements the retry budget; exhaustion drops the payload
//!   and the session advances. Only a peer hangup (or a socket I/O failure)
//!   aborts the run.
//!
//! Strictly synchronous: one collector is fetched, sent, and acknowledged
//! before the next begins. The driver owns the stream for the run's lifetime
//! and drops it on every exit path.

use std::io::{ErrorKind, Read, Write};
use std::os::unix::net::UnixStream;

use log::{debug, error, info, warn};

use crate::collectors::Collector;
use crate::config::Settings;
use crate::errors::SessionError;
use crate::protocol::{self, StatusKind, HEADER_LEN, TOKEN_DONE, TOKEN_NEXT};

/// Outcome counters for one completed (non-fatal) run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Payloads acknowledged with the accept sentinel.
    pub delivered: usize,
    /// Collectors that produced no payload: non-2xx fetch status, or results
    /// that would not serialize.
    pub skipped: usize,
    /// Payloads abandoned after the retry budget ran out.
    pub dropped: usize,
}

/// Drives one ingestion session over an established stream.
///
/// Generic over the stream so tests can drive the state machine with
/// in-memory transcripts; production code goes through [`connect`].
///
/// [`connect`]: SessionDriver::connect
#[derive(Debug)]
pub struct SessionDriver<S: Read + Write> {
    stream: S,
    retry_budget: u32,
}

impl SessionDriver<UnixStream> {
    /// Connects to the ingestion socket and applies the configured timeouts.
    ///
    /// Connection failure is fatal; nothing is retried at this layer.
    pub fn connect(settings: &Settings) -> Result<Self, SessionError> {
        let stream =
            UnixStream::connect(&settings.socket_path).map_err(SessionError::Connect)?;
        stream.set_read_timeout(Some(settings.io_timeout))?;
        stream.set_write_timeout(Some(settings.io_timeout))?;
        debug!(
            "connected to {} (timeout {:?})",
            settings.socket_path.display(),
            settings.io_timeout
        );
        Ok(Self::new(stream, settings.retry_budget))
    }
}

impl<S: Read + Write> SessionDriver<S> {
    /// Wraps an already-connected stream.
    pub fn new(stream: S, retry_budget: u32) -> Self {
        Self {
            stream,
            retry_budget,
        }
    }

    /// Runs the full session over the registered collectors, in order.
    ///
    /// Consumes the driver; the stream is closed on every exit path. A fatal
    /// error leaves the remaining collectors unattempted and `DONE` unsent.
    pub fn run(
        mut self,
        registry: &mut [Box<dyn Collector>],
    ) -> Result<SessionReport, SessionError> {
        let mut report = SessionReport::default();
        let last = registry.len().saturating_sub(1);

        for (i, collector) in registry.iter_mut().enumerate() {
            self.process_collector(collector.as_mut(), &mut report)?;

            // NEXT separates collector slots; the last one is followed by
            // DONE instead. Skipped and dropped collectors still occupy a
            // slot in the sequence.
            if i < last {
                self.stream.write_all(TOKEN_NEXT)?;
            }
        }

        self.stream.write_all(TOKEN_DONE)?;
        self.stream.flush()?;
        info!(
            "session complete: {} delivered, {} skipped, {} dropped",
            report.delivered, report.skipped, report.dropped
        );
        Ok(report)
    }

    /// Fetches and serializes one collector, then hands off to the
    /// send-and-ack loop. Skips are not errors.
    fn process_collector(
        &mut self,
        collector: &mut dyn Collector,
        report: &mut SessionReport,
    ) -> Result<(), SessionError> {
        let status = collector.request();
        if !(200..300).contains(&status) {
            info!(
                "{}: no results this run (status {})",
                collector.name(),
                status
            );
            report.skipped += 1;
            return Ok(());
        }

        let payload = match serde_json::to_vec(collector.results()) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(
                    "{}: results not serializable ({}), dropping payload",
                    collector.name(),
                    e
                );
                report.skipped += 1;
                return Ok(());
            }
        };

        self.deliver(collector.name(), &payload, report)
    }

    /// Send-and-ack loop for one serialized payload, bounded by the retry
    /// budget (first attempt included).
    fn deliver(
        &mut self,
        name: &str,
        payload: &[u8],
        report: &mut SessionReport,
    ) -> Result<(), SessionError> {
        let frame = match protocol::encode(payload) {
            Ok(frame) => frame,
            Err(e) => {
                // Encoding is local and deterministic; retrying cannot help.
                error!("{}: {}, dropping payload", name, e);
                report.skipped += 1;
                return Ok(());
            }
        };

        let mut attempts_left = self.retry_budget;
        while attempts_left > 0 {
            self.stream.write_all(&frame)?;
            self.stream.flush()?;

            let kind = self.read_ack(name)?;
            if kind.is_accepted() {
                debug!("{}: payload accepted ({} bytes)", name, payload.len());
                report.delivered += 1;
                return Ok(());
            }
            if kind.is_fatal() {
                error!("{}: server closed the stream mid-exchange", name);
                return Err(SessionError::ConnectionClosed);
            }
            attempts_left -= 1;
        }

        warn!(
            "{}: failed too many times, data={}",
            name,
            String::from_utf8_lossy(payload)
        );
        report.dropped += 1;
        Ok(())
    }

    /// Reads one framed acknowledgment: the 32-byte length header, then the
    /// declared number of status bytes.
    ///
    /// A header that does not parse counts as a malformed (retryable) status
    /// rather than a fatal framing fault; the retry budget bounds how often
    /// that can recur. An EOF while reading is a peer hangup.
    fn read_ack(&mut self, name: &str) -> Result<StatusKind, SessionError> {
        let mut header = [0u8; HEADER_LEN];
        self.read_exact(&mut header)?;

        let len = match protocol::decode_header(&header) {
            Ok(len) => len,
            Err(e) => {
                warn!("{}: bad ack header ({}), treating as malformed status", name, e);
                return Ok(StatusKind::MalformedOther);
            }
        };

        let mut status = vec![0u8; len];
        self.read_exact(&mut status)?;

        let kind = protocol::classify(&status);
        match kind {
            StatusKind::Accepted | StatusKind::ConnectionClosed => {}
            StatusKind::MalformedStart => warn!(
                "{}: unexpected response start: {:?}",
                name,
                String::from_utf8_lossy(&status)
            ),
            StatusKind::MalformedEnd => warn!(
                "{}: unexpected response finish: {:?}",
                name,
                String::from_utf8_lossy(&status)
            ),
            StatusKind::MalformedOther => warn!(
                "{}: problematic response: {:?}",
                name,
                String::from_utf8_lossy(&status)
            ),
        }
        Ok(kind)
    }

    /// `read_exact` with EOF mapped to the fatal peer-hangup error.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SessionError> {
        self.stream.read_exact(buf).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => SessionError::ConnectionClosed,
            _ => SessionError::Io(e),
        })
    }
}
