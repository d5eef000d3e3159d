//! Error taxonomy for the wire client.
//!
//! Only conditions that abort a whole run surface as `Err` values; everything
//! retryable or skippable (rejected acknowledgments, unserializable collector
//! results) is handled and logged inside the session driver.

use std::io;
use thiserror::Error;

/// Errors raised by the frame codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FramingError {
    /// The decimal length text does not fit inside the fixed-width header.
    #[error("payload length {0} does not fit in the fixed-width frame header")]
    SizeOverflow(usize),

    /// The header is not `<length N>` left-justified in a 32-byte field.
    #[error("malformed length header: {0:?}")]
    MalformedHeader(String),
}

/// Fatal errors that abort an ingestion run.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The initial connection to the ingestion socket could not be
    /// established. Nothing was sent.
    #[error("failed to connect to ingestion socket: {0}")]
    Connect(#[source] io::Error),

    /// The server closed the stream mid-exchange.
    #[error("server closed unexpectedly")]
    ConnectionClosed,

    /// Reading or writing the established stream failed (includes read
    /// timeouts, which this client sets as a hardening measure).
    #[error("socket I/O error: {0}")]
    Io(#[from] io::Error),
}
