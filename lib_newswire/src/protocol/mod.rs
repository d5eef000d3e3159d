//! # Wire Protocol
//!
//! The framing format shared with the ingestion server. Every application
//! payload and every acknowledgment travels as a frame: a fixed-width ASCII
//! length header followed by exactly that many payload bytes. The two
//! session-boundary tokens are the exception; they are sent as bare bytes,
//! out of band, never framed.

pub mod frame;
pub mod status;

pub use frame::{decode_header, encode, HEADER_LEN};
pub use status::{classify, StatusKind, STATUS_ACCEPTED};

/// Unframed control token: proceed to the next collector, more payloads follow.
pub const TOKEN_NEXT: &[u8] = b"NEXT";

/// Unframed control token: session complete, the peer may close its side.
pub const TOKEN_DONE: &[u8] = b"DONE";
