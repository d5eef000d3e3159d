//! # Status Interpreter
//!
//! Classifies the raw acknowledgment bytes the server sends back after each
//! payload frame. The ack itself arrives framed; by the time it reaches
//! [`classify`] it has already been separated from its length header.

/// Sentinel the server sends when a payload was ingested successfully.
pub const STATUS_ACCEPTED: &[u8] = b"MSG-OK-DONE";

/// Classification of one server acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Payload ingested; advance to the next collector.
    Accepted,
    /// Empty ack: the peer closed the stream. Fatal to the run.
    ConnectionClosed,
    /// Ack is missing the `MSG-` prefix. Retryable.
    MalformedStart,
    /// Ack is missing the `-DONE` suffix. Retryable.
    MalformedEnd,
    /// Ack is well-delimited but not the accept sentinel. Retryable.
    MalformedOther,
}

impl StatusKind {
    /// True only for the accept sentinel.
    pub fn is_accepted(self) -> bool {
        matches!(self, StatusKind::Accepted)
    }

    /// True for the one classification that terminates the whole run.
    pub fn is_fatal(self) -> bool {
        matches!(self, StatusKind::ConnectionClosed)
    }
}

/// Classifies raw acknowledgment bytes. The rules apply in order:
///
/// 1. empty -> [`StatusKind::ConnectionClosed`]
/// 2. exactly `MSG-OK-DONE` -> [`StatusKind::Accepted`]
/// 3. no `MSG-` prefix -> [`StatusKind::MalformedStart`]
/// 4. no `-DONE` suffix -> [`StatusKind::MalformedEnd`]
/// 5. otherwise -> [`StatusKind::MalformedOther`]
pub fn classify(status: &[u8]) -> StatusKind {
    if status.is_empty() {
        StatusKind::ConnectionClosed
    } else if status == STATUS_ACCEPTED {
        StatusKind::Accepted
    } else if !status.starts_with(b"MSG-") {
        StatusKind::MalformedStart
    } else if !status.ends_with(b"-DONE") {
        StatusKind::MalformedEnd
    } else {
        StatusKind::MalformedOther
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_exact_sentinel() {
        assert_eq!(classify(b"MSG-OK-DONE"), StatusKind::Accepted);
        assert_eq!(classify(b"MSG-OK-DONE "), StatusKind::MalformedEnd);
        assert_eq!(classify(b"msg-ok-done"), StatusKind::MalformedStart);
    }

    #[test]
    fn empty_means_peer_hangup() {
        assert_eq!(classify(b""), StatusKind::ConnectionClosed);
        assert!(classify(b"").is_fatal());
    }

    #[test]
    fn prefix_checked_before_suffix() {
        assert_eq!(classify(b"OK-DONE"), StatusKind::MalformedStart);
        assert_eq!(classify(b"MSG-OK"), StatusKind::MalformedEnd);
        assert_eq!(classify(b"MSG-RETRY-DONE"), StatusKind::MalformedOther);
    }

    #[test]
    fn every_nonempty_input_gets_exactly_one_kind() {
        for status in [
            &b"MSG-OK-DONE"[..],
            b"MSG-OK",
            b"OK",
            b"-DONE",
            b"MSG--DONE",
            b"\x00\xff",
        ] {
            let kind = classify(status);
            assert_ne!(kind, StatusKind::ConnectionClosed);
            assert_eq!(kind.is_accepted(), status == STATUS_ACCEPTED);
        }
    }
}
