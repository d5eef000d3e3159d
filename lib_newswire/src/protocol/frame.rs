//! # Frame Codec
//!
//! Encodes a byte payload into a length-header-prefixed frame and decodes the
//! fixed-size header back into a byte count.
//!
//! ## Header Format (exact bytes)
//! ASCII `<length ` + decimal digits of N + `>`, left-justified and padded
//! with ASCII spaces to a total width of 32 bytes. N is the payload length.
//!
//! Example: payload `{"a":1}` (7 bytes) produces the header `<length 7>`
//! followed by 22 spaces.
//!
//! Decoding is a strict fixed-width parse: the prefix, the digits, the
//! closing delimiter, and the all-spaces padding are each validated
//! explicitly. A permissive strip of `<length> ` characters from both ends
//! would also accept garbage headers made of nothing but those characters.

use crate::errors::FramingError;

/// Fixed width of the ASCII length header, in bytes.
pub const HEADER_LEN: usize = 32;

const PREFIX: &[u8] = b"<length ";

/// Wraps `payload` in a frame: `<length N>` space-padded to 32 bytes, then
/// the payload itself.
///
/// The payload may be empty. Fails with [`FramingError::SizeOverflow`] if the
/// decimal length text cannot fit inside the header field.
pub fn encode(payload: &[u8]) -> Result<Vec<u8>, FramingError> {
    let text = format!("<length {}>", payload.len());
    if text.len() > HEADER_LEN {
        return Err(FramingError::SizeOverflow(payload.len()));
    }

    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(text.as_bytes());
    frame.resize(HEADER_LEN, b' ');
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Parses a fixed-width length header back into the declared payload length.
///
/// Fails with [`FramingError::MalformedHeader`] unless the field is exactly
/// `<length ` + one or more ASCII digits + `>` + space padding.
pub fn decode_header(header: &[u8; HEADER_LEN]) -> Result<usize, FramingError> {
    let malformed =
        || FramingError::MalformedHeader(String::from_utf8_lossy(header).into_owned());

    if !header.starts_with(PREFIX) {
        return Err(malformed());
    }

    let rest = &header[PREFIX.len()..];
    let close = rest.iter().position(|&b| b == b'>').ok_or_else(malformed)?;

    let digits = &rest[..close];
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }
    // Everything after the delimiter must be padding.
    if rest[close + 1..].iter().any(|&b| b != b' ') {
        return Err(malformed());
    }

    let text = std::str::from_utf8(digits).map_err(|_| malformed())?;
    text.parse::<usize>().map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_of(frame: &[u8]) -> [u8; HEADER_LEN] {
        frame[..HEADER_LEN].try_into().unwrap()
    }

    #[test]
    fn encode_worked_example() {
        // payload of length 7 -> `<length 7>` plus 22 spaces of padding
        let frame = encode(br#"{"a":1}"#).unwrap();
        assert_eq!(frame.len(), HEADER_LEN + 7);
        let mut expected = b"<length 7>".to_vec();
        expected.resize(HEADER_LEN, b' ');
        assert_eq!(&frame[..HEADER_LEN], expected.as_slice());
        assert_eq!(&frame[HEADER_LEN..], br#"{"a":1}"#);
    }

    #[test]
    fn encode_empty_payload() {
        let frame = encode(b"").unwrap();
        assert_eq!(frame.len(), HEADER_LEN);
        assert_eq!(decode_header(&header_of(&frame)).unwrap(), 0);
    }

    #[test]
    fn header_round_trip() {
        for len in [0usize, 1, 7, 9, 10, 99, 100, 4096, 1_000_000] {
            let payload = vec![b'x'; len];
            let frame = encode(&payload).unwrap();
            assert_eq!(frame.len(), HEADER_LEN + len);
            assert_eq!(decode_header(&header_of(&frame)).unwrap(), len);
        }
    }

    #[test]
    fn decode_rejects_missing_prefix() {
        let mut header = [b' '; HEADER_LEN];
        header[..10].copy_from_slice(b"(length 7)");
        assert!(matches!(
            decode_header(&header),
            Err(FramingError::MalformedHeader(_))
        ));
    }

    #[test]
    fn decode_rejects_empty_digits() {
        let mut header = [b' '; HEADER_LEN];
        header[..9].copy_from_slice(b"<length >");
        assert!(decode_header(&header).is_err());
    }

    #[test]
    fn decode_rejects_non_digit_length() {
        let mut header = [b' '; HEADER_LEN];
        header[..11].copy_from_slice(b"<length 7a>");
        assert!(decode_header(&header).is_err());
    }

    #[test]
    fn decode_rejects_trailing_garbage() {
        let mut header = [b' '; HEADER_LEN];
        header[..10].copy_from_slice(b"<length 7>");
        header[HEADER_LEN - 1] = b'x';
        assert!(decode_header(&header).is_err());
    }

    #[test]
    fn decode_rejects_strip_only_garbage() {
        // A header made of nothing but the characters a permissive strip
        // would remove. The strict parse must not treat this as valid.
        let mut header = [b' '; HEADER_LEN];
        header[..16].copy_from_slice(b"<<lenght>length>");
        assert!(decode_header(&header).is_err());
    }

    #[test]
    fn decode_rejects_unterminated_header() {
        let mut header = [b'1'; HEADER_LEN];
        header[..PREFIX.len()].copy_from_slice(PREFIX);
        assert!(decode_header(&header).is_err());
    }
}
