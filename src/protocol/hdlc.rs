//! HDLC-style byte stuffing and frame assembly
//!
//! Escape order matters: `0x7D` is escaped before `0x7E` so the escape
//! sequences introduced for terminators are never escaped again. A single
//! pass over the input that matches both bytes gives the same output.

use bytes::BufMut;
use thiserror::Error;

use super::{checksum, CRC_LEN, ESC, ESC_MASK, FLAG};

/// Structural problems found while taking a frame apart
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    #[error("missing frame terminator")]
    MissingTerminator,

    #[error("unescaped terminator at offset {offset}")]
    MisplacedTerminator { offset: usize },

    #[error("frame body is {0} bytes, shorter than the CRC trailer")]
    TooShort(usize),
}

/// Frame decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("CRC mismatch: frame carries {expected:#06x}, payload computes {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("Malformed frame: {0}")]
    Malformed(#[from] Malformed),

    #[error("Frame too large: {0} bytes (max: {1})")]
    TooLarge(usize, usize),
}

impl FrameError {
    /// Structural failure, as opposed to an integrity failure
    pub fn is_malformed(&self) -> bool {
        matches!(self, FrameError::Malformed(_) | FrameError::TooLarge(..))
    }
}

/// Escape reserved bytes in `payload`.
///
/// `0x7D` becomes `0x7D 0x5D` and `0x7E` becomes `0x7D 0x5E`; every other
/// byte is copied as is.
pub fn escape(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len());
    escape_into(payload, &mut out);
    out
}

pub(crate) fn escape_into<B: BufMut>(bytes: &[u8], out: &mut B) {
    for &b in bytes {
        match b {
            ESC | FLAG => {
                out.put_u8(ESC);
                out.put_u8(b ^ ESC_MASK);
            }
            _ => out.put_u8(b),
        }
    }
}

/// Reverse [`escape`].
///
/// A `0x7D` that is not followed by `0x5D` or `0x5E` is kept as a literal
/// byte; the CRC check is what rejects such input.
pub fn unescape(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len());
    let mut bytes = payload.iter().copied().peekable();

    while let Some(b) = bytes.next() {
        if b == ESC {
            if let Some(&next) = bytes.peek() {
                if next == ESC ^ ESC_MASK || next == FLAG ^ ESC_MASK {
                    out.push(next ^ ESC_MASK);
                    bytes.next();
                    continue;
                }
            }
        }
        out.push(b);
    }

    out
}

/// Build a wire frame: `escape(payload || crc16_le(payload)) || 0x7E`
pub fn build_frame(payload: &[u8]) -> Vec<u8> {
    // Worst case every byte is escaped
    let mut frame = Vec::with_capacity((payload.len() + CRC_LEN) * 2 + 1);
    frame_into(payload, &mut frame);
    frame
}

pub(crate) fn frame_into<B: BufMut>(payload: &[u8], out: &mut B) {
    let crc = checksum(payload).to_le_bytes();
    escape_into(payload, out);
    escape_into(&crc, out);
    out.put_u8(FLAG);
}

/// A frame taken apart, with both the transmitted and the recomputed CRC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    pub payload: Vec<u8>,
    /// CRC carried in the frame trailer
    pub received_crc: u16,
    /// CRC computed over `payload`
    pub computed_crc: u16,
}

impl ParsedFrame {
    /// Strip the terminator, unescape and split off the CRC trailer.
    ///
    /// Only structural problems are errors here; a CRC mismatch is reported
    /// through [`ParsedFrame::crc_ok`].
    pub fn parse(framed: &[u8]) -> Result<Self, FrameError> {
        let (&last, body) = framed.split_last().ok_or(Malformed::MissingTerminator)?;
        if last != FLAG {
            return Err(Malformed::MissingTerminator.into());
        }
        if let Some(offset) = body.iter().position(|&b| b == FLAG) {
            return Err(Malformed::MisplacedTerminator { offset }.into());
        }

        let mut payload = unescape(body);
        if payload.len() < CRC_LEN {
            return Err(Malformed::TooShort(payload.len()).into());
        }

        let trailer = payload.split_off(payload.len() - CRC_LEN);
        let received_crc = u16::from_le_bytes([trailer[0], trailer[1]]);
        let computed_crc = checksum(&payload);

        Ok(Self {
            payload,
            received_crc,
            computed_crc,
        })
    }

    pub fn crc_ok(&self) -> bool {
        self.received_crc == self.computed_crc
    }

    /// Payload if the CRC verifies, [`FrameError::ChecksumMismatch`] otherwise
    pub fn into_verified(self) -> Result<Vec<u8>, FrameError> {
        if self.crc_ok() {
            Ok(self.payload)
        } else {
            Err(FrameError::ChecksumMismatch {
                expected: self.received_crc,
                actual: self.computed_crc,
            })
        }
    }
}

/// Take a frame apart, returning the payload and whether its CRC verifies
pub fn parse_frame(framed: &[u8]) -> Result<(Vec<u8>, bool), FrameError> {
    let frame = ParsedFrame::parse(framed)?;
    let crc_ok = frame.crc_ok();
    Ok((frame.payload, crc_ok))
}

/// Take a frame apart, failing on CRC mismatch as well as malformed input
pub fn decode_frame(framed: &[u8]) -> Result<Vec<u8>, FrameError> {
    ParsedFrame::parse(framed)?.into_verified()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame `payload` but carry the CRC of the unmodified payload, with one
    /// bit of the payload flipped
    fn corrupted_frame(payload: &[u8], bit: usize) -> Vec<u8> {
        let mut body = payload.to_vec();
        body[bit / 8] ^= 1 << (bit % 8);
        body.extend_from_slice(&checksum(payload).to_le_bytes());
        let mut framed = escape(&body);
        framed.push(FLAG);
        framed
    }

    #[test]
    fn test_escape_vectors() {
        assert_eq!(escape(&[0x7D]), vec![0x7D, 0x5D]);
        assert_eq!(escape(&[0x7E]), vec![0x7D, 0x5E]);
        assert_eq!(escape(&[0x7D, 0x7E]), vec![0x7D, 0x5D, 0x7D, 0x5E]);
        assert_eq!(escape(&[0x01, 0x5D, 0x5E]), vec![0x01, 0x5D, 0x5E]);
        assert!(escape(&[]).is_empty());
    }

    #[test]
    fn test_unescape_vectors() {
        assert_eq!(unescape(&[0x7D, 0x5D]), vec![0x7D]);
        assert_eq!(unescape(&[0x7D, 0x5E]), vec![0x7E]);
        assert_eq!(unescape(&[0x7D, 0x5D, 0x7D, 0x5E]), vec![0x7D, 0x7E]);
    }

    #[test]
    fn test_unescape_dangling_escape_is_literal() {
        assert_eq!(unescape(&[0x7D]), vec![0x7D]);
        assert_eq!(unescape(&[0x01, 0x7D]), vec![0x01, 0x7D]);
        assert_eq!(unescape(&[0x7D, 0x00]), vec![0x7D, 0x00]);
        assert_eq!(unescape(&[0x7D, 0x7D, 0x5E]), vec![0x7D, 0x7E]);
    }

    #[test]
    fn test_build_frame_vectors() {
        assert_eq!(build_frame(&[]), vec![0x00, 0x00, 0x7E]);
        assert_eq!(build_frame(&[0x01]), vec![0x01, 0xF1, 0xE1, 0x7E]);
        assert_eq!(
            build_frame(&[0x4B, 0x0F, 0x00, 0x00]),
            vec![0x4B, 0x0F, 0x00, 0x00, 0xBB, 0x60, 0x7E]
        );
        assert_eq!(
            build_frame(&[0x7D, 0x7E]),
            vec![0x7D, 0x5D, 0x7D, 0x5E, 0x02, 0xD5, 0x7E]
        );
    }

    #[test]
    fn test_build_frame_escapes_crc_bytes() {
        // crc 0x7e20
        assert_eq!(build_frame(&[0x2A]), vec![0x2A, 0x20, 0x7D, 0x5E, 0x7E]);
        // crc 0x7d38
        assert_eq!(build_frame(&[0x19]), vec![0x19, 0x38, 0x7D, 0x5D, 0x7E]);
        // crc 0x937e
        assert_eq!(build_frame(&[0x60]), vec![0x60, 0x7D, 0x5E, 0x93, 0x7E]);
    }

    #[test]
    fn test_parse_frame_roundtrip() {
        for payload in [&[][..], &[0x2A][..], &[0x19][..], &[0x7D, 0x7E, 0x7E, 0x00][..]] {
            let (parsed, crc_ok) = parse_frame(&build_frame(payload)).unwrap();
            assert_eq!(parsed, payload);
            assert!(crc_ok);
        }
    }

    #[test]
    fn test_parse_frame_reports_both_crcs() {
        let frame = ParsedFrame::parse(&[0x01, 0xF1, 0xE1, 0x7E]).unwrap();
        assert_eq!(frame.payload, vec![0x01]);
        assert_eq!(frame.received_crc, 0xE1F1);
        assert_eq!(frame.computed_crc, 0xE1F1);
    }

    #[test]
    fn test_parse_frame_missing_terminator() {
        assert_eq!(
            parse_frame(&[]),
            Err(FrameError::Malformed(Malformed::MissingTerminator))
        );
        assert_eq!(
            parse_frame(&[0x01, 0xF1, 0xE1]),
            Err(FrameError::Malformed(Malformed::MissingTerminator))
        );
    }

    #[test]
    fn test_parse_frame_misplaced_terminator() {
        let err = parse_frame(&[0x01, 0x7E, 0xF1, 0xE1, 0x7E]).unwrap_err();
        assert_eq!(err, FrameError::Malformed(Malformed::MisplacedTerminator { offset: 1 }));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_parse_frame_too_short() {
        assert_eq!(
            parse_frame(&[0x7E]),
            Err(FrameError::Malformed(Malformed::TooShort(0)))
        );
        // escaped pair collapses to a single byte
        assert_eq!(
            parse_frame(&[0x7D, 0x5E, 0x7E]),
            Err(FrameError::Malformed(Malformed::TooShort(1)))
        );
    }

    #[test]
    fn test_crc_mismatch_is_not_malformed() {
        let (payload, crc_ok) = parse_frame(&[0x01, 0x00, 0x00, 0x7E]).unwrap();
        assert_eq!(payload, vec![0x01]);
        assert!(!crc_ok);

        let err = decode_frame(&[0x01, 0x00, 0x00, 0x7E]).unwrap_err();
        assert_eq!(
            err,
            FrameError::ChecksumMismatch {
                expected: 0x0000,
                actual: 0xE1F1
            }
        );
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_single_bit_corruption_detected() {
        let payload = [0x4B, 0x0F, 0x7E, 0x00, 0x7D, 0x10, 0xFF, 0x42];
        for bit in 0..payload.len() * 8 {
            let (_, crc_ok) = parse_frame(&corrupted_frame(&payload, bit)).unwrap();
            assert!(!crc_ok, "bit {} flip went undetected", bit);
        }
    }

    #[quickcheck_macros::quickcheck]
    fn prop_unescape_reverses_escape(payload: Vec<u8>) -> bool {
        unescape(&escape(&payload)) == payload
    }

    #[quickcheck_macros::quickcheck]
    fn prop_frame_roundtrip(payload: Vec<u8>) -> bool {
        parse_frame(&build_frame(&payload)) == Ok((payload, true))
    }

    #[quickcheck_macros::quickcheck]
    fn prop_frame_has_single_terminator(payload: Vec<u8>) -> bool {
        let frame = build_frame(&payload);
        let (&last, body) = frame.split_last().unwrap();
        let lone_escape = body
            .windows(2)
            .any(|w| w[0] == ESC && w[1] != 0x5D && w[1] != 0x5E)
            || body.last() == Some(&ESC);
        last == FLAG && !body.contains(&FLAG) && !lone_escape
    }

    #[quickcheck_macros::quickcheck]
    fn prop_escape_never_shrinks(payload: Vec<u8>) -> bool {
        escape(&payload).len() >= payload.len()
    }
}
