//! Streaming frame codec
//!
//! Splits a byte stream received from the device into frames and appends
//! outgoing frames to a write buffer.

use bytes::{Buf, Bytes, BytesMut};

use super::hdlc::frame_into;
use super::{FrameError, ParsedFrame, CRC_LEN, FLAG};

/// Default upper bound on a buffered, unterminated frame (64 KiB)
pub const DEFAULT_MAX_FRAME_SIZE: usize = 64 * 1024;

/// Append the wire frame for `payload` to `buf`
pub fn write_frame(payload: &[u8], buf: &mut BytesMut) {
    buf.reserve(payload.len() + CRC_LEN + 1);
    frame_into(payload, buf);
}

/// Decodes terminator-delimited frames from a receive buffer
#[derive(Debug, Clone)]
pub struct Decoder {
    max_frame_size: usize,
}

impl Decoder {
    pub fn new() -> Self {
        Self::with_max_frame_size(DEFAULT_MAX_FRAME_SIZE)
    }

    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        Self { max_frame_size }
    }

    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }

    /// Attempt to decode one frame from the buffer.
    ///
    /// Returns `Ok(None)` if no complete frame is buffered yet. A frame that
    /// fails validation is still consumed, so the caller can keep decoding
    /// what follows it.
    pub fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Bytes>, FrameError> {
        loop {
            let Some(end) = buf.iter().position(|&b| b == FLAG) else {
                if buf.len() > self.max_frame_size {
                    let len = buf.len();
                    buf.clear();
                    tracing::debug!("Discarding {} unterminated bytes", len);
                    return Err(FrameError::TooLarge(len, self.max_frame_size));
                }
                return Ok(None);
            };

            // Bare flag between frames
            if end == 0 {
                buf.advance(1);
                tracing::trace!("Skipping empty frame");
                continue;
            }

            let raw = buf.split_to(end + 1);
            if raw.len() > self.max_frame_size {
                return Err(FrameError::TooLarge(raw.len(), self.max_frame_size));
            }

            let frame = ParsedFrame::parse(&raw)?;
            if !frame.crc_ok() {
                tracing::debug!(
                    "CRC mismatch on {}-byte frame: carried {:#06x}, computed {:#06x}",
                    raw.len(),
                    frame.received_crc,
                    frame.computed_crc
                );
            }
            return frame.into_verified().map(|payload| Some(Bytes::from(payload)));
        }
    }

    /// Decode every complete frame in the buffer, leaving any trailing
    /// partial frame in place
    pub fn decode_all(&mut self, buf: &mut BytesMut) -> Vec<Result<Bytes, FrameError>> {
        let mut frames = Vec::new();
        loop {
            match self.decode(buf) {
                Ok(Some(payload)) => frames.push(Ok(payload)),
                Ok(None) => break,
                Err(e) => frames.push(Err(e)),
            }
        }
        frames
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
