//! Protocol module - Diagnostic request/response framing
//!
//! Frames use asynchronous HDLC-style byte stuffing:
//! - payload followed by its CRC16 (little-endian)
//! - `0x7D` and `0x7E` inside that body escaped as `0x7D 0x5D` / `0x7D 0x5E`
//! - a single literal `0x7E` terminator

mod codec;
mod crc;
mod hdlc;
pub mod log_mask;

pub use codec::*;
pub use crc::*;
pub use hdlc::*;

/// Frame terminator
pub const FLAG: u8 = 0x7E;

/// Escape introducer
pub const ESC: u8 = 0x7D;

/// XOR applied to an escaped byte (`0x7D ^ 0x20 == 0x5D`, `0x7E ^ 0x20 == 0x5E`)
pub const ESC_MASK: u8 = 0x20;

/// Size of the CRC trailer carried by every frame
pub const CRC_LEN: usize = 2;
