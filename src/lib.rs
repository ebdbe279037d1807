//! diagtap - baseband diagnostic codec layer
//!
//! Two independent pieces used at opposite ends of a diagnostic pipeline:
//! - [`protocol`]: HDLC-style framing with a CRC16 trailer for requests to
//!   and responses from a diagnostic-capable device
//! - [`gsmtap`]: GSMTAP capture headers that tag decoded signalling messages
//!   with link-layer metadata for packet-capture tooling

pub mod config;
pub mod gsmtap;
pub mod protocol;

pub use gsmtap::{encode_header, GsmtapHeader, GsmtapVersion, HeaderError};
pub use protocol::{build_frame, checksum, decode_frame, escape, parse_frame, unescape, FrameError};
