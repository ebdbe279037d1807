//! GSMTAP capture headers
//!
//! A GSMTAP header precedes each decoded signalling message handed to a
//! capture consumer. Two fixed big-endian layouts exist:
//! - version 2: 16 bytes, header length field 4 (32-bit words)
//! - version 3: 28 bytes, header length field 7, adds a device timestamp
//!
//! Field widths are a caller precondition; values are packed as given.

mod timestamp;
mod types;

pub use timestamp::*;
pub use types::*;

use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// UDP port capture consumers listen on for GSMTAP
pub const GSMTAP_UDP_PORT: u16 = 4729;

/// Header encoding errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Invalid GSMTAP header version {0} (expected 2 or 3)")]
    InvalidHeaderVersion(u8),
}

/// Supported header layouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum GsmtapVersion {
    #[default]
    V2 = 2,
    V3 = 3,
}

impl GsmtapVersion {
    /// Value of the header length field, in 32-bit words
    pub fn header_words(self) -> u8 {
        match self {
            GsmtapVersion::V2 => 4,
            GsmtapVersion::V3 => 7,
        }
    }

    /// Encoded header size in bytes
    pub fn header_len(self) -> usize {
        self.header_words() as usize * 4
    }
}

impl TryFrom<u8> for GsmtapVersion {
    type Error = HeaderError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            2 => Ok(GsmtapVersion::V2),
            3 => Ok(GsmtapVersion::V3),
            other => Err(HeaderError::InvalidHeaderVersion(other)),
        }
    }
}

impl From<GsmtapVersion> for u8 {
    fn from(version: GsmtapVersion) -> u8 {
        version as u8
    }
}

/// Link, timing and quality metadata for one captured message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GsmtapHeader {
    pub version: GsmtapVersion,
    /// [`PayloadType`] code
    pub payload_type: u8,
    pub timeslot: u8,
    pub arfcn: u16,
    pub signal_dbm: i8,
    pub snr_db: i8,
    pub frame_number: u32,
    /// Channel or RRC message type code, depending on `payload_type`
    pub sub_type: u8,
    pub antenna_nr: u8,
    pub sub_slot: u8,
    /// Version 3 only
    pub device_sec: u64,
    /// Version 3 only
    pub device_usec: u32,
}

impl GsmtapHeader {
    pub fn new(version: GsmtapVersion, payload_type: PayloadType) -> Self {
        Self {
            version,
            payload_type: payload_type.code(),
            ..Default::default()
        }
    }

    /// Fill the version 3 timing fields from a device timestamp
    pub fn with_device_time(mut self, ts: DeviceTimestamp) -> Self {
        self.device_sec = ts.unix_secs();
        self.device_usec = ts.subsec_micros();
        self
    }

    pub fn encoded_len(&self) -> usize {
        self.version.header_len()
    }

    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.version.into());
        buf.put_u8(self.version.header_words());
        buf.put_u8(self.payload_type);
        buf.put_u8(self.timeslot);
        buf.put_u16(self.arfcn);
        buf.put_i8(self.signal_dbm);
        buf.put_i8(self.snr_db);
        buf.put_u32(self.frame_number);
        buf.put_u8(self.sub_type);
        buf.put_u8(self.antenna_nr);
        buf.put_u8(self.sub_slot);
        // reserved
        buf.put_u8(0);

        if self.version == GsmtapVersion::V3 {
            buf.put_u64(self.device_sec);
            buf.put_u32(self.device_usec);
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }

    /// Header immediately followed by `payload`
    pub fn encapsulate(&self, payload: &[u8]) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len() + payload.len());
        self.encode_into(&mut buf);
        buf.put_slice(payload);
        buf.freeze()
    }
}

/// Encode a GSMTAP header from raw field values.
///
/// `device_sec` and `device_usec` are ignored for version 2. Any version
/// other than 2 or 3 is rejected before anything is encoded.
#[allow(clippy::too_many_arguments)]
pub fn encode_header(
    version: u8,
    payload_type: u8,
    timeslot: u8,
    arfcn: u16,
    signal_dbm: i8,
    snr_db: i8,
    frame_number: u32,
    sub_type: u8,
    antenna_nr: u8,
    sub_slot: u8,
    device_sec: u64,
    device_usec: u32,
) -> Result<Vec<u8>, HeaderError> {
    let header = GsmtapHeader {
        version: GsmtapVersion::try_from(version)?,
        payload_type,
        timeslot,
        arfcn,
        signal_dbm,
        snr_db,
        frame_number,
        sub_type,
        antenna_nr,
        sub_slot,
        device_sec,
        device_usec,
    };
    Ok(header.encode())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(version: u8) -> Result<Vec<u8>, HeaderError> {
        encode_header(
            version,
            PayloadType::LteRrc.code(),
            1,
            0x1234,
            -64,
            5,
            0xDEAD_BEEF,
            3,
            0,
            0,
            0x0102_0304_0506_0708,
            999_999,
        )
    }

    #[test]
    fn test_v2_layout() {
        let hdr = sample(2).unwrap();
        assert_eq!(hdr.len(), 16);
        assert_eq!(hdr[1], 0x04);
        assert_eq!(
            hdr,
            vec![
                0x02, 0x04, 0x0D, 0x01, 0x12, 0x34, 0xC0, 0x05, 0xDE, 0xAD, 0xBE, 0xEF, 0x03,
                0x00, 0x00, 0x00
            ]
        );
    }

    #[test]
    fn test_v3_layout() {
        let hdr = sample(3).unwrap();
        assert_eq!(hdr.len(), 28);
        assert_eq!(hdr[0], 0x03);
        assert_eq!(hdr[1], 0x07);
        assert_eq!(&hdr[2..16], &sample(2).unwrap()[2..]);
        assert_eq!(
            &hdr[16..],
            &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x00, 0x0F, 0x42, 0x3F]
        );
    }

    #[test]
    fn test_arfcn_is_big_endian() {
        let hdr = encode_header(2, 0, 0, 0x1234, 0, 0, 0, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(&hdr[4..6], &[0x12, 0x34]);
    }

    #[test]
    fn test_unsupported_versions_rejected() {
        assert_eq!(sample(4), Err(HeaderError::InvalidHeaderVersion(4)));
        assert_eq!(sample(0), Err(HeaderError::InvalidHeaderVersion(0)));
        assert_eq!(sample(1), Err(HeaderError::InvalidHeaderVersion(1)));
    }

    #[test]
    fn test_header_len_matches_layout() {
        for version in [GsmtapVersion::V2, GsmtapVersion::V3] {
            let header = GsmtapHeader::new(version, PayloadType::UmtsRrc);
            assert_eq!(header.encode().len(), version.header_len());
            assert_eq!(header.encode()[1] as usize * 4, header.encoded_len());
        }
    }

    #[test]
    fn test_encapsulate() {
        let header = GsmtapHeader {
            sub_type: LteRrcType::BcchDlSch.code(),
            ..GsmtapHeader::new(GsmtapVersion::V2, PayloadType::LteRrc)
        };
        let packet = header.encapsulate(&[0xAA, 0xBB]);
        assert_eq!(packet.len(), 18);
        assert_eq!(&packet[..16], &header.encode()[..]);
        assert_eq!(&packet[16..], &[0xAA, 0xBB]);
    }

    #[test]
    fn test_device_time_fields() {
        let header = GsmtapHeader::new(GsmtapVersion::V3, PayloadType::UmtsRrc)
            .with_device_time(DeviceTimestamp::from_ticks(801));
        let hdr = header.encode();
        assert_eq!(&hdr[16..24], &(315_964_801u64).to_be_bytes());
        assert_eq!(&hdr[24..28], &1250u32.to_be_bytes());
    }

    #[test]
    fn test_version_serde() {
        #[derive(Deserialize)]
        struct Wrap {
            version: GsmtapVersion,
        }

        let ok: Wrap = toml::from_str("version = 3").unwrap();
        assert_eq!(ok.version, GsmtapVersion::V3);
        assert!(toml::from_str::<Wrap>("version = 5").is_err());
    }
}
