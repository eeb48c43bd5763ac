//! TCP pseudo-header construction
//!
//! The 12-byte synthetic structure that binds a TCP checksum to its IP
//! addressing, per RFC 793: source(4), destination(4), a zero byte, the
//! protocol number, and the segment length as a big-endian 16-bit word.

use crate::addr::Ipv4Addr;
use crate::error::{ValidationError, ValidationResult};

/// IP protocol number for TCP
pub const PROTO_TCP: u8 = 6;

/// Pseudo-header size in bytes
pub const PSEUDO_HEADER_LEN: usize = 12;

/// The checksum pseudo-header.
///
/// A derived value, rebuilt for every validation. It never appears on
/// the wire and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoHeader([u8; PSEUDO_HEADER_LEN]);

impl PseudoHeader {
    /// Builds the pseudo-header for a segment of `segment_len` bytes.
    ///
    /// `segment_len` counts the whole TCP segment: header, options and
    /// payload. Lengths above 65535 cannot be represented in the 16-bit
    /// length field and fail with `LengthOverflow`; they are never
    /// silently truncated.
    pub fn new(src: Ipv4Addr, dst: Ipv4Addr, segment_len: usize) -> ValidationResult<Self> {
        let length = u16::try_from(segment_len)
            .map_err(|_| ValidationError::LengthOverflow(segment_len))?;

        let mut pseudo = [0u8; PSEUDO_HEADER_LEN];
        pseudo[0..4].copy_from_slice(src.as_bytes());
        pseudo[4..8].copy_from_slice(dst.as_bytes());
        pseudo[8] = 0;
        pseudo[9] = PROTO_TCP;
        pseudo[10..12].copy_from_slice(&length.to_be_bytes());
        Ok(Self(pseudo))
    }

    pub fn as_bytes(&self) -> &[u8; PSEUDO_HEADER_LEN] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_byte_exact() {
        let src = Ipv4Addr::new(192, 168, 1, 1);
        let dst = Ipv4Addr::new(192, 168, 1, 2);
        let pseudo = PseudoHeader::new(src, dst, 20).unwrap();
        assert_eq!(
            pseudo.as_bytes(),
            &[0xC0, 0xA8, 0x01, 0x01, 0xC0, 0xA8, 0x01, 0x02, 0x00, 0x06, 0x00, 0x14]
        );
    }

    #[test]
    fn test_length_field_is_big_endian() {
        let pseudo =
            PseudoHeader::new(Ipv4Addr::UNSPECIFIED, Ipv4Addr::UNSPECIFIED, 0x1234).unwrap();
        assert_eq!(&pseudo.as_bytes()[10..12], &[0x12, 0x34]);
    }

    #[test]
    fn test_length_ceiling() {
        let src = Ipv4Addr::LOOPBACK;
        let dst = Ipv4Addr::LOOPBACK;
        assert!(PseudoHeader::new(src, dst, 65535).is_ok());
        assert_eq!(
            PseudoHeader::new(src, dst, 65536),
            Err(ValidationError::LengthOverflow(65536))
        );
    }
}
