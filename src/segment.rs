//! Raw TCP segment access
//!
//! A borrowed view over captured segment bytes. The only structure it
//! reads is the 16-bit checksum field at byte offsets 16-17; header
//! fields, options and payload are opaque byte ranges here.

use crate::error::{ValidationError, ValidationResult};

/// Minimum TCP segment size: the fixed 20-byte header
pub const MIN_SEGMENT_LEN: usize = 20;

/// Byte offset of the checksum field within the TCP header
pub const CHECKSUM_OFFSET: usize = 16;

/// Borrowed view of one captured TCP segment.
#[derive(Debug, Clone, Copy)]
pub struct TcpSegment<'a> {
    bytes: &'a [u8],
}

impl<'a> TcpSegment<'a> {
    /// Wraps raw segment bytes, rejecting anything shorter than the
    /// fixed TCP header.
    pub fn new(bytes: &'a [u8]) -> ValidationResult<Self> {
        if bytes.len() < MIN_SEGMENT_LEN {
            return Err(ValidationError::MalformedSegment(bytes.len()));
        }
        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// The checksum carried in the segment, big-endian at offsets 16-17.
    pub fn embedded_checksum(&self) -> u16 {
        u16::from_be_bytes([
            self.bytes[CHECKSUM_OFFSET],
            self.bytes[CHECKSUM_OFFSET + 1],
        ])
    }

    /// Copy of the segment with the checksum field zeroed, the form the
    /// checksum is computed over. The caller's buffer stays untouched.
    pub fn with_zeroed_checksum(&self) -> Vec<u8> {
        let mut copy = self.bytes.to_vec();
        copy[CHECKSUM_OFFSET] = 0;
        copy[CHECKSUM_OFFSET + 1] = 0;
        copy
    }
}
