//! Validate-by-zeroing protocol
//!
//! The receiver-side check from RFC 793: rebuild the pseudo-header,
//! zero the embedded checksum field on a private copy of the segment,
//! recompute the checksum and compare it bit-for-bit.

use crate::addr::Ipv4Addr;
use crate::checksum::{fold_sum, sum_words};
use crate::error::ValidationResult;
use crate::pseudo::PseudoHeader;
use crate::segment::TcpSegment;

// The pseudo-header is even-length, so chaining both buffers through one
// running sum equals summing their concatenation.
fn compute(view: &TcpSegment, pseudo: &PseudoHeader) -> u16 {
    let zeroed = view.with_zeroed_checksum();
    fold_sum(sum_words(&zeroed, sum_words(pseudo.as_bytes(), 0)))
}

/// Checks a segment's embedded checksum against a caller-built
/// pseudo-header.
///
/// `Ok(true)` means the recomputed checksum is identical to the embedded
/// one, `Ok(false)` means it differs. `Err` means the segment could not
/// be checked at all; that is never folded into a boolean verdict.
pub fn verify_segment(segment: &[u8], pseudo: &PseudoHeader) -> ValidationResult<bool> {
    let view = TcpSegment::new(segment)?;
    let embedded = view.embedded_checksum();
    let computed = compute(&view, pseudo);

    log::debug!(
        "verify: len={} embedded={:#06x} computed={:#06x}",
        view.len(),
        embedded,
        computed
    );
    Ok(computed == embedded)
}

/// One-shot verification from addressing material and raw segment bytes.
///
/// Builds the pseudo-header out of `segment.len()` and delegates to
/// [`verify_segment`].
pub fn verify(src: Ipv4Addr, dst: Ipv4Addr, segment: &[u8]) -> ValidationResult<bool> {
    let pseudo = PseudoHeader::new(src, dst, segment.len())?;
    verify_segment(segment, &pseudo)
}

/// The correct checksum for `segment` between `src` and `dst`, with the
/// embedded field treated as zero.
///
/// This is the sender-side counterpart of [`verify`]: writing the
/// returned value into byte offsets 16-17 makes the segment pass
/// validation.
pub fn segment_checksum(src: Ipv4Addr, dst: Ipv4Addr, segment: &[u8]) -> ValidationResult<u16> {
    let pseudo = PseudoHeader::new(src, dst, segment.len())?;
    let view = TcpSegment::new(segment)?;
    Ok(compute(&view, &pseudo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const SRC: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);
    const DST: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 2);

    #[test]
    fn test_known_header_checksum_passes() {
        // Zeroed 20-byte header between these addresses checksums to 0x7C91.
        let mut segment = [0u8; 20];
        segment[16] = 0x7C;
        segment[17] = 0x91;
        assert_eq!(verify(SRC, DST, &segment), Ok(true));
    }

    #[test]
    fn test_corrupted_byte_fails() {
        let mut segment = [0u8; 20];
        segment[16] = 0x7C;
        segment[17] = 0x91;
        segment[3] = 0x01;
        assert_eq!(verify(SRC, DST, &segment), Ok(false));
    }

    #[test]
    fn test_short_segment_is_an_error_not_a_verdict() {
        assert_eq!(
            verify(SRC, DST, &[0u8; 19]),
            Err(ValidationError::MalformedSegment(19))
        );
    }

    #[test]
    fn test_segment_checksum_round_trips() {
        let mut segment = [0u8; 20];
        let checksum = segment_checksum(SRC, DST, &segment).unwrap();
        assert_eq!(checksum, 0x7C91);

        segment[16..18].copy_from_slice(&checksum.to_be_bytes());
        assert_eq!(verify(SRC, DST, &segment), Ok(true));
    }

    #[test]
    fn test_segment_checksum_ignores_embedded_field() {
        let mut stale = [0u8; 20];
        stale[16] = 0xDE;
        stale[17] = 0xAD;
        assert_eq!(segment_checksum(SRC, DST, &stale), Ok(0x7C91));
    }
}
