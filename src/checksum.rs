//! RFC 1071 Internet checksum
//!
//! One's-complement sum over 16-bit big-endian words with end-around
//! carry. The accumulator is 64 bits wide, so summation itself cannot
//! overflow for any input that fits in memory; carries are folded back
//! into the low 16 bits only at finalization.

/// Sums `data` as big-endian 16-bit words on top of `initial`.
///
/// An odd trailing byte is treated as the high half of a final word whose
/// low half is zero. No folding happens here, so partial sums can be
/// chained across buffers and finalized once with [`fold_sum`].
pub fn sum_words(data: &[u8], initial: u64) -> u64 {
    let mut sum = initial;
    let mut chunks = data.chunks_exact(2);
    for chunk in chunks.by_ref() {
        sum += u16::from_be_bytes([chunk[0], chunk[1]]) as u64;
    }
    if let Some(&byte) = chunks.remainder().first() {
        sum += (byte as u64) << 8;
    }
    sum
}

/// Folds the carries of a running sum back into 16 bits and returns the
/// one's complement.
pub fn fold_sum(mut sum: u64) -> u16 {
    while (sum >> 16) != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}

/// Computes the RFC 1071 checksum of `data`.
///
/// Total over all byte slices: empty input sums to zero and yields
/// `0xFFFF`, odd-length input is virtually padded with one zero byte.
pub fn calculate_checksum(data: &[u8]) -> u16 {
    fold_sum(sum_words(data, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_all_ones() {
        assert_eq!(calculate_checksum(&[]), 0xFFFF);
    }

    #[test]
    fn test_odd_length_pads_with_zero() {
        assert_eq!(calculate_checksum(&[0xAB]), calculate_checksum(&[0xAB, 0x00]));
        assert_eq!(calculate_checksum(&[0xAB]), 0x54FF);
    }

    #[test]
    fn test_partial_sums_chain() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC];
        let whole = calculate_checksum(&data);
        let partial = sum_words(&data[..4], 0);
        assert_eq!(fold_sum(sum_words(&data[4..], partial)), whole);
    }

    #[test]
    fn test_fold_clears_multiple_carries() {
        // 0x2DDF0 needs one fold pass, 0x1FFFF needs the loop to run twice.
        assert_eq!(fold_sum(0x1FFFF), !(0x0001u16));
        assert_eq!(fold_sum(0x2DDF0), !(0xDDF2u16));
    }
}
