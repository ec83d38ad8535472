/// True when the decoded output is byte-for-byte the original input.
pub fn verify_round_trip(original: &[u8], restored: &[u8]) -> bool {
    original == restored
}

/// Original bits (one byte per symbol) divided by the bits in the packed payload, i.e. the
/// packed stream without its header byte. None when there is no payload to divide by.
pub fn compression_ratio(symbol_count: usize, packed_stream: &[u8]) -> Option<f64> {
    let payload_bits = packed_stream.len().saturating_sub(1) * 8;
    if payload_bits == 0 {
        return None;
    }
    Some((symbol_count * 8) as f64 / payload_bits as f64)
}

#[cfg(test)]
mod test {
    use super::{compression_ratio, verify_round_trip};

    #[test]
    fn verify_test() {
        assert!(verify_round_trip(b"abc", b"abc"));
        assert!(!verify_round_trip(b"abc", b"abd"));
        assert!(!verify_round_trip(b"abc", b"ab"));
        assert!(verify_round_trip(b"", b""));
    }

    #[test]
    fn ratio_test() {
        // 15 symbols packed into 4 payload bytes
        let ratio = compression_ratio(15, &[7, 0xff, 0x55, 0x24, 0x00]).unwrap();
        assert!((ratio - 120.0 / 32.0).abs() < 1e-9);
        assert_eq!(compression_ratio(0, &[0]), None);
        assert_eq!(compression_ratio(0, &[]), None);
    }
}
