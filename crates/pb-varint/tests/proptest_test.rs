use pb_varint::{decode, encode, encoded_len};
use proptest::prelude::*;

fn bit_length(value: u64) -> usize {
    (64 - value.leading_zeros()) as usize
}

proptest! {
    #[test]
    fn prop_roundtrip(value: u64) {
        prop_assert_eq!(decode(&encode(value)).unwrap(), value);
    }

    #[test]
    fn prop_canonical_length(value: u64) {
        let expected = std::cmp::max(1, (bit_length(value) + 6) / 7);
        prop_assert_eq!(encode(value).len(), expected);
        prop_assert_eq!(encoded_len(value), expected);
    }

    #[test]
    fn prop_continuation_bits(value: u64) {
        let buf = encode(value);
        let (last, body) = buf.split_last().unwrap();
        prop_assert!(body.iter().all(|&b| b & 0x80 != 0));
        prop_assert_eq!(last & 0x80, 0);
    }

    #[test]
    fn prop_chunks_reconstruct_value(value: u64) {
        let rebuilt = encode(value)
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | (((b & 0x7F) as u64) << (7 * i)));
        prop_assert_eq!(rebuilt, value);
    }

    #[test]
    fn prop_decode_arbitrary_bytes_never_panics(data in prop::collection::vec(any::<u8>(), 0..16)) {
        if let Ok(value) = decode(&data) {
            // Accepted inputs are well-formed, possibly non-canonical
            prop_assert!(encode(value).len() <= data.len());
        }
    }
}
