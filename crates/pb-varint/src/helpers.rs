/// Encoded length indexed by leading-zero count: `ceil((64 - lz) / 7)`, with 64 zeros giving 1.
const VARINT_LENGTHS_64: [u8; 65] = {
    let mut arr = [0u8; 65];
    let mut i = 0;
    while i < 64 {
        arr[i] = ((64 - i + 6) / 7) as u8;
        i += 1;
    }
    arr[64] = 1;
    arr
};

/// Number of bytes `encode(value)` produces, without encoding.
#[inline(always)]
pub const fn encoded_len(value: u64) -> usize {
    VARINT_LENGTHS_64[value.leading_zeros() as usize] as usize
}
