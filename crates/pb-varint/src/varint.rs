pub mod encode;
pub mod decode;

/// Longest encoding of a `u64`: 64 bits in 7-bit chunks rounds up to 10.
pub const MAX_VARINT_LEN: usize = 10;

/// Largest chunk the 10th byte may carry (the single remaining bit).
pub const MAX_LAST_VARINT_BYTE: u8 = 0b0000_0001;

pub const CONTINUATION_BIT: u8 = 0x80;
pub const CHUNK_MASK: u8 = 0x7F;

pub use encode::{encode, encode_array, encode_to_buf, encode_to_slice, try_encode};
pub use decode::decode;
