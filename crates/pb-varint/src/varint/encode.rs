use std::fmt::Display;

use bytes::BufMut;

use crate::error::EncodeError;
use crate::helpers::encoded_len;
use crate::varint::{CHUNK_MASK, CONTINUATION_BIT, MAX_VARINT_LEN};

/// Writes the chunks of `value` into `buf`, least-significant first.
///
/// The body runs at least once, so zero produces the single byte `0x00`.
/// `buf` must hold at least `encoded_len(value)` bytes.
#[inline(always)]
fn write_chunks(mut value: u64, buf: &mut [u8]) -> usize {
    let mut len = 0;
    loop {
        let mut chunk = (value as u8) & CHUNK_MASK;
        value >>= 7;
        if value != 0 {
            chunk |= CONTINUATION_BIT;
        }
        buf[len] = chunk;
        len += 1;
        if value == 0 {
            return len;
        }
    }
}

/// Encode `value` into a stack buffer, returning the buffer and the number of bytes used.
#[inline(always)]
pub fn encode_array(value: u64) -> ([u8; MAX_VARINT_LEN], usize) {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let len = write_chunks(value, &mut buf);
    (buf, len)
}

/// Encode `value` as a canonical protobuf varint of 1 to 10 bytes.
#[inline]
pub fn encode(value: u64) -> Vec<u8> {
    let (buf, len) = encode_array(value);
    buf[..len].to_vec()
}

/// Encode into `slice`, returning the number of bytes written.
///
/// Nothing is written when `slice` is too short.
#[inline]
pub fn encode_to_slice(value: u64, slice: &mut [u8]) -> Result<usize, EncodeError> {
    let needed = encoded_len(value);
    if slice.len() < needed {
        return Err(EncodeError::BufferTooSmall {
            needed,
            available: slice.len(),
        });
    }
    Ok(write_chunks(value, slice))
}

/// Append the encoding of `value` to `buf`.
///
/// Panics like [`BufMut::put_slice`] if a fixed-capacity `buf` has no room left.
#[inline]
pub fn encode_to_buf<B: BufMut>(value: u64, buf: &mut B) {
    let (bytes, len) = encode_array(value);
    buf.put_slice(&bytes[..len]);
}

/// Encode any integer that fits in a `u64`.
///
/// Negative values and values above `u64::MAX` fail with [`EncodeError::InvalidInput`].
pub fn try_encode<T>(value: T) -> Result<Vec<u8>, EncodeError>
where
    T: TryInto<u64> + Display + Copy,
{
    match value.try_into() {
        Ok(value) => Ok(encode(value)),
        Err(_) => {
            tracing::trace!(value = %value, "Rejecting out-of-range varint input");
            Err(EncodeError::InvalidInput(value.to_string()))
        }
    }
}
