use crate::error::DecodeError;
use crate::varint::{CHUNK_MASK, CONTINUATION_BIT, MAX_LAST_VARINT_BYTE, MAX_VARINT_LEN};

/// Decode `buf` as exactly one complete varint.
///
/// Every byte but the last must carry the continuation bit and the last must not.
/// Non-canonical encodings such as `[0x80, 0x00]` are accepted.
#[inline]
pub fn decode(buf: &[u8]) -> Result<u64, DecodeError> {
    let result = decode_exact(buf);
    if let Err(err) = &result {
        tracing::trace!(len = buf.len(), error = %err, "Rejecting varint input");
    }
    result
}

#[inline(always)]
fn decode_exact(buf: &[u8]) -> Result<u64, DecodeError> {
    let Some((&last, body)) = buf.split_last() else {
        return Err(DecodeError::Empty);
    };

    if buf.len() > MAX_VARINT_LEN {
        return Err(DecodeError::TooLong { len: buf.len() });
    }

    if let Some(position) = body.iter().position(|&byte| byte & CONTINUATION_BIT == 0) {
        return Err(DecodeError::TrailingBytes { position });
    }

    if last & CONTINUATION_BIT != 0 {
        return Err(DecodeError::Truncated { len: buf.len() });
    }

    if buf.len() == MAX_VARINT_LEN && last > MAX_LAST_VARINT_BYTE {
        return Err(DecodeError::ValueOverflow);
    }

    let mut result = 0u64;
    for (i, &byte) in buf.iter().enumerate() {
        result |= ((byte & CHUNK_MASK) as u64) << (7 * i);
    }
    Ok(result)
}
