//! Protocol Buffers varint codec for `u64` values.
//!
//! Each encoded byte carries 7 payload bits, least-significant chunk first,
//! with bit 7 set on every byte except the last.
//!
//! ```
//! let buf = pb_varint::encode(150);
//! assert_eq!(buf, [0x96, 0x01]);
//! assert_eq!(pb_varint::decode(&buf).unwrap(), 150);
//! ```

pub mod error;
pub mod helpers;
pub mod types;
pub mod varint;

pub use error::{DecodeError, EncodeError, ErrorKind, VarintError};
pub use helpers::encoded_len;
pub use types::Varint;
pub use varint::{
    decode, encode, encode_array, encode_to_buf, encode_to_slice, try_encode, MAX_VARINT_LEN,
};

use bytes::{Bytes, BytesMut};

pub fn to_bytes(value: u64) -> Bytes {
    let mut buf = BytesMut::with_capacity(encoded_len(value));
    encode_to_buf(value, &mut buf);
    buf.freeze()
}
