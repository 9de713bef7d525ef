use std::fmt;
use std::str::FromStr;

use bytes::{BufMut, Bytes};

use crate::error::DecodeError;
use crate::helpers::encoded_len;
use crate::varint;

/// An unsigned 64-bit value carried in its protobuf varint form.
///
/// With the `serde` feature the value serializes as its encoded byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Varint(pub u64);

impl Varint {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn encoded_len(self) -> usize {
        encoded_len(self.0)
    }

    #[inline]
    pub fn to_vec(self) -> Vec<u8> {
        varint::encode(self.0)
    }

    pub fn to_bytes(self) -> Bytes {
        crate::to_bytes(self.0)
    }

    #[inline]
    pub fn encode_to_buf<B: BufMut>(self, buf: &mut B) {
        varint::encode_to_buf(self.0, buf)
    }
}

impl From<u64> for Varint {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Varint> for u64 {
    fn from(value: Varint) -> Self {
        value.0
    }
}

impl TryFrom<&[u8]> for Varint {
    type Error = DecodeError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        varint::decode(buf).map(Self)
    }
}

impl fmt::Display for Varint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Varint {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_bytes::ByteBuf;

    use super::Varint;
    use crate::varint;

    impl Serialize for Varint {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let (buf, len) = varint::encode_array(self.0);
            serializer.serialize_bytes(&buf[..len])
        }
    }

    impl<'de> Deserialize<'de> for Varint {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let buf = ByteBuf::deserialize(deserializer)?;
            varint::decode(&buf).map(Varint).map_err(D::Error::custom)
        }
    }
}
