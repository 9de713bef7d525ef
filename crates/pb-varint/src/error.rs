use thiserror::Error;

/// Broad category of a codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was out of range or malformed.
    InvalidInput,
    /// The input encodes more than 64 bits.
    Overflow,
}

#[derive(Debug, Error)]
pub enum EncodeError {

    #[error("Invalid input: {0} is not in 0..=18446744073709551615")]
    InvalidInput(String),

    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

impl EncodeError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {

    #[error("Empty input")]
    Empty,

    /// Last byte still has its continuation bit set.
    #[error("Truncated varint: last of {len} bytes has continuation bit set")]
    Truncated { len: usize },

    /// A terminating byte was found before the end of the input.
    #[error("Trailing bytes after varint terminator at position {position}")]
    TrailingBytes { position: usize },

    #[error("Varint too long: {len} bytes, at most 10 allowed")]
    TooLong { len: usize },

    #[error("Varint value exceeds 64 bits")]
    ValueOverflow,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Empty | DecodeError::Truncated { .. } | DecodeError::TrailingBytes { .. } => {
                ErrorKind::InvalidInput
            }
            DecodeError::TooLong { .. } | DecodeError::ValueOverflow => ErrorKind::Overflow,
        }
    }
}

/// General varint error type.
#[derive(Debug, Error)]
pub enum VarintError {
    /// Encoding error
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Decoding error
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl VarintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VarintError::Encode(e) => e.kind(),
            VarintError::Decode(e) => e.kind(),
        }
    }
}
