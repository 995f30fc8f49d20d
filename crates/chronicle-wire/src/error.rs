use thiserror::Error;

/// Errors produced while decoding wire data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("unexpected end of input: need {needed} more bytes, have {remaining}")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("truncated varint")]
    TruncatedVarint,

    #[error("varint overflow")]
    VarintOverflow,

    #[error("invalid boolean byte: {0}")]
    InvalidBool(u8),

    #[error("invalid utf-8 in string: {0}")]
    InvalidUtf8(String),

    #[error("declared length {declared} exceeds remaining input ({remaining} bytes)")]
    LengthOutOfRange { declared: usize, remaining: usize },
}

pub type WireResult<T> = Result<T, WireError>;
