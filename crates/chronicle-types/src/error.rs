use thiserror::Error;

use chronicle_wire::WireError;

use crate::timestamp::Timestamp;

/// Errors produced by type encoding and decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid encoded auditor: {0}")]
    InvalidAuditor(String),

    #[error("unsupported version number: {0}")]
    UnsupportedVersion(i32),

    #[error("signature timestamp {0} is out of bounds")]
    TimestampOutOfBounds(Timestamp),

    #[error("invalid unix nano value found: {0}")]
    InvalidUnixNanos(i64),

    #[error(transparent)]
    Wire(#[from] WireError),
}

pub type TypeResult<T> = Result<T, TypeError>;
