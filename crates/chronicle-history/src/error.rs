use thiserror::Error;

use chronicle_types::{Timestamp, TypeError};
use chronicle_wire::WireError;

/// Opaque error produced by an [`AuditableObject`] implementation.
///
/// The engine never inspects these; they propagate to the caller verbatim.
///
/// [`AuditableObject`]: crate::object::AuditableObject
pub type ObjectError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the audit history engine and its codec.
///
/// Several messages are matched textually by callers and are part of the
/// public contract; change them only with a wire-format-level version bump.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("oldObj cannot be nil when there is an audit history. Only allowed on initial audit")]
    MissingOldObject,

    #[error("invalid signature timestamp: must be after latest audit timestamp (signature: {signature}, latest audit: {latest})")]
    NonMonotonicTimestamp {
        signature: Timestamp,
        latest: Timestamp,
    },

    #[error("cannot audit based on a rolled back object")]
    RolledBackInput,

    #[error("invalid state: empty history")]
    EmptyHistory,

    /// The rollback target precedes the creation entry. Distinguished:
    /// callers match on this variant.
    #[error("the object did not exist at the given time")]
    DidNotExist,

    #[error("object is already rolled back to a timestamp earlier than t (tRollback: {rolled_back}, t: {target})")]
    RollbackNotMonotonic {
        rolled_back: Timestamp,
        target: Timestamp,
    },

    #[error("invalid version number: {0}")]
    InvalidVersion(u8),

    #[error("invalid value type: {0}")]
    InvalidValueType(u8),

    #[error("invalid magic value: {0}")]
    InvalidMagicValue(u8),

    #[error("field name index {index} out of range ({count} names)")]
    NameIndexOutOfRange { index: usize, count: usize },

    /// A `get_fields` failure while preparing a rollback.
    #[error("error rolling back object: {0}")]
    RollbackObject(ObjectError),

    /// An [`AuditableObject`] failure, surfaced verbatim.
    ///
    /// [`AuditableObject`]: crate::object::AuditableObject
    #[error("{0}")]
    Object(#[from] ObjectError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Wire(#[from] WireError),
}

pub type HistoryResult<T> = Result<T, HistoryError>;
