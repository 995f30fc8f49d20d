use serde::{Deserialize, Serialize};

use chronicle_types::{FieldSlice, Timestamp};

use crate::error::ObjectError;

/// The fields of an auditable object, tagged with whether they reflect the
/// live present or a reconstructed past.
///
/// A rolled-back object is read-only as far as auditing is concerned: it
/// describes what the object looked like at `at`, and feeding it back into
/// [`AuditHistory::audit`] is an error. Rolling back again is allowed, but
/// only further into the past.
///
/// [`AuditHistory::audit`]: crate::history::AuditHistory::audit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ObjectState {
    /// The object's current fields.
    Live(FieldSlice),
    /// Fields reconstructed as of the instant `at`.
    RolledBack { fields: FieldSlice, at: Timestamp },
}

impl ObjectState {
    /// The fields, regardless of liveness.
    pub fn fields(&self) -> &FieldSlice {
        match self {
            Self::Live(fields) => fields,
            Self::RolledBack { fields, .. } => fields,
        }
    }

    /// Returns `true` for a reconstructed past state.
    pub fn is_rolled_back(&self) -> bool {
        matches!(self, Self::RolledBack { .. })
    }

    /// The rollback instant, if this is a reconstructed state.
    pub fn rolled_back_at(&self) -> Option<Timestamp> {
        match self {
            Self::Live(_) => None,
            Self::RolledBack { at, .. } => Some(*at),
        }
    }
}

/// The contract a domain object implements to be audited and rolled back.
///
/// The engine calls [`get_fields`] to observe state and [`set_fields`] to
/// restore a reconstructed one; both may fail, and failures surface to the
/// engine caller verbatim. Implementations decide how their concrete shape
/// maps onto a [`FieldSlice`] — typed structs enumerate their fields,
/// map-backed objects pass entries through.
///
/// [`get_fields`]: AuditableObject::get_fields
/// [`set_fields`]: AuditableObject::set_fields
pub trait AuditableObject {
    /// The object's fields and rollback status.
    fn get_fields(&self) -> Result<ObjectState, ObjectError>;

    /// Replace the object's fields and rollback status.
    fn set_fields(&mut self, state: ObjectState) -> Result<(), ObjectError>;
}
