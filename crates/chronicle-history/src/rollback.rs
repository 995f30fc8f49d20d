//! Reverse replay: reconstruct an object's past state by undoing history
//! entries newest-first down to a target instant.

use tracing::debug;

use chronicle_types::{Magic, Timestamp, Value};

use crate::error::{HistoryError, HistoryResult};
use crate::history::AuditHistory;
use crate::object::{AuditableObject, ObjectState};

impl AuditHistory {
    /// Roll the object back to its state at the instant `t`.
    ///
    /// `t` must not precede the creation entry
    /// ([`HistoryError::DidNotExist`]), and rollback is monotonic toward
    /// the past: an object already rolled back to some instant can only be
    /// rolled back further, never forward. An entry whose timestamp equals
    /// `t` keeps its effects — rolling back exactly to an update yields
    /// the post-update state.
    ///
    /// On success the object receives the reconstructed fields as
    /// [`ObjectState::RolledBack`] at `t`.
    pub fn rollback_to(
        &self,
        obj: &mut dyn AuditableObject,
        t: impl Into<Timestamp>,
    ) -> HistoryResult<()> {
        let t = t.into();

        let Some(creation) = self.entries().first() else {
            return Err(HistoryError::EmptyHistory);
        };
        if t < creation.signature().timestamp() {
            return Err(HistoryError::DidNotExist);
        }

        let state = obj.get_fields().map_err(HistoryError::RollbackObject)?;
        let (mut fields, rolled_back_at) = match state {
            ObjectState::Live(fields) => (fields, None),
            ObjectState::RolledBack { fields, at } => {
                if at < t {
                    return Err(HistoryError::RollbackNotMonotonic {
                        rolled_back: at,
                        target: t,
                    });
                }
                (fields, Some(at))
            }
        };

        // Undo entries newer than t, newest first. The creation entry is a
        // sentinel anchoring the existence floor and is never replayed.
        let mut undone = 0usize;
        for entry in self.entries()[1..].iter().rev() {
            let ts = entry.signature().timestamp();
            if let Some(at) = rolled_back_at {
                // Entries after the current rollback point are not
                // reflected in the object's fields; nothing to undo.
                if ts > at {
                    continue;
                }
            }
            if ts <= t {
                continue;
            }
            for field in entry.fields() {
                match &field.value {
                    Value::Magic(Magic::FieldRemoved) => fields.remove(&field.name),
                    value => fields.set(&field.name, value.clone()),
                }
            }
            undone += 1;
        }

        debug!(%t, undone, "rolled back object");
        obj.set_fields(ObjectState::RolledBack { fields, at: t })
            .map_err(HistoryError::Object)
    }
}
