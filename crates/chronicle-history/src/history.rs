use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use chronicle_types::{FieldSlice, Signature};

use crate::codec;
use crate::diff::reverse_delta;
use crate::error::{HistoryError, HistoryResult};
use crate::object::{AuditableObject, ObjectState};

/// One record of an audit history: who signed it, and the reverse delta
/// needed to undo it.
///
/// The first entry of any non-empty history is the *creation entry*,
/// carrying the single synthetic creation-marker field. Every later entry
/// is an update whose fields undo that update relative to the state that
/// preceded it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    signature: Signature,
    fields: FieldSlice,
}

impl HistoryEntry {
    pub(crate) fn new(signature: Signature, fields: FieldSlice) -> Self {
        Self { signature, fields }
    }

    /// The signature covering this entry.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The reverse delta recorded by this entry.
    pub fn fields(&self) -> &FieldSlice {
        &self.fields
    }
}

/// The audit history of one domain object.
///
/// An ordered, append-only list of [`HistoryEntry`] values with strictly
/// increasing timestamps. Grown only by [`audit`](Self::audit), never
/// shrunk, and persisted wholesale via [`to_bytes`](Self::to_bytes) /
/// [`from_bytes`](Self::from_bytes). Not thread safe; one owner mutates at
/// a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditHistory {
    entries: Vec<HistoryEntry>,
}

impl AuditHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    #[cfg(test)]
    pub(crate) fn push_entry(&mut self, signature: Signature, fields: FieldSlice) {
        self.entries.push(HistoryEntry::new(signature, fields));
    }

    /// Returns `true` for the zero history: no entries recorded.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries, the creation entry included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded entries, ascending by timestamp.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The signature of the creation entry, or the zero signature for an
    /// empty history.
    pub fn creation_signature(&self) -> Signature {
        match self.entries.first() {
            Some(entry) => entry.signature.clone(),
            None => Signature::zero(),
        }
    }

    /// The signature of the most recent entry, or the zero signature for
    /// an empty history.
    pub fn latest_signature(&self) -> Signature {
        match self.entries.last() {
            Some(entry) => entry.signature.clone(),
            None => Signature::zero(),
        }
    }

    /// The signatures of all entries, ascending by timestamp.
    pub fn signatures(&self) -> Vec<Signature> {
        self.entries
            .iter()
            .map(|entry| entry.signature.clone())
            .collect()
    }

    /// The signature of the last update that changed the named field, or
    /// the creation signature if no update mentions it.
    pub fn latest_signature_for_field(&self, name: &str) -> Signature {
        for entry in self.entries.iter().skip(1).rev() {
            if entry.fields.contains(name) {
                return entry.signature.clone();
            }
        }
        self.creation_signature()
    }

    /// The creation signature followed by the signatures of all updates
    /// that mention the named field, ascending by timestamp.
    pub fn signatures_for_field(&self, name: &str) -> Vec<Signature> {
        let mut signatures = vec![self.creation_signature()];
        for entry in self.entries.iter().skip(1) {
            if entry.fields.contains(name) {
                signatures.push(entry.signature.clone());
            }
        }
        signatures
    }

    /// Record the change from `old` to `new` under the given signature.
    ///
    /// `old` may be omitted only for the very first audit, which records
    /// the creation entry. The signature's timestamp must be strictly
    /// after the latest entry's, and neither object may be in a
    /// rolled-back state. Returns `Ok(false)` — leaving the history
    /// untouched — when the two states are identical.
    pub fn audit(
        &mut self,
        old: Option<&dyn AuditableObject>,
        new: &dyn AuditableObject,
        signature: Signature,
    ) -> HistoryResult<bool> {
        if let Some(latest) = self.entries.last() {
            if old.is_none() {
                return Err(HistoryError::MissingOldObject);
            }
            let latest_ts = latest.signature.timestamp();
            if signature.timestamp() <= latest_ts {
                return Err(HistoryError::NonMonotonicTimestamp {
                    signature: signature.timestamp(),
                    latest: latest_ts,
                });
            }
        }

        let old_fields = match old {
            None => None,
            Some(obj) => match obj.get_fields()? {
                ObjectState::Live(fields) => Some(fields),
                ObjectState::RolledBack { .. } => return Err(HistoryError::RolledBackInput),
            },
        };
        let new_fields = match new.get_fields()? {
            ObjectState::Live(fields) => fields,
            ObjectState::RolledBack { .. } => return Err(HistoryError::RolledBackInput),
        };

        let delta = reverse_delta(old_fields.as_ref(), &new_fields);
        if delta.is_empty() {
            return Ok(false);
        }

        debug!(%signature, fields = delta.len(), "recording audit entry");
        self.entries.push(HistoryEntry::new(signature, delta));
        Ok(true)
    }

    /// Encode the history with the versioned binary codec.
    pub fn to_bytes(&self) -> HistoryResult<Vec<u8>> {
        codec::encode(self)
    }

    /// Decode a history produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> HistoryResult<Self> {
        codec::decode(bytes)
    }
}

impl fmt::Display for AuditHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for entry in &self.entries {
            writeln!(f, "\t{}", entry.signature)?;
            for field in &entry.fields {
                writeln!(f, "\t\t{field}")?;
            }
        }
        write!(f, "}}")
    }
}
