//! Field-level audit-and-rollback engine.
//!
//! An [`AuditHistory`] records, per domain object, a chronologically
//! ordered list of reverse deltas: each entry stores exactly what is needed
//! to *undo* one change. Auditing diffs an (old, new) pair of object states
//! into such an entry; rolling back replays entries newest-first down to a
//! target instant and hands the reconstructed fields back to the object.
//! Histories persist through a compact versioned binary codec with
//! string-interned field names.
//!
//! Objects participate through the [`AuditableObject`] contract, exposing
//! and restoring their fields as an [`ObjectState`] — either live or rolled
//! back to some instant. The aggregate is single-owner: it is not thread
//! safe, and callers serialize access.
//!
//! # Key Types
//!
//! - [`AuditHistory`] — the append-only aggregate: audit, rollback, queries
//! - [`HistoryEntry`] — one signature plus one reverse delta
//! - [`AuditableObject`] / [`ObjectState`] — the caller-side contract
//! - [`HistoryError`] — engine and codec failures, including the
//!   distinguished [`HistoryError::DidNotExist`]

mod codec;
pub mod diff;
pub mod error;
pub mod history;
pub mod object;
mod rollback;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{HistoryError, HistoryResult, ObjectError};
pub use history::{AuditHistory, HistoryEntry};
pub use object::{AuditableObject, ObjectState};
