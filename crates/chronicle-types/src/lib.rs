//! Foundation types for the chronicle audit engine.
//!
//! This crate provides the identity, temporal, and value types shared by the
//! rest of the workspace: who made a change ([`Auditor`], [`Signature`]),
//! when ([`Timestamp`]), and what the change touched ([`Field`],
//! [`FieldSlice`], the closed [`Value`] universe).
//!
//! # Key Types
//!
//! - [`Auditor`] — `(kind, id)` identity with slash-delimited encoding
//! - [`Timestamp`] — UTC instant with a distinguished zero value
//! - [`Signature`] — auditor plus timestamp, with a versioned binary codec
//! - [`Value`] / [`Magic`] — the closed, tagged field value universe
//! - [`Field`] / [`FieldSlice`] — named values in an ordered association list

pub mod auditor;
pub mod error;
pub mod field;
pub mod signature;
pub mod timestamp;
pub mod value;

pub use auditor::Auditor;
pub use error::{TypeError, TypeResult};
pub use field::{Field, FieldSlice};
pub use signature::Signature;
pub use timestamp::Timestamp;
pub use value::{Magic, Value};
