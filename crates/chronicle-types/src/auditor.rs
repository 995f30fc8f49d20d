use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Identity of the actor that signed an audit entry.
///
/// An auditor is a `(kind, id)` pair — e.g. `("user", "alice")` or
/// `("service", "billing")` — encoded as `kind/id`. Neither component may
/// contain a slash; that would make the encoded form ambiguous.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Auditor {
    kind: String,
    id: String,
}

impl Auditor {
    /// Create a new auditor.
    ///
    /// # Panics
    ///
    /// Panics if either component contains `/`. Components are caller
    /// constants in practice; a slash is API misuse, not a runtime input.
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        let kind = kind.into();
        let id = id.into();
        assert!(
            !kind.contains('/') && !id.contains('/'),
            "auditor kind and id must not contain '/'"
        );
        Self { kind, id }
    }

    /// The zero auditor (both components empty).
    pub fn zero() -> Self {
        Self::default()
    }

    /// The auditor kind, e.g. `"user"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The auditor id within its kind.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if both components are empty.
    pub fn is_zero(&self) -> bool {
        self.kind.is_empty() && self.id.is_empty()
    }

    /// The slash-delimited encoded form, `kind/id`.
    pub fn encode(&self) -> String {
        format!("{}/{}", self.kind, self.id)
    }

    /// Parse the slash-delimited form. Fails unless the input contains
    /// exactly one `/`.
    pub fn decode(src: &str) -> TypeResult<Self> {
        let mut parts = src.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(kind), Some(id), None) => Ok(Self {
                kind: kind.to_owned(),
                id: id.to_owned(),
            }),
            _ => Err(TypeError::InvalidAuditor(src.to_owned())),
        }
    }
}

impl fmt::Display for Auditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}
