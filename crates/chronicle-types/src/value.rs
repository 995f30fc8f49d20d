use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker values that live inside the field value universe.
///
/// `Created` is the synthetic value of the single field in a history's
/// creation entry. `FieldRemoved` records that a field was absent from the
/// old state and must be deleted again when rolling back past the entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Magic {
    Created,
    FieldRemoved,
}

impl Magic {
    /// The payload byte used on the wire.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Created => 0,
            Self::FieldRemoved => 1,
        }
    }

    /// Decode the payload byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Created),
            1 => Some(Self::FieldRemoved),
            _ => None,
        }
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "<created>"),
            Self::FieldRemoved => write!(f, "<field removed>"),
        }
    }
}

/// The closed universe of auditable field values.
///
/// Twelve shapes: the magic markers, five scalars, five homogeneous
/// sequences, and raw bytes. Equality is structural — same variant and
/// equal payload, elementwise for sequences — via the derived `PartialEq`
/// (`f64` keeps IEEE `==`, so `NaN` never equals itself). There is no
/// extension point; the codec and the diff both dispatch exhaustively on
/// the variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Magic(Magic),
    Str(String),
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
    StrSeq(Vec<String>),
    BoolSeq(Vec<bool>),
    I32Seq(Vec<i32>),
    I64Seq(Vec<i64>),
    F64Seq(Vec<f64>),
    Bytes(Vec<u8>),
}

impl Value {
    /// The wire type tag for this value shape.
    pub fn type_tag(&self) -> u8 {
        match self {
            Self::Magic(_) => 0,
            Self::Str(_) => 1,
            Self::Bool(_) => 2,
            Self::I32(_) => 3,
            Self::I64(_) => 4,
            Self::F64(_) => 5,
            Self::StrSeq(_) => 6,
            Self::BoolSeq(_) => 7,
            Self::I32Seq(_) => 8,
            Self::I64Seq(_) => 9,
            Self::F64Seq(_) => 10,
            Self::Bytes(_) => 11,
        }
    }

    /// A stable human-readable name for the value shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Magic(_) => "magic",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::StrSeq(_) => "[string]",
            Self::BoolSeq(_) => "[bool]",
            Self::I32Seq(_) => "[i32]",
            Self::I64Seq(_) => "[i64]",
            Self::F64Seq(_) => "[f64]",
            Self::Bytes(_) => "[byte]",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Magic(m) => write!(f, "{m}"),
            Self::Str(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::StrSeq(v) => write!(f, "{v:?}"),
            Self::BoolSeq(v) => write!(f, "{v:?}"),
            Self::I32Seq(v) => write!(f, "{v:?}"),
            Self::I64Seq(v) => write!(f, "{v:?}"),
            Self::F64Seq(v) => write!(f, "{v:?}"),
            Self::Bytes(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<Magic> for Value {
    fn from(v: Magic) -> Self {
        Self::Magic(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::StrSeq(v)
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Self::BoolSeq(v)
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Self::I32Seq(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Self::I64Seq(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::F64Seq(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}
