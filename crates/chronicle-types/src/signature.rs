use std::fmt;

use serde::{Deserialize, Serialize};

use chronicle_wire::{ByteReader, ByteWriter};

use crate::auditor::Auditor;
use crate::error::{TypeError, TypeResult};
use crate::timestamp::Timestamp;

/// Wire format version for serialized signatures.
const SIGNATURE_VERSION: i32 = 1;

/// Earliest encodable instant: one nanosecond after the Unix epoch.
/// The epoch itself is reserved for the zero timestamp on the wire.
const MIN_ENCODABLE_NANOS: i64 = 1;

/// Latest encodable instant: 2200-01-01T00:00:00Z. UnixNano runs out in
/// 2262; capping well before that keeps the boundary a round date.
const MAX_ENCODABLE_NANOS: i64 = 7_258_118_400_000_000_000;

/// Who made a change, and when.
///
/// A signature is zero iff both its auditor and its timestamp are zero.
/// Equality compares the auditor and the instant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    auditor: Auditor,
    timestamp: Timestamp,
}

impl Signature {
    /// Create a signature from an auditor and a timestamp.
    pub fn new(auditor: Auditor, timestamp: impl Into<Timestamp>) -> Self {
        Self {
            auditor,
            timestamp: timestamp.into(),
        }
    }

    /// The zero signature.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The signing auditor.
    pub fn auditor(&self) -> &Auditor {
        &self.auditor
    }

    /// The signing instant.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns `true` if both components are zero.
    pub fn is_zero(&self) -> bool {
        self.auditor.is_zero() && self.timestamp.is_zero()
    }

    /// Encode to a writer: version, encoded auditor, UnixNano timestamp
    /// (`0` for the zero timestamp).
    ///
    /// Fails if the timestamp is nonzero and outside
    /// `[1970-01-01T00:00:00.000000001Z, 2200-01-01T00:00:00Z]`.
    pub fn encode(&self, w: &mut ByteWriter) -> TypeResult<()> {
        w.write_i32(SIGNATURE_VERSION);
        w.write_str(&self.auditor.encode());

        let nanos = if self.timestamp.is_zero() {
            0
        } else {
            match self.timestamp.unix_nanos() {
                Some(n) if (MIN_ENCODABLE_NANOS..=MAX_ENCODABLE_NANOS).contains(&n) => n,
                _ => return Err(TypeError::TimestampOutOfBounds(self.timestamp)),
            }
        };
        w.write_i64(nanos);
        Ok(())
    }

    /// Decode from a reader. Fails on an unknown version or a negative
    /// UnixNano value; `0` decodes to the zero timestamp.
    pub fn decode(r: &mut ByteReader<'_>) -> TypeResult<Self> {
        let version = r.read_i32()?;
        if version != SIGNATURE_VERSION {
            return Err(TypeError::UnsupportedVersion(version));
        }

        let auditor = Auditor::decode(&r.read_str()?)?;

        let nanos = r.read_i64()?;
        if nanos < 0 {
            return Err(TypeError::InvalidUnixNanos(nanos));
        }
        let timestamp = Timestamp::from_unix_nanos(nanos);

        Ok(Self { auditor, timestamp })
    }

    /// Encode to a standalone byte buffer.
    pub fn to_bytes(&self) -> TypeResult<Vec<u8>> {
        let mut w = ByteWriter::new();
        self.encode(&mut w)?;
        Ok(w.into_bytes())
    }

    /// Decode from a standalone byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> TypeResult<Self> {
        let mut r = ByteReader::new(bytes);
        Self::decode(&mut r)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.auditor, self.timestamp)
    }
}
