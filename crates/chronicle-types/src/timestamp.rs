use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant that may be the distinguished zero value.
///
/// Histories and signatures need a "no timestamp" state (the zero
/// signature, objects that were never rolled back), so this wraps
/// `DateTime<Utc>` with an explicit zero. The zero value orders before
/// every real instant.
///
/// Timestamps are UTC by construction; there is no way to smuggle a
/// non-zero zone offset into a signature or a history entry.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The zero timestamp.
    pub const fn zero() -> Self {
        Self(None)
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        Self(Some(Utc::now()))
    }

    /// Wrap a concrete instant.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(Some(dt))
    }

    /// Returns `true` for the zero timestamp.
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// The wrapped instant, or `None` for the zero timestamp.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Nanoseconds since the Unix epoch. `None` for the zero timestamp or
    /// for instants outside the `i64` nanosecond range.
    pub fn unix_nanos(&self) -> Option<i64> {
        self.0.and_then(|dt| dt.timestamp_nanos_opt())
    }

    /// Reconstruct from nanoseconds since the Unix epoch; `0` yields the
    /// zero timestamp.
    pub fn from_unix_nanos(nanos: i64) -> Self {
        if nanos == 0 {
            Self::zero()
        } else {
            Self(Some(DateTime::from_timestamp_nanos(nanos)))
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({self})")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "<zero>"),
            Some(dt) => {
                // Render subsecond digits only when they carry information.
                let format = if dt.timestamp_subsec_nanos() == 0 {
                    SecondsFormat::Secs
                } else {
                    SecondsFormat::AutoSi
                };
                write!(f, "{}", dt.to_rfc3339_opts(format, true))
            }
        }
    }
}
