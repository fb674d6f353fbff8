//! Timestamp newtypes used to order messages.
//!
//! A [`Timestamp`] wraps an unsigned integer, so a negative send time cannot
//! be represented once a value has been accepted. Signed input is checked at
//! the boundary through [`TryFrom<i64>`].

use crate::message::error::MessageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The moment a message was sent.
///
/// Timestamps are opaque, non-negative integers. Only their relative order
/// carries meaning; no unit or epoch is implied.
///
/// # Examples
///
/// ```
/// use message_log::message::domain::Timestamp;
///
/// let ts = Timestamp::new(1001);
/// assert_eq!(ts.value(), 1001);
/// assert!(Timestamp::try_from(-1_i64).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The earliest representable timestamp.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from a value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying timestamp value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = MessageError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| MessageError::NegativeTimestamp(value))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive span of timestamps.
///
/// Bounds may be supplied in either order; the range always spans from the
/// smaller to the larger.
///
/// # Examples
///
/// ```
/// use message_log::message::domain::{Timestamp, TimestampRange};
///
/// let range = TimestampRange::new(Timestamp::new(9), Timestamp::new(3));
/// assert_eq!(range.start(), Timestamp::new(3));
/// assert!(range.contains(Timestamp::new(9)));
/// assert!(!range.contains(Timestamp::new(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct TimestampRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimestampRange {
    /// Creates a range covering both bounds, whichever order they arrive in.
    #[must_use]
    pub fn new(first: Timestamp, second: Timestamp) -> Self {
        Self {
            start: first.min(second),
            end: first.max(second),
        }
    }

    /// Returns the lower, inclusive bound.
    #[must_use]
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the upper, inclusive bound.
    #[must_use]
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns `true` if `timestamp` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// Wire form of a range; bounds are normalised on the way in.
#[derive(Deserialize)]
struct RawRange {
    start: Timestamp,
    end: Timestamp,
}

impl From<RawRange> for TimestampRange {
    fn from(raw: RawRange) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for TimestampRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
