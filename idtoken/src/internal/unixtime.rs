use serde::{Deserialize, Serialize};
use std::fmt::Display;
use time::OffsetDateTime;

//--------------------------------------------------------------------------------------------------
// Durations in whole seconds
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Seconds(u32);

pub const DEFAULT_CLOCK_SKEW_ALLOWANCE: Seconds = Seconds(5);

impl Seconds {
    pub const fn new(seconds: u32) -> Self {
        Seconds(seconds)
    }
}

impl Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--------------------------------------------------------------------------------------------------
// Unix Timestamp handling
//--------------------------------------------------------------------------------------------------

// Kept as raw seconds rather than an OffsetDateTime so the sentinels below stay representable

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// Stand-in for a missing `iat`: always later than any clock reading plus allowance.
    pub const FAR_FUTURE: UnixTimestamp = UnixTimestamp(i64::MAX);

    /// Stand-in for a missing `exp`: always in the past.
    pub const EPOCH: UnixTimestamp = UnixTimestamp(0);

    pub fn now() -> Self {
        UnixTimestamp(OffsetDateTime::now_utc().unix_timestamp())
    }

    pub const fn from_secs(secs: i64) -> Self {
        UnixTimestamp(secs)
    }

    pub fn as_secs(self) -> i64 {
        self.0
    }

    pub fn saturating_add(self, seconds: Seconds) -> Self {
        UnixTimestamp(self.0.saturating_add(i64::from(seconds.0)))
    }
}

impl From<UnixTimestamp> for i64 {
    fn from(ts: UnixTimestamp) -> Self {
        ts.0
    }
}

impl Display for UnixTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--------------------------------------------------------------------------------------------------
