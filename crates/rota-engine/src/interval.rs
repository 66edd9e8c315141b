//! Half-open time intervals and the overlap primitive.
//!
//! Every interval comparison in the engine goes through [`TimeInterval::overlaps`].
//! Adjacent intervals (one ends exactly when the other starts) do NOT overlap.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::timefmt;

/// A concrete `[start, end)` interval in naive local time.
///
/// Invariant: `start < end`. The engine assumes well-formed intervals and
/// positive durations; validating raw input is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    #[serde(with = "timefmt::local_minutes")]
    pub start: NaiveDateTime,
    #[serde(with = "timefmt::local_minutes")]
    pub end: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// The interval covering `duration_minutes` from `start`.
    pub fn from_start(start: NaiveDateTime, duration_minutes: u32) -> Self {
        Self {
            start,
            end: start + Duration::minutes(i64::from(duration_minutes)),
        }
    }

    /// Half-open intersection test: true iff
    /// `self.start < other.end && other.start < self.end`.
    ///
    /// Symmetric, and false for adjacent intervals where one ends exactly
    /// when the other begins.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
