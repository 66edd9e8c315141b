//! Evenly spaced candidate start times across a search window.
//!
//! The sequence is lazy, finite, and restartable (the iterator is `Clone`).
//! Candidate *i* is computed as `window_start + i * step` — whole-step
//! multiplication from the origin, never accumulation — so no rounding drift
//! can creep in and the window-boundary candidate needs no tolerance.

use chrono::{Duration, NaiveDateTime};

/// Candidate starts from `window_start`, stepping by `step_minutes`, yielding
/// a candidate only while `candidate + step <= window_end`.
///
/// An inverted window (`window_end <= window_start`) produces the empty
/// sequence. Duration feasibility is not checked here — step size and
/// operation duration are independent, so the caller owns that check.
/// `step_minutes` must be positive.
pub fn candidate_starts(
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    step_minutes: u32,
) -> CandidateStarts {
    CandidateStarts {
        origin: window_start,
        window_end,
        step_minutes: i64::from(step_minutes),
        index: 0,
    }
}

/// Iterator over candidate start instants. See [`candidate_starts`].
#[derive(Debug, Clone)]
pub struct CandidateStarts {
    origin: NaiveDateTime,
    window_end: NaiveDateTime,
    step_minutes: i64,
    index: i64,
}

impl Iterator for CandidateStarts {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        let candidate = self.origin + Duration::minutes(self.index * self.step_minutes);
        if candidate + Duration::minutes(self.step_minutes) > self.window_end {
            return None;
        }
        self.index += 1;
        Some(candidate)
    }
}
