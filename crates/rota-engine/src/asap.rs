//! Earliest-feasible-slot search ("ASAP") over a stepped candidate sequence.
//!
//! Candidates are evaluated in increasing time order and the search returns
//! on the first one passing every check — that early exit is the defining
//! ASAP guarantee. Per-candidate failures are skipped silently: with hundreds
//! of candidates, surfacing why each one failed would bury the caller, so an
//! exhausted search reports the single aggregate reason instead. (The fixed
//! validator makes the opposite choice; keep the two apart.)

use chrono::NaiveDateTime;

use crate::availability::{fits_windows, Resource};
use crate::booking::Booking;
use crate::candidates::candidate_starts;
use crate::conflict::has_conflict;
use crate::decision::{Decision, RejectionReason};
use crate::interval::TimeInterval;

/// Find the earliest slot of `duration_minutes` in
/// `[window_start, window_end]`, trying starts every `step_minutes`.
///
/// An inverted window rejects immediately with the invalid-window reason.
/// A candidate is skipped — not rejected — when its end would pass
/// `window_end`, when either resource's windows do not contain it, or when it
/// collides with an existing booking. Exhausting the sequence rejects with
/// the no-slot-found reason.
pub fn find_slot_asap(
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    step_minutes: u32,
    duration_minutes: u32,
    surgeon: &Resource,
    theatre: &Resource,
    bookings: &[Booking],
) -> Decision {
    if window_end <= window_start {
        return Decision::rejected(
            surgeon.id.clone(),
            theatre.id.clone(),
            vec![RejectionReason::InvalidSearchWindow],
        );
    }

    for start in candidate_starts(window_start, window_end, step_minutes) {
        let slot = TimeInterval::from_start(start, duration_minutes);

        if slot.end > window_end {
            continue;
        }
        if !fits_windows(&slot, &surgeon.windows) {
            continue;
        }
        if !fits_windows(&slot, &theatre.windows) {
            continue;
        }
        if has_conflict(&slot, &surgeon.id, &theatre.id, bookings) {
            continue;
        }

        return Decision::approved(surgeon.id.clone(), theatre.id.clone(), slot);
    }

    Decision::rejected(
        surgeon.id.clone(),
        theatre.id.clone(),
        vec![RejectionReason::NoSlotInWindow],
    )
}
