//! Fixed-slot validation: check one explicit start time against every
//! constraint and report *all* violations, not just the first.
//!
//! The accumulate-everything policy is deliberate and differs from the ASAP
//! finder on purpose: a clerk proposing one concrete slot should learn every
//! defect in one pass instead of resubmitting per failure.

use chrono::NaiveDateTime;

use crate::availability::{fits_windows, Resource};
use crate::booking::Booking;
use crate::conflict::{surgeon_conflict, theatre_conflict};
use crate::decision::{Decision, RejectionReason};
use crate::interval::TimeInterval;

/// Validate the slot starting at `start` and running `duration_minutes`.
///
/// Checks, in order: surgeon availability, theatre availability, surgeon
/// booking conflict, theatre booking conflict. Each failure appends its
/// reason; approval requires zero reasons, and only an approved decision
/// carries the resolved interval.
pub fn validate_fixed_slot(
    start: NaiveDateTime,
    duration_minutes: u32,
    surgeon: &Resource,
    theatre: &Resource,
    bookings: &[Booking],
) -> Decision {
    let slot = TimeInterval::from_start(start, duration_minutes);
    let mut reasons = Vec::new();

    if !fits_windows(&slot, &surgeon.windows) {
        reasons.push(RejectionReason::SurgeonUnavailable);
    }
    if !fits_windows(&slot, &theatre.windows) {
        reasons.push(RejectionReason::TheatreUnavailable);
    }
    if surgeon_conflict(&slot, &surgeon.id, bookings) {
        reasons.push(RejectionReason::SurgeonBookingConflict);
    }
    if theatre_conflict(&slot, &theatre.id, bookings) {
        reasons.push(RejectionReason::TheatreBookingConflict);
    }

    if reasons.is_empty() {
        Decision::approved(surgeon.id.clone(), theatre.id.clone(), slot)
    } else {
        Decision::rejected(surgeon.id.clone(), theatre.id.clone(), reasons)
    }
}
