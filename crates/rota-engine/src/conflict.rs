//! Double-booking scans over the existing booking snapshot.
//!
//! All scans are existence checks over an unordered list: short-circuit on the
//! first overlapping booking, with scan order irrelevant to the result.

use crate::booking::Booking;
use crate::interval::TimeInterval;

/// Does the surgeon already have a booking overlapping `slot`?
pub fn surgeon_conflict(slot: &TimeInterval, surgeon_id: &str, bookings: &[Booking]) -> bool {
    bookings
        .iter()
        .any(|b| b.surgeon_id == surgeon_id && slot.overlaps(&b.slot))
}

/// Does the theatre already have a booking overlapping `slot`?
pub fn theatre_conflict(slot: &TimeInterval, theatre_id: &str, bookings: &[Booking]) -> bool {
    bookings
        .iter()
        .any(|b| b.theatre_id == theatre_id && slot.overlaps(&b.slot))
}

/// Single-pass combined scan: true when any booking sharing the surgeon *or*
/// the theatre overlaps `slot`. The two triggers are independent; either one
/// fires the same boolean.
pub fn has_conflict(
    slot: &TimeInterval,
    surgeon_id: &str,
    theatre_id: &str,
    bookings: &[Booking],
) -> bool {
    bookings
        .iter()
        .any(|b| (b.surgeon_id == surgeon_id || b.theatre_id == theatre_id) && slot.overlaps(&b.slot))
}
