//! Compatibility screening: the injected qualification/equipment/specialty
//! rules, and the entry points that run them before the time checks.
//!
//! The engine does not decide whether a surgeon can perform an operation or a
//! theatre can host it — that knowledge lives with a collaborator and reaches
//! the engine through [`CompatibilityRules`]. Keeping the capability behind a
//! trait keeps the deterministic scheduling logic testable without any record
//! store or fact base attached.

use chrono::NaiveDateTime;

use crate::asap::find_slot_asap;
use crate::availability::Resource;
use crate::booking::Booking;
use crate::decision::{Decision, Outcome, RejectionReason};
use crate::validate::validate_fixed_slot;

/// Read-only compatibility facts for a (surgeon, theatre, operation) triple.
///
/// Returns the ordered rejection reasons the triple earns on its own, before
/// any time checks — empty means compatible. The verdict must not depend on
/// the slot under consideration.
pub trait CompatibilityRules {
    fn screen(&self, surgeon_id: &str, theatre_id: &str, operation_id: &str)
        -> Vec<RejectionReason>;
}

/// Screened fixed-slot decision: compatibility reasons first, then every
/// time-check reason, in one accumulated list.
pub fn decide_fixed(
    rules: &dyn CompatibilityRules,
    operation_id: &str,
    start: NaiveDateTime,
    duration_minutes: u32,
    surgeon: &Resource,
    theatre: &Resource,
    bookings: &[Booking],
) -> Decision {
    let mut reasons = rules.screen(&surgeon.id, &theatre.id, operation_id);
    let timed = validate_fixed_slot(start, duration_minutes, surgeon, theatre, bookings);

    match timed.outcome {
        Outcome::Approved { slot } if reasons.is_empty() => {
            Decision::approved(surgeon.id.clone(), theatre.id.clone(), slot)
        }
        Outcome::Approved { .. } => {
            Decision::rejected(surgeon.id.clone(), theatre.id.clone(), reasons)
        }
        Outcome::Rejected {
            reasons: mut timed_reasons,
        } => {
            reasons.append(&mut timed_reasons);
            Decision::rejected(surgeon.id.clone(), theatre.id.clone(), reasons)
        }
    }
}

/// Screened ASAP decision.
///
/// A failed screen rejects before any candidate is generated: the screen
/// verdict is slot-independent, so no start time in the window could succeed,
/// and searching anyway would only delay the same answer.
pub fn decide_asap(
    rules: &dyn CompatibilityRules,
    operation_id: &str,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    step_minutes: u32,
    duration_minutes: u32,
    surgeon: &Resource,
    theatre: &Resource,
    bookings: &[Booking],
) -> Decision {
    let reasons = rules.screen(&surgeon.id, &theatre.id, operation_id);
    if !reasons.is_empty() {
        return Decision::rejected(surgeon.id.clone(), theatre.id.clone(), reasons);
    }

    find_slot_asap(
        window_start,
        window_end,
        step_minutes,
        duration_minutes,
        surgeon,
        theatre,
        bookings,
    )
}
