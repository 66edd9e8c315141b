//! Tests for fixed-slot validation: one explicit start time, every violation
//! reported at once.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rota_engine::{
    validate_fixed_slot, AvailabilityWindow, Booking, DayOfWeek, RejectionReason, Resource,
    TimeInterval,
};

// 2026-03-02 is a Monday.

fn dt(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn window(day: DayOfWeek, sh: u32, eh: u32) -> AvailabilityWindow {
    AvailabilityWindow {
        day,
        start: NaiveTime::from_hms_opt(sh, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(eh, 0, 0).unwrap(),
    }
}

fn resource(id: &str, windows: Vec<AvailabilityWindow>) -> Resource {
    Resource {
        id: id.to_string(),
        windows,
    }
}

fn surgeon_mon_morning() -> Resource {
    resource("S001", vec![window(DayOfWeek::Mon, 8, 12)])
}

fn theatre_mon_all_day() -> Resource {
    resource("T001", vec![window(DayOfWeek::Mon, 8, 17)])
}

fn booking(id: &str, surgeon: &str, theatre: &str, start: NaiveDateTime, end: NaiveDateTime) -> Booking {
    Booking {
        id: id.to_string(),
        surgeon_id: surgeon.to_string(),
        theatre_id: theatre.to_string(),
        slot: TimeInterval::new(start, end),
    }
}

#[test]
fn free_slot_inside_both_windows_approved() {
    // Surgeon Mon 08:00-12:00, theatre Mon 08:00-17:00, nothing booked,
    // 60 minutes at Monday 09:00 → approved, ends 10:00.
    let decision = validate_fixed_slot(
        dt(2, 9, 0),
        60,
        &surgeon_mon_morning(),
        &theatre_mon_all_day(),
        &[],
    );

    assert!(decision.is_approved());
    assert!(decision.reasons().is_empty());
    let slot = decision.slot().unwrap();
    assert_eq!(slot.start, dt(2, 9, 0));
    assert_eq!(slot.end, dt(2, 10, 0));
    assert_eq!(decision.surgeon_id, "S001");
    assert_eq!(decision.theatre_id, "T001");
}

#[test]
fn overlapping_surgeon_booking_rejected() {
    // Existing booking holds the surgeon 09:00-10:00; proposing 09:30 must
    // report the surgeon conflict ([09:30,10:30) overlaps [09:00,10:00)).
    let bookings = vec![booking("B0001", "S001", "T001", dt(2, 9, 0), dt(2, 10, 0))];

    let decision = validate_fixed_slot(
        dt(2, 9, 30),
        60,
        &surgeon_mon_morning(),
        &theatre_mon_all_day(),
        &bookings,
    );

    assert!(!decision.is_approved());
    assert!(decision
        .reasons()
        .contains(&RejectionReason::SurgeonBookingConflict));
    assert_eq!(decision.slot(), None);
}

#[test]
fn identical_slot_same_surgeon_rejected_even_in_other_theatre() {
    // Candidate identical to an existing booking of the same surgeon: the
    // surgeon conflict must survive a theatre swap.
    let bookings = vec![booking("B0001", "S001", "T001", dt(2, 9, 0), dt(2, 10, 0))];
    let other_theatre = resource("T002", vec![window(DayOfWeek::Mon, 8, 17)]);

    let same_theatre = validate_fixed_slot(
        dt(2, 9, 0),
        60,
        &surgeon_mon_morning(),
        &theatre_mon_all_day(),
        &bookings,
    );
    let swapped = validate_fixed_slot(
        dt(2, 9, 0),
        60,
        &surgeon_mon_morning(),
        &other_theatre,
        &bookings,
    );

    assert!(same_theatre
        .reasons()
        .contains(&RejectionReason::SurgeonBookingConflict));
    assert!(swapped
        .reasons()
        .contains(&RejectionReason::SurgeonBookingConflict));
    assert!(!swapped
        .reasons()
        .contains(&RejectionReason::TheatreBookingConflict));
}

#[test]
fn all_violations_reported_together() {
    // Tuesday slot against Monday-only windows, colliding with a booking that
    // holds both resources: four reasons, fixed order.
    let bookings = vec![booking("B0001", "S001", "T001", dt(3, 9, 0), dt(3, 10, 0))];

    let decision = validate_fixed_slot(
        dt(3, 9, 0),
        60,
        &surgeon_mon_morning(),
        &theatre_mon_all_day(),
        &bookings,
    );

    assert_eq!(
        decision.reasons(),
        &[
            RejectionReason::SurgeonUnavailable,
            RejectionReason::TheatreUnavailable,
            RejectionReason::SurgeonBookingConflict,
            RejectionReason::TheatreBookingConflict,
        ]
    );
}

#[test]
fn slot_ending_at_window_end_approved() {
    // Inclusive boundary: 11:00-12:00 exactly closes the surgeon's window.
    let decision = validate_fixed_slot(
        dt(2, 11, 0),
        60,
        &surgeon_mon_morning(),
        &theatre_mon_all_day(),
        &[],
    );

    assert!(decision.is_approved());
}

#[test]
fn adjacent_booking_does_not_block() {
    // Booking ends 10:00; proposing exactly 10:00 is conflict-free.
    let bookings = vec![booking("B0001", "S001", "T001", dt(2, 9, 0), dt(2, 10, 0))];

    let decision = validate_fixed_slot(
        dt(2, 10, 0),
        60,
        &surgeon_mon_morning(),
        &theatre_mon_all_day(),
        &bookings,
    );

    assert!(decision.is_approved());
}

#[test]
fn decision_serializes_flat() {
    let approved = validate_fixed_slot(
        dt(2, 9, 0),
        60,
        &surgeon_mon_morning(),
        &theatre_mon_all_day(),
        &[],
    );
    let json = serde_json::to_value(&approved).unwrap();

    assert_eq!(json["approved"], true);
    assert_eq!(json["surgeon_id"], "S001");
    assert_eq!(json["start_time"], "2026-03-02T09:00");
    assert_eq!(json["end_time"], "2026-03-02T10:00");
    assert_eq!(json["reasons"].as_array().unwrap().len(), 0);

    let rejected = validate_fixed_slot(
        dt(3, 9, 0),
        60,
        &surgeon_mon_morning(),
        &theatre_mon_all_day(),
        &[],
    );
    let json = serde_json::to_value(&rejected).unwrap();

    assert_eq!(json["approved"], false);
    assert!(json.get("start_time").is_none(), "no interval on rejection");
    assert_eq!(
        json["reasons"][0],
        "Surgeon not available in that time range."
    );
}
