//! Tests for building evidence chunks from a record snapshot.

use chrono::NaiveDate;
use rota_records::store::Registry;
use rota_records::{
    build_chunks, BookingRecord, OperationRecord, PatientRecord, SurgeonRecord, TheatreRecord,
};

fn booking(n: usize) -> BookingRecord {
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    BookingRecord {
        booking_id: format!("B{n:04}"),
        patient_id: "P001".to_string(),
        patient_name: "John Doe".to_string(),
        operation_id: "OP001".to_string(),
        operation_name: "Knee Arthroscopy".to_string(),
        surgeon_id: "S001".to_string(),
        surgeon_name: "Alice Tan".to_string(),
        theatre_id: "T001".to_string(),
        theatre_name: "Theatre 1".to_string(),
        start_time: day.and_hms_opt(9, 0, 0).unwrap(),
        end_time: day.and_hms_opt(10, 0, 0).unwrap(),
    }
}

fn registry() -> Registry {
    Registry {
        surgeons: vec![SurgeonRecord {
            surgeon_id: "S001".to_string(),
            name: "Alice Tan".to_string(),
            specialties: vec!["Orthopaedic".to_string()],
            can_perform: vec!["OP001".to_string()],
            availability: vec![],
        }],
        patients: vec![PatientRecord {
            patient_id: "P001".to_string(),
            name: "John Doe".to_string(),
            priority: "routine".to_string(),
        }],
        operations: vec![OperationRecord {
            operation_id: "OP001".to_string(),
            name: "Knee Arthroscopy".to_string(),
            required_specialty: "Orthopaedic".to_string(),
            required_equipment: vec!["Arthroscope".to_string()],
            duration_minutes: 60,
        }],
        theatres: vec![TheatreRecord {
            theatre_id: "T001".to_string(),
            name: "Theatre 1".to_string(),
            kind: "Orthopaedic".to_string(),
            equipment: vec!["Arthroscope".to_string()],
            availability: vec![],
        }],
        bookings: vec![booking(1)],
    }
}

#[test]
fn one_chunk_per_record() {
    let chunks = build_chunks(&registry(), None);

    let ids: Vec<&str> = chunks.iter().map(|c| c.chunk_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "SURGEON_S001",
            "OP_OP001",
            "THEATRE_T001",
            "PATIENT_P001",
            "BOOKING_B0001"
        ]
    );
}

#[test]
fn chunk_texts_summarize_the_records() {
    let chunks = build_chunks(&registry(), None);

    let surgeon = chunks.iter().find(|c| c.chunk_id == "SURGEON_S001").unwrap();
    assert_eq!(
        surgeon.text,
        "Surgeon Alice Tan (ID S001) can perform operations OP001. Specialties: Orthopaedic."
    );
    assert_eq!(surgeon.tags.get("type").map(String::as_str), Some("surgeon"));

    let booking = chunks.iter().find(|c| c.chunk_id == "BOOKING_B0001").unwrap();
    assert_eq!(
        booking.text,
        "Booking B0001 scheduled patient John Doe with surgeon Alice Tan in theatre Theatre 1 \
         from 2026-03-02T09:00 to 2026-03-02T10:00."
    );
}

#[test]
fn policy_text_leads_the_corpus() {
    let chunks = build_chunks(&registry(), Some("  Emergency cases take priority.  "));

    assert_eq!(chunks[0].chunk_id, "POLICY_RULES");
    assert_eq!(chunks[0].text, "Emergency cases take priority.");
}

#[test]
fn blank_policy_text_is_dropped() {
    let chunks = build_chunks(&registry(), Some("   \n  "));
    assert_ne!(chunks[0].chunk_id, "POLICY_RULES");
}

#[test]
fn only_recent_bookings_are_summarized() {
    let mut registry = registry();
    registry.bookings = (1..=25).map(booking).collect();

    let chunks = build_chunks(&registry, None);

    let booking_ids: Vec<&str> = chunks
        .iter()
        .filter(|c| c.chunk_id.starts_with("BOOKING_"))
        .map(|c| c.chunk_id.as_str())
        .collect();

    // The last 20 of 25, oldest of those first.
    assert_eq!(booking_ids.len(), 20);
    assert_eq!(booking_ids.first(), Some(&"BOOKING_B0006"));
    assert_eq!(booking_ids.last(), Some(&"BOOKING_B0025"));
}
