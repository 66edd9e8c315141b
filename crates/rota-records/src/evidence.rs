//! Record summaries as retrieval chunks for the evidence index.

use rota_engine::timefmt;
use rota_evidence::EvidenceChunk;

use crate::store::Registry;

/// How many of the most recent bookings are summarized. Older bookings would
/// otherwise dominate the corpus as the file grows.
const RECENT_BOOKINGS: usize = 20;

/// One chunk per record, plus an optional policy-rules chunk.
pub fn build_chunks(registry: &Registry, policies_text: Option<&str>) -> Vec<EvidenceChunk> {
    let mut chunks = Vec::new();

    if let Some(text) = policies_text {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            chunks.push(EvidenceChunk::new("POLICY_RULES", trimmed).with_tag("type", "policy"));
        }
    }

    for s in &registry.surgeons {
        chunks.push(
            EvidenceChunk::new(
                format!("SURGEON_{}", s.surgeon_id),
                format!(
                    "Surgeon {} (ID {}) can perform operations {}. Specialties: {}.",
                    s.name,
                    s.surgeon_id,
                    s.can_perform.join(", "),
                    s.specialties.join(", ")
                ),
            )
            .with_tag("type", "surgeon")
            .with_tag("surgeon_id", s.surgeon_id.clone()),
        );
    }

    for o in &registry.operations {
        chunks.push(
            EvidenceChunk::new(
                format!("OP_{}", o.operation_id),
                format!(
                    "Operation {} (ID {}) requires specialty {}, equipment {}, duration {} minutes.",
                    o.name,
                    o.operation_id,
                    o.required_specialty,
                    o.required_equipment.join(", "),
                    o.duration_minutes
                ),
            )
            .with_tag("type", "operation")
            .with_tag("operation_id", o.operation_id.clone()),
        );
    }

    for t in &registry.theatres {
        chunks.push(
            EvidenceChunk::new(
                format!("THEATRE_{}", t.theatre_id),
                format!(
                    "Theatre {} (ID {}) type {}, equipment {}.",
                    t.name,
                    t.theatre_id,
                    t.kind,
                    t.equipment.join(", ")
                ),
            )
            .with_tag("type", "theatre")
            .with_tag("theatre_id", t.theatre_id.clone()),
        );
    }

    for p in &registry.patients {
        chunks.push(
            EvidenceChunk::new(
                format!("PATIENT_{}", p.patient_id),
                format!("Patient {} (ID {}) priority {}.", p.name, p.patient_id, p.priority),
            )
            .with_tag("type", "patient")
            .with_tag("patient_id", p.patient_id.clone()),
        );
    }

    let skip = registry.bookings.len().saturating_sub(RECENT_BOOKINGS);
    for b in &registry.bookings[skip..] {
        chunks.push(
            EvidenceChunk::new(
                format!("BOOKING_{}", b.booking_id),
                format!(
                    "Booking {} scheduled patient {} with surgeon {} in theatre {} from {} to {}.",
                    b.booking_id,
                    b.patient_name,
                    b.surgeon_name,
                    b.theatre_name,
                    timefmt::format_local(&b.start_time),
                    timefmt::format_local(&b.end_time)
                ),
            )
            .with_tag("type", "booking")
            .with_tag("booking_id", b.booking_id.clone()),
        );
    }

    chunks
}
