//! Tests for TF-IDF indexing and search.

use rota_evidence::{EvidenceChunk, EvidenceIndex};

fn clinic_chunks() -> Vec<EvidenceChunk> {
    vec![
        EvidenceChunk::new(
            "SURGEON_S001",
            "Surgeon Alice Tan (ID S001) can perform operations OP001. Specialties: Orthopaedic.",
        )
        .with_tag("type", "surgeon"),
        EvidenceChunk::new(
            "OP_OP001",
            "Operation Knee Arthroscopy (ID OP001) requires specialty Orthopaedic, \
             equipment Arthroscope, duration 60 minutes.",
        )
        .with_tag("type", "operation"),
        EvidenceChunk::new(
            "THEATRE_T002",
            "Theatre 2 (ID T002) type Cardiac, equipment Bypass Machine, Ventilator.",
        )
        .with_tag("type", "theatre"),
    ]
}

#[test]
fn best_match_ranks_first() {
    let index = EvidenceIndex::build(clinic_chunks());

    let hits = index.search("knee arthroscopy duration", 3);

    assert_eq!(hits[0].chunk.chunk_id, "OP_OP001");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn identical_text_scores_one() {
    let index = EvidenceIndex::build(vec![EvidenceChunk::new(
        "POLICY_RULES",
        "Emergency cases take priority over routine bookings.",
    )]);

    let hits = index.search("Emergency cases take priority over routine bookings.", 1);

    assert!((hits[0].score - 1.0).abs() < 1e-9);
}

#[test]
fn search_is_case_insensitive() {
    let index = EvidenceIndex::build(clinic_chunks());

    let upper = index.search("KNEE ARTHROSCOPY", 1);
    let lower = index.search("knee arthroscopy", 1);

    assert_eq!(upper[0].chunk.chunk_id, lower[0].chunk.chunk_id);
    assert!((upper[0].score - lower[0].score).abs() < 1e-12);
}

#[test]
fn stopword_only_query_scores_nothing() {
    let index = EvidenceIndex::build(clinic_chunks());

    let hits = index.search("the and of a", 3);

    // Still k results, all zero-scored, in corpus order.
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|h| h.score == 0.0));
    assert_eq!(hits[0].chunk.chunk_id, "SURGEON_S001");
}

#[test]
fn k_truncates_the_result_list() {
    let index = EvidenceIndex::build(clinic_chunks());

    assert_eq!(index.search("theatre", 2).len(), 2);
    assert_eq!(index.search("theatre", 10).len(), 3);
    assert!(index.search("theatre", 0).is_empty());
}

#[test]
fn empty_index_returns_no_hits() {
    let index = EvidenceIndex::build(Vec::new());

    assert!(index.is_empty());
    assert!(index.search("anything", 5).is_empty());
}

#[test]
fn unknown_terms_contribute_nothing() {
    let index = EvidenceIndex::build(clinic_chunks());

    let hits = index.search("cardiac zzzunknownzzz", 1);

    assert_eq!(hits[0].chunk.chunk_id, "THEATRE_T002");
    assert!(hits[0].score > 0.0);
}

#[test]
fn tags_survive_into_hits() {
    let index = EvidenceIndex::build(clinic_chunks());

    let hits = index.search("arthroscopy", 1);

    assert_eq!(hits[0].chunk.tags.get("type").map(String::as_str), Some("operation"));
}

#[test]
fn chunk_round_trips_as_json() {
    let chunk = EvidenceChunk::new("BOOKING_B0001", "Booking B0001 scheduled patient John Doe.")
        .with_tag("type", "booking")
        .with_tag("booking_id", "B0001");

    let json = serde_json::to_string(&chunk).unwrap();
    let back: EvidenceChunk = serde_json::from_str(&json).unwrap();

    assert_eq!(back, chunk);
}
