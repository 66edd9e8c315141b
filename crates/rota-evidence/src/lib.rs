//! # rota-evidence
//!
//! TF-IDF retrieval over free-text evidence chunks. The scheduling front end
//! uses this to show the clerk *why* the records support (or undermine) a
//! proposed booking: each surgeon, operation, theatre, patient, and recent
//! booking is summarized as one text chunk, and a query pulls back the most
//! relevant chunks with cosine scores.
//!
//! The index knows nothing about scheduling — it ranks text, nothing more.
//!
//! ## Quick start
//!
//! ```rust
//! use rota_evidence::{EvidenceChunk, EvidenceIndex};
//!
//! let index = EvidenceIndex::build(vec![
//!     EvidenceChunk::new("SURGEON_S001", "Surgeon Alice Tan performs knee arthroscopy."),
//!     EvidenceChunk::new("THEATRE_T001", "Theatre 1 holds cardiac bypass equipment."),
//! ]);
//!
//! let hits = index.search("knee arthroscopy", 1);
//! assert_eq!(hits[0].chunk.chunk_id, "SURGEON_S001");
//! ```
//!
//! ## Modules
//!
//! - [`chunk`] — the `EvidenceChunk` unit of indexed text
//! - [`index`] — tokenization, TF-IDF weighting, cosine-ranked search

pub mod chunk;
pub mod index;

pub use chunk::EvidenceChunk;
pub use index::{EvidenceIndex, SearchHit};
