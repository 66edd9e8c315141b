//! # rota-records
//!
//! The scheduling engine's collaborators: surgeon / patient / operation /
//! theatre / booking records persisted as flat JSON files, the qualification
//! and equipment fact base, and the compatibility screen that turns those
//! facts into rejection reasons for the engine.
//!
//! Everything here is I/O and lookup — the records are loaded into an
//! immutable [`Registry`] snapshot and handed to `rota-engine`, which never
//! touches a file itself. Booking creation is the one write path: an approved
//! decision becomes a [`BookingRecord`] appended to `bookings.json`.
//!
//! ## Modules
//!
//! - [`models`] — the five record kinds in their on-disk shapes
//! - [`store`] — data-directory load/append and booking id allocation
//! - [`facts`] — `can_perform` / `requires_equipment` fact lookup
//! - [`screen`] — `CompatibilityRules` over records + facts
//! - [`evidence`] — record summaries as retrieval chunks
//! - [`error`] — store error types

pub mod error;
pub mod evidence;
pub mod facts;
pub mod models;
pub mod screen;
pub mod store;

pub use error::{Result, StoreError};
pub use evidence::build_chunks;
pub use facts::FactBase;
pub use models::{BookingRecord, OperationRecord, PatientRecord, SurgeonRecord, TheatreRecord};
pub use screen::RecordScreen;
pub use store::{next_booking_id, Registry, Store};
