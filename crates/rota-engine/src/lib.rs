//! # rota-engine
//!
//! Deterministic scheduling decisions for surgical bookings: does a proposed
//! slot work for this surgeon and this theatre, and if not, when is the
//! earliest slot that does.
//!
//! The engine is pure and synchronous. It consumes read-only snapshots — a
//! surgeon, a theatre, the operation duration, and the existing booking list —
//! and returns a single [`Decision`]. It never performs I/O, never mutates its
//! inputs, and holds no state across calls. An approval is a point-in-time
//! certificate, not a lock: callers racing other writers must serialize
//! "decide, then persist" themselves.
//!
//! ## Modules
//!
//! - [`interval`] — half-open time intervals and the overlap primitive
//! - [`availability`] — recurring weekly availability windows and matching
//! - [`booking`] — the engine's read-only view of an existing booking
//! - [`conflict`] — double-booking scans over the booking snapshot
//! - [`decision`] — the approved/rejected result type and rejection reasons
//! - [`validate`] — fixed-slot validation (accumulates every violation)
//! - [`candidates`] — evenly spaced candidate start times over a window
//! - [`asap`] — earliest-feasible-slot search (short-circuits on success)
//! - [`screen`] — injected compatibility rules and the screened entry points
//! - [`timefmt`] — serde helpers for the `HH:MM` / local date-time formats

pub mod asap;
pub mod availability;
pub mod booking;
pub mod candidates;
pub mod conflict;
pub mod decision;
pub mod interval;
pub mod screen;
pub mod timefmt;
pub mod validate;

pub use asap::find_slot_asap;
pub use availability::{fits_windows, AvailabilityWindow, DayOfWeek, Resource};
pub use booking::Booking;
pub use candidates::{candidate_starts, CandidateStarts};
pub use conflict::{has_conflict, surgeon_conflict, theatre_conflict};
pub use decision::{Decision, Outcome, RejectionReason};
pub use interval::TimeInterval;
pub use screen::{decide_asap, decide_fixed, CompatibilityRules};
pub use validate::validate_fixed_slot;
