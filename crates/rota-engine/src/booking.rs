//! The engine's read-only view of an existing booking.

use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;

/// An existing booking, as consumed by the conflict scanner.
///
/// Immutable once created. The engine reads a snapshot of these to detect
/// double-booking; creating and persisting bookings is the caller's job, and
/// only after an approved decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub surgeon_id: String,
    pub theatre_id: String,
    #[serde(flatten)]
    pub slot: TimeInterval,
}
