//! The five record kinds, shaped exactly as the JSON files spell them.
//!
//! Conversion methods produce the engine's read-only views: `resource()` for
//! the two bookable kinds, `booking()` for the conflict scanner's input.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use rota_engine::{timefmt, AvailabilityWindow, Booking, Resource, TimeInterval};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurgeonRecord {
    pub surgeon_id: String,
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Operation ids this surgeon is qualified for.
    #[serde(default)]
    pub can_perform: Vec<String>,
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
}

impl SurgeonRecord {
    pub fn resource(&self) -> Resource {
        Resource {
            id: self.surgeon_id.clone(),
            windows: self.availability.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheatreRecord {
    pub theatre_id: String,
    pub name: String,
    /// Specialty label; the record files call this field `type`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
}

impl TheatreRecord {
    pub fn resource(&self) -> Resource {
        Resource {
            id: self.theatre_id.clone(),
            windows: self.availability.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub operation_id: String,
    pub name: String,
    pub required_specialty: String,
    #[serde(default)]
    pub required_equipment: Vec<String>,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    pub name: String,
    #[serde(default)]
    pub priority: String,
}

/// A persisted booking, denormalized with display names so the dashboard can
/// render it without joins. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub operation_id: String,
    pub operation_name: String,
    pub surgeon_id: String,
    pub surgeon_name: String,
    pub theatre_id: String,
    pub theatre_name: String,
    #[serde(with = "timefmt::local_minutes")]
    pub start_time: NaiveDateTime,
    #[serde(with = "timefmt::local_minutes")]
    pub end_time: NaiveDateTime,
}

impl BookingRecord {
    /// The engine's view: just the ids and the interval.
    pub fn booking(&self) -> Booking {
        Booking {
            id: self.booking_id.clone(),
            surgeon_id: self.surgeon_id.clone(),
            theatre_id: self.theatre_id.clone(),
            slot: TimeInterval::new(self.start_time, self.end_time),
        }
    }
}
