//! The engine's sole output: an approved or rejected scheduling decision.
//!
//! Modeled as a tagged result so "interval present iff approved" is enforced
//! by the type, not by convention. Constructed once per validate/find call and
//! immediately consumed by the caller; never stored.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::interval::TimeInterval;
use crate::timefmt;

/// Why a candidate slot was turned down.
///
/// The engine's only failure taxonomy — a rejection is data, never an error
/// value or a panic. Each variant renders the human-readable message shown to
/// the booking clerk. The first three are produced by the compatibility
/// screen collaborator and passed through; the rest come from the engine's
/// own time checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The surgeon is not qualified to perform the operation.
    NotQualified,
    /// The theatre lacks equipment the operation requires (sorted list).
    MissingEquipment(Vec<String>),
    /// The theatre's type does not match the operation's required specialty.
    SpecialtyMismatch,
    SurgeonUnavailable,
    TheatreUnavailable,
    SurgeonBookingConflict,
    TheatreBookingConflict,
    InvalidSearchWindow,
    NoSlotInWindow,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NotQualified => {
                write!(f, "Surgeon is not qualified for the selected operation.")
            }
            RejectionReason::MissingEquipment(items) => {
                write!(f, "Theatre is missing required equipment: {}", items.join(", "))
            }
            RejectionReason::SpecialtyMismatch => {
                write!(f, "Theatre type is not compatible with the operation specialty.")
            }
            RejectionReason::SurgeonUnavailable => {
                write!(f, "Surgeon not available in that time range.")
            }
            RejectionReason::TheatreUnavailable => {
                write!(f, "Theatre not available in that time range.")
            }
            RejectionReason::SurgeonBookingConflict => {
                write!(f, "Surgeon has a conflicting booking.")
            }
            RejectionReason::TheatreBookingConflict => {
                write!(f, "Theatre has a conflicting booking.")
            }
            RejectionReason::InvalidSearchWindow => write!(f, "Invalid time window."),
            RejectionReason::NoSlotInWindow => {
                write!(f, "No available slot found within the requested window.")
            }
        }
    }
}

// Reasons cross the wire as their display strings; callers read prose, not
// variant names.
impl Serialize for RejectionReason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The two shapes a decision can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The slot works; here is the concrete interval.
    Approved { slot: TimeInterval },
    /// The slot (or search) failed, with the ordered reasons why.
    /// Never empty.
    Rejected { reasons: Vec<RejectionReason> },
}

/// One scheduling decision for a (surgeon, theatre) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub surgeon_id: String,
    pub theatre_id: String,
    pub outcome: Outcome,
}

impl Decision {
    pub fn approved(
        surgeon_id: impl Into<String>,
        theatre_id: impl Into<String>,
        slot: TimeInterval,
    ) -> Self {
        Self {
            surgeon_id: surgeon_id.into(),
            theatre_id: theatre_id.into(),
            outcome: Outcome::Approved { slot },
        }
    }

    pub fn rejected(
        surgeon_id: impl Into<String>,
        theatre_id: impl Into<String>,
        reasons: Vec<RejectionReason>,
    ) -> Self {
        Self {
            surgeon_id: surgeon_id.into(),
            theatre_id: theatre_id.into(),
            outcome: Outcome::Rejected { reasons },
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.outcome, Outcome::Approved { .. })
    }

    /// The resolved interval, present only on approval.
    pub fn slot(&self) -> Option<TimeInterval> {
        match &self.outcome {
            Outcome::Approved { slot } => Some(*slot),
            Outcome::Rejected { .. } => None,
        }
    }

    /// The ordered rejection reasons; empty iff approved.
    pub fn reasons(&self) -> &[RejectionReason] {
        match &self.outcome {
            Outcome::Rejected { reasons } => reasons,
            Outcome::Approved { .. } => &[],
        }
    }
}

// Serialized flat — `approved`, the ids, `start_time`/`end_time` only when
// approved, and the reason strings — which is the shape booking front ends
// already consume.
impl Serialize for Decision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Decision", 6)?;
        state.serialize_field("approved", &self.is_approved())?;
        state.serialize_field("surgeon_id", &self.surgeon_id)?;
        state.serialize_field("theatre_id", &self.theatre_id)?;
        match &self.outcome {
            Outcome::Approved { slot } => {
                state.serialize_field("start_time", &timefmt::format_local(&slot.start))?;
                state.serialize_field("end_time", &timefmt::format_local(&slot.end))?;
                state.serialize_field("reasons", &[] as &[RejectionReason])?;
            }
            Outcome::Rejected { reasons } => {
                state.skip_field("start_time")?;
                state.skip_field("end_time")?;
                state.serialize_field("reasons", reasons)?;
            }
        }
        state.end()
    }
}
