//! Recurring weekly availability windows and the matcher that decides whether
//! a concrete interval falls inside one.
//!
//! A resource (surgeon or theatre) owns a set of windows; order is irrelevant
//! and several windows on the same day are legal (split shifts). Matching is
//! inclusive on both boundaries, so a booking ending exactly at a window's end
//! is valid.

use chrono::{Datelike, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;
use crate::timefmt;

/// Day-of-week label, serialized exactly as the record files spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Mon,
            Weekday::Tue => DayOfWeek::Tue,
            Weekday::Wed => DayOfWeek::Wed,
            Weekday::Thu => DayOfWeek::Thu,
            Weekday::Fri => DayOfWeek::Fri,
            Weekday::Sat => DayOfWeek::Sat,
            Weekday::Sun => DayOfWeek::Sun,
        }
    }
}

/// One recurring weekly window: a day label plus a time-of-day range.
///
/// Invariant: `start < end` as times of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub day: DayOfWeek,
    #[serde(with = "timefmt::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "timefmt::hhmm")]
    pub end: NaiveTime,
}

/// A bookable resource as the engine sees it: an identifier plus its
/// availability windows. Loaded from records elsewhere; the engine only reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub windows: Vec<AvailabilityWindow>,
}

/// Does `slot` fall entirely within one of `windows`?
///
/// An interval spanning two calendar days never matches, regardless of window
/// contents: bookings may not cross midnight under the weekly-window model.
/// This is a deliberate domain rule, not a shortcut — callers rely on
/// midnight-spanning bookings being impossible.
///
/// Otherwise the slot matches when some window carries the start's weekday
/// label and `window.start <= slot start-of-day && slot end-of-day <= window.end`
/// (inclusive boundaries). First match wins.
pub fn fits_windows(slot: &TimeInterval, windows: &[AvailabilityWindow]) -> bool {
    if slot.start.date() != slot.end.date() {
        return false;
    }

    let day = DayOfWeek::from(slot.start.weekday());
    windows
        .iter()
        .any(|w| w.day == day && w.start <= slot.start.time() && slot.end.time() <= w.end)
}
