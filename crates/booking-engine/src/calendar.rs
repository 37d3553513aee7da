//! Calendar-day normalization -- collapses date-like values to whole days.
//!
//! Stays are whole-day reservations: two instants on the same calendar day
//! must compare equal no matter their clock time or UTC offset. Every value
//! entering the conflict checker passes through [`CalendarDay`] first, so the
//! proposed range and the existing ranges are compared on the same footing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Conversion to a wall-clock calendar day.
///
/// Implementations discard time-of-day and any timezone offset, keeping only
/// the local date component.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    /// The wall-clock date in the value's own timezone.
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// A whole-day stay: check-in on `start`, check-out on `end`.
///
/// The admission gate guarantees `end` is strictly after `start` for proposed
/// ranges; ranges already in storage are trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range from any date-like endpoints, normalizing both to
    /// calendar days.
    pub fn new(start: impl CalendarDay, end: impl CalendarDay) -> Self {
        Self {
            start: start.calendar_day(),
            end: end.calendar_day(),
        }
    }

    /// Number of nights covered (`end - start`).
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
