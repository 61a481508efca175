//! The booking value type and its wire representation.
//!
//! A booking is one scheduled room reservation: a course meeting in one
//! classroom, recurring on a set of weekdays within the week, over a fixed
//! time range. Bookings are immutable once admitted; nothing in this crate
//! ever mutates one.

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::{Result, ScheduleError};
use crate::weekday::DayCode;

/// One scheduled room reservation.
///
/// Times stay in their raw short-hour string form (see [`crate::clock`]);
/// they are parsed on demand by the conflict checker and the grid builder,
/// each with its own notion of normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Classroom identifier. Older store files call this field `lab`; both
    /// spellings deserialize into it, serialization always emits `classroom`.
    #[serde(alias = "lab")]
    pub classroom: String,

    /// Day codes `'1'..'5'`, duplicates tolerated. See [`Booking::canonical_days`].
    pub days: String,

    /// Raw start time, short-hour `HH:MM`.
    #[serde(rename = "starttime")]
    pub start_time: String,

    /// Raw end time, short-hour `HH:MM`.
    #[serde(rename = "endtime")]
    pub end_time: String,

    /// Course name shown in grid cells.
    pub course: String,

    /// Instructor name shown in grid cells.
    pub instructor: String,

    /// Head count, kept verbatim for display; not used by any computation.
    #[serde(
        rename = "numberOfStudents",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub student_count: Option<String>,
}

impl Booking {
    /// The parsed day codes, ascending and deduplicated.
    ///
    /// Characters outside `'1'..'5'` are skipped; a booking whose `days` is
    /// entirely junk simply recurs on no day.
    pub fn day_codes(&self) -> Vec<DayCode> {
        let mut codes: Vec<DayCode> = self.days.chars().filter_map(DayCode::from_char).collect();
        codes.sort();
        codes.dedup();
        codes
    }

    /// Canonical storage form of `days`: ascending-sorted, deduplicated,
    /// invalid characters dropped.
    pub fn canonical_days(&self) -> String {
        self.day_codes().iter().map(|c| c.as_char()).collect()
    }

    /// The booking's time range in minutes since midnight, if both labels
    /// parse and the interval runs forward.
    ///
    /// This is the conflict checker's view of time; the grid builder applies
    /// its own hour-level short-hour normalization instead.
    pub fn minute_range(&self) -> Option<(u32, u32)> {
        let start = clock::minutes_of(&self.start_time)?;
        let end = clock::minutes_of(&self.end_time)?;
        (start < end).then_some((start, end))
    }

    /// Strict admission check for fresh input.
    ///
    /// Store data is handled leniently everywhere else (malformed records
    /// degrade to "no effect"), but a booking that is about to be inserted
    /// must name a classroom, recur on at least one valid day, and carry a
    /// parsable, forward-running time range.
    pub fn validate(&self) -> Result<()> {
        if self.classroom.is_empty() {
            return Err(ScheduleError::MissingClassroom);
        }
        if self.day_codes().is_empty() {
            return Err(ScheduleError::NoValidDays(self.days.clone()));
        }
        let start = clock::minutes_of(&self.start_time)
            .ok_or_else(|| ScheduleError::BadTime(self.start_time.clone()))?;
        let end = clock::minutes_of(&self.end_time)
            .ok_or_else(|| ScheduleError::BadTime(self.end_time.clone()))?;
        if start >= end {
            return Err(ScheduleError::InvertedInterval {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(())
    }
}
