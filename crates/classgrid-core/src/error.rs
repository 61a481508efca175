//! Error types for booking admission and configuration parsing.
//!
//! The conflict checker and grid builder never fail: degenerate records
//! degrade to "no effect" so callers of the two computations have nothing to
//! catch. Typed errors exist only at the boundary where fresh input enters
//! the system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The booking names no classroom.
    #[error("booking has no classroom")]
    MissingClassroom,

    /// The `days` string contains no valid day code.
    #[error("no valid day code in {0:?}")]
    NoValidDays(String),

    /// A time label could not be parsed as `HH:MM`.
    #[error("unparsable time: {0:?}")]
    BadTime(String),

    /// The start time does not precede the end time.
    #[error("start {start:?} does not precede end {end:?}")]
    InvertedInterval { start: String, end: String },

    /// An unrecognized weekday-configuration name.
    #[error("unknown weekday configuration {0:?} (expected sun-thu or mon-fri)")]
    UnknownWeekdays(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
