//! Weekly display-grid construction.
//!
//! Lays a classroom's bookings out on a day × hour-slot grid for rendering.
//! The builder trusts its input: overlapping bookings simply overwrite one
//! another cell by cell in input order, because admission control has
//! already run by the time anything reaches the grid. The input order is the
//! caller's retrieval order; the builder never reorders bookings.

use crate::booking::Booking;
use crate::clock::{self, SLOT_KEYS};
use crate::weekday::{DayCode, WeekdayConfig};

/// One day row of a schedule grid: a day name plus the twelve slot cells in
/// display order. Kept as ordered `(key, label)` pairs rather than a map —
/// slot order (`"08".."12"` then `"01".."07"`) is not lexicographic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    /// Uppercase three-letter day name, e.g. `"SUN"`.
    pub day: String,
    /// `(slot key, label)` pairs; an empty label is a free slot.
    pub cells: Vec<(String, String)>,
}

/// A classroom's weekly schedule: five day rows in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleGrid {
    pub rows: Vec<DayRow>,
}

impl ScheduleGrid {
    /// Empty grid for the given configuration: 5 days × 12 free slots.
    fn empty(config: WeekdayConfig) -> Self {
        let rows = DayCode::ALL
            .iter()
            .map(|&code| DayRow {
                day: config.day_name(code),
                cells: SLOT_KEYS
                    .iter()
                    .map(|&slot| (slot.to_string(), String::new()))
                    .collect(),
            })
            .collect();
        ScheduleGrid { rows }
    }

    /// The label at `(day name, slot key)`, if both exist in this grid.
    pub fn cell(&self, day: &str, slot: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.day == day)?
            .cells
            .iter()
            .find(|(key, _)| key == slot)
            .map(|(_, label)| label.as_str())
    }

    fn cell_mut(&mut self, day_index: usize, slot: &str) -> Option<&mut String> {
        self.rows[day_index]
            .cells
            .iter_mut()
            .find(|(key, _)| key == slot)
            .map(|(_, label)| label)
    }
}

/// Build the weekly grid for a list of bookings.
///
/// Each booking covers every whole hour in `[start_hour, end_hour)` after
/// short-hour normalization, on every day its day codes name under `config`.
/// Covered cells get the label `"<course> - <instructor>"`; a later booking
/// overwrites earlier labels on any cell they share.
///
/// Degenerate records degrade instead of failing: bookings whose time labels
/// do not parse, or whose normalized hours do not run forward, are skipped
/// whole; day codes outside `'1'..'5'` and hours that fold onto no slot key
/// are skipped individually.
pub fn build_grid(bookings: &[Booking], config: WeekdayConfig) -> ScheduleGrid {
    let mut grid = ScheduleGrid::empty(config);

    for booking in bookings {
        let start = match clock::normalized_hour(&booking.start_time) {
            Some(hour) => hour,
            None => continue,
        };
        let end = match clock::normalized_hour(&booking.end_time) {
            Some(hour) => hour,
            None => continue,
        };
        if start >= end {
            continue;
        }

        let label = format!("{} - {}", booking.course, booking.instructor);
        for code in booking.day_codes() {
            for hour in start..end {
                let key = clock::slot_key(hour);
                if let Some(cell) = grid.cell_mut(code as usize, &key) {
                    *cell = label.clone();
                }
            }
        }
    }

    grid
}
