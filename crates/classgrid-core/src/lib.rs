//! # classgrid-core
//!
//! Conflict detection and display-grid construction for a weekly
//! classroom-reservation schedule.
//!
//! This crate is the pure core of a room-booking system: it receives a
//! candidate booking plus the bookings already accepted for a classroom,
//! decides whether the candidate may be admitted, and lays accepted bookings
//! out on a day × hour-slot grid for rendering. It performs no I/O and holds
//! no state of its own; loading, persisting, and settings lookup belong to
//! the caller.
//!
//! ## Quick start
//!
//! ```rust
//! use classgrid_core::{build_grid, has_conflict, Booking, WeekdayConfig};
//!
//! let existing = vec![Booking {
//!     classroom: "1".into(),
//!     days: "13".into(),
//!     start_time: "09:00".into(),
//!     end_time: "10:30".into(),
//!     course: "CS101".into(),
//!     instructor: "Dr A".into(),
//!     student_count: None,
//! }];
//!
//! // Overlaps the existing booking on day '1' → rejected.
//! let candidate = Booking {
//!     days: "1".into(),
//!     start_time: "10:00".into(),
//!     end_time: "11:00".into(),
//!     course: "MA201".into(),
//!     instructor: "Dr B".into(),
//!     ..existing[0].clone()
//! };
//! assert!(has_conflict(&candidate, &existing));
//!
//! let grid = build_grid(&existing, WeekdayConfig::SunThu);
//! assert_eq!(grid.cell("SUN", "09"), Some("CS101 - Dr A"));
//! ```
//!
//! ## Modules
//!
//! - [`booking`] — the [`Booking`] value type and its wire form
//! - [`weekday`] — day codes and the two supported weekday configurations
//! - [`clock`] — short-hour `HH:MM` parsing shared by both components
//! - [`conflict`] — candidate admission: day and time-range overlap
//! - [`grid`] — day × hour-slot display grid construction
//! - [`error`] — boundary error types

pub mod booking;
pub mod clock;
pub mod conflict;
pub mod error;
pub mod grid;
pub mod weekday;

pub use booking::Booking;
pub use conflict::{find_conflict, has_conflict, Conflict};
pub use error::ScheduleError;
pub use grid::{build_grid, DayRow, ScheduleGrid};
pub use weekday::{DayCode, WeekdayConfig};
