//! Conflict detection for candidate bookings.
//!
//! Decides whether a candidate may be admitted given the bookings already
//! accepted for a classroom. Two bookings clash when they share at least one
//! day code AND their minute intervals overlap. Adjacent ranges (one ends
//! exactly when the other starts) are NOT conflicts.

use crate::booking::Booking;

/// A detected clash between a candidate and one existing booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub existing: Booking,
    pub overlap_minutes: u32,
}

/// Find the first existing booking that clashes with the candidate.
///
/// Walks `existing` in order and stops at the first clash. The comparison is
/// deliberately lenient about bad data:
///
/// - A candidate with an empty classroom matches nothing (fail-open; callers
///   that want junk rejected up front use [`Booking::validate`] instead).
/// - Entries for a different classroom are skipped, so the caller may pass a
///   pre-filtered or an unfiltered store.
/// - Records whose time labels do not parse, or whose interval runs
///   backward, are skipped rather than reported as errors.
///
/// Two intervals overlap iff `cand.start < other.end AND other.start <
/// cand.end` — half-open semantics, so back-to-back bookings that merely
/// touch do not clash.
pub fn find_conflict(candidate: &Booking, existing: &[Booking]) -> Option<Conflict> {
    if candidate.classroom.is_empty() {
        return None;
    }
    let (cand_start, cand_end) = candidate.minute_range()?;
    let cand_days = candidate.day_codes();
    if cand_days.is_empty() {
        return None;
    }

    for other in existing {
        if other.classroom != candidate.classroom {
            continue;
        }
        if !other.day_codes().iter().any(|d| cand_days.contains(d)) {
            continue;
        }
        let (other_start, other_end) = match other.minute_range() {
            Some(range) => range,
            None => continue,
        };
        if cand_start < other_end && other_start < cand_end {
            let overlap_start = cand_start.max(other_start);
            let overlap_end = cand_end.min(other_end);
            return Some(Conflict {
                existing: other.clone(),
                overlap_minutes: overlap_end - overlap_start,
            });
        }
    }

    None
}

/// True when the candidate clashes with any existing booking.
pub fn has_conflict(candidate: &Booking, existing: &[Booking]) -> bool {
    find_conflict(candidate, existing).is_some()
}
