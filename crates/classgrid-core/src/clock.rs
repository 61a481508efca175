//! Wall-clock parsing for short-hour time labels.
//!
//! Booking times are raw `HH:MM` strings. Hours 8–12 mean the morning hours
//! they name; hours 1–7 are afternoon hours written in 12-hour form (so
//! `1:00` is 13:00). The teaching day runs 08:00 through 19:59, which yields
//! the twelve one-hour display slots in [`SLOT_KEYS`].

/// The twelve hour-slot keys of a schedule grid, in display order.
///
/// Afternoon slots reuse the morning numerals: slot `"01"` is 13:00–13:59.
pub const SLOT_KEYS: [&str; 12] = [
    "08", "09", "10", "11", "12", "01", "02", "03", "04", "05", "06", "07",
];

/// Parse a raw `HH:MM` label into minutes since midnight.
///
/// Both substrings around the `:` are taken as plain integers; no range check
/// beyond what the integer parse enforces. Returns `None` for anything that
/// does not split into two parsable parts.
pub fn minutes_of(raw: &str) -> Option<u32> {
    let (hour, minute) = raw.split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;
    Some(hour * 60 + minute)
}

/// The leading hour of a raw time label, with the short-hour rule applied:
/// hours below 8 are afternoon hours and shift up by 12.
pub fn normalized_hour(raw: &str) -> Option<u32> {
    let hour: u32 = raw.split(':').next()?.trim().parse().ok()?;
    Some(if hour < 8 { hour + 12 } else { hour })
}

/// Display key for a normalized hour: hours past 12 fold back onto the
/// single-digit afternoon numerals, zero-padded to two characters.
pub fn slot_key(hour: u32) -> String {
    let display = if hour > 12 { hour - 12 } else { hour };
    format!("{:02}", display)
}
