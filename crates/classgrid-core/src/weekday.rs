//! Day codes and the two supported weekday configurations.
//!
//! A booking carries its recurrence pattern as a string of single-character
//! day codes `'1'..'5'`. What those codes mean depends on a site-wide
//! weekday configuration: a Sun–Thu week or a Mon–Fri week. The active
//! configuration is external settings data; this crate only ever receives
//! one of the two values.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::ScheduleError;

/// One of the five day codes a booking can recur on.
///
/// The wire form is the characters `'1'` through `'5'`. Everything else is
/// dropped at the boundary so the rest of the crate works on a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayCode {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl DayCode {
    /// All five codes in wire order.
    pub const ALL: [DayCode; 5] = [
        DayCode::First,
        DayCode::Second,
        DayCode::Third,
        DayCode::Fourth,
        DayCode::Fifth,
    ];

    /// Parse a single wire character; `None` for anything outside `'1'..'5'`.
    pub fn from_char(c: char) -> Option<DayCode> {
        match c {
            '1' => Some(DayCode::First),
            '2' => Some(DayCode::Second),
            '3' => Some(DayCode::Third),
            '4' => Some(DayCode::Fourth),
            '5' => Some(DayCode::Fifth),
            _ => None,
        }
    }

    /// The wire character for this code.
    pub fn as_char(self) -> char {
        match self {
            DayCode::First => '1',
            DayCode::Second => '2',
            DayCode::Third => '3',
            DayCode::Fourth => '4',
            DayCode::Fifth => '5',
        }
    }
}

/// A site-wide mapping from day codes to weekdays.
///
/// Exactly two configurations exist, and each maps the five codes to five
/// distinct weekdays, so no code is ambiguous within a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayConfig {
    /// Code `'1'` is Sunday, `'5'` is Thursday.
    #[default]
    SunThu,
    /// Code `'1'` is Monday, `'5'` is Friday.
    MonFri,
}

impl WeekdayConfig {
    /// The weekday a code names under this configuration.
    pub fn weekday(self, code: DayCode) -> Weekday {
        let index = code as usize;
        match self {
            WeekdayConfig::SunThu => [
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
            ][index],
            WeekdayConfig::MonFri => [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ][index],
        }
    }

    /// Uppercase three-letter display name for a code, e.g. `"SUN"`.
    pub fn day_name(self, code: DayCode) -> String {
        self.weekday(code).to_string().to_uppercase()
    }

    /// The five day names in code order.
    pub fn day_names(self) -> Vec<String> {
        DayCode::ALL.iter().map(|&code| self.day_name(code)).collect()
    }
}

impl FromStr for WeekdayConfig {
    type Err = ScheduleError;

    /// Parse the settings-document form: `"sun-thu"` or `"mon-fri"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun-thu" => Ok(WeekdayConfig::SunThu),
            "mon-fri" => Ok(WeekdayConfig::MonFri),
            other => Err(ScheduleError::UnknownWeekdays(other.to_string())),
        }
    }
}

impl fmt::Display for WeekdayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekdayConfig::SunThu => write!(f, "sun-thu"),
            WeekdayConfig::MonFri => write!(f, "mon-fri"),
        }
    }
}
