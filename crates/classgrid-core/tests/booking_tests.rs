//! Tests for the booking wire format and boundary validation.

use classgrid_core::{Booking, ScheduleError, WeekdayConfig};

fn candidate() -> Booking {
    Booking {
        classroom: "2".to_string(),
        days: "24".to_string(),
        start_time: "08:30".to_string(),
        end_time: "10:00".to_string(),
        course: "CS101".to_string(),
        instructor: "Dr A".to_string(),
        student_count: Some("25".to_string()),
    }
}

#[test]
fn wire_field_names_roundtrip() {
    let json = r#"{
        "classroom": "2",
        "days": "24",
        "starttime": "08:30",
        "endtime": "10:00",
        "course": "CS101",
        "instructor": "Dr A",
        "numberOfStudents": "25"
    }"#;

    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking, candidate());

    let back = serde_json::to_value(&booking).unwrap();
    assert_eq!(back["starttime"], "08:30");
    assert_eq!(back["endtime"], "10:00");
    assert_eq!(back["numberOfStudents"], "25");
}

#[test]
fn legacy_lab_field_still_deserializes() {
    let json = r#"{"lab":"3","days":"1","starttime":"09:00","endtime":"10:00","course":"PH110","instructor":"Dr C"}"#;

    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking.classroom, "3");

    // Serialization always writes the current field name.
    let back = serde_json::to_value(&booking).unwrap();
    assert!(back.get("lab").is_none());
    assert_eq!(back["classroom"], "3");
}

#[test]
fn student_count_is_optional_on_the_wire() {
    let json = r#"{"classroom":"1","days":"5","starttime":"08:00","endtime":"09:00","course":"BI150","instructor":"Dr E"}"#;

    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking.student_count, None);

    let back = serde_json::to_value(&booking).unwrap();
    assert!(back.get("numberOfStudents").is_none());
}

#[test]
fn canonical_days_sorts_and_dedups() {
    let mut booking = candidate();
    booking.days = "3113".to_string();
    assert_eq!(booking.canonical_days(), "13");
}

#[test]
fn canonical_days_drops_junk_characters() {
    let mut booking = candidate();
    booking.days = "5x07".to_string();
    assert_eq!(booking.canonical_days(), "5");
}

#[test]
fn validate_accepts_a_sound_booking() {
    assert!(candidate().validate().is_ok());
}

#[test]
fn validate_rejects_missing_classroom() {
    let mut booking = candidate();
    booking.classroom = String::new();
    assert!(matches!(
        booking.validate(),
        Err(ScheduleError::MissingClassroom)
    ));
}

#[test]
fn validate_rejects_junk_days() {
    let mut booking = candidate();
    booking.days = "09x".to_string();
    assert!(matches!(
        booking.validate(),
        Err(ScheduleError::NoValidDays(_))
    ));
}

#[test]
fn validate_rejects_unparsable_times() {
    let mut booking = candidate();
    booking.start_time = "soon".to_string();
    assert!(matches!(booking.validate(), Err(ScheduleError::BadTime(_))));
}

#[test]
fn validate_rejects_backward_interval() {
    let mut booking = candidate();
    booking.start_time = "11:00".to_string();
    booking.end_time = "09:00".to_string();
    assert!(matches!(
        booking.validate(),
        Err(ScheduleError::InvertedInterval { .. })
    ));
}

#[test]
fn weekday_config_parses_settings_values() {
    assert_eq!(
        "sun-thu".parse::<WeekdayConfig>().unwrap(),
        WeekdayConfig::SunThu
    );
    assert_eq!(
        "MON-FRI".parse::<WeekdayConfig>().unwrap(),
        WeekdayConfig::MonFri
    );
    assert!("sat-wed".parse::<WeekdayConfig>().is_err());
}

#[test]
fn weekday_config_display_matches_settings_form() {
    assert_eq!(WeekdayConfig::SunThu.to_string(), "sun-thu");
    assert_eq!(WeekdayConfig::MonFri.to_string(), "mon-fri");
}

#[test]
fn day_names_follow_the_configuration() {
    assert_eq!(
        WeekdayConfig::SunThu.day_names(),
        ["SUN", "MON", "TUE", "WED", "THU"]
    );
    assert_eq!(
        WeekdayConfig::MonFri.day_names(),
        ["MON", "TUE", "WED", "THU", "FRI"]
    );
}
