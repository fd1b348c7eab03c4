use timebank::utils::time::{
    clock_to_minutes, minutes_to_clock, parse_clock_minutes, seconds_to_clock,
};

#[test]
fn test_minutes_to_clock_pads_and_signs() {
    assert_eq!(minutes_to_clock(0), "00:00");
    assert_eq!(minutes_to_clock(480), "08:00");
    assert_eq!(minutes_to_clock(1439), "23:59");
    assert_eq!(minutes_to_clock(-360), "-06:00");
    assert_eq!(minutes_to_clock(-5), "-00:05");
}

#[test]
fn test_seconds_to_clock_three_fields() {
    assert_eq!(seconds_to_clock(0), "00:00:00");
    assert_eq!(seconds_to_clock(3600), "01:00:00");
    assert_eq!(seconds_to_clock(32_400), "09:00:00");
    assert_eq!(seconds_to_clock(-21_600), "-06:00:00");
    assert_eq!(seconds_to_clock(3_661), "01:01:01");
    assert_eq!(seconds_to_clock(-601), "-00:10:01");
}

#[test]
fn test_clock_round_trip_unsigned_range() {
    for m in 0..=1439 {
        assert_eq!(clock_to_minutes(&minutes_to_clock(m)), m, "minute {m}");
    }
}

#[test]
fn test_clock_round_trip_signed_range() {
    for m in -1439..=-1 {
        assert_eq!(clock_to_minutes(&minutes_to_clock(m)), m, "minute {m}");
    }
}

#[test]
fn test_clock_to_minutes_ignores_seconds_field() {
    assert_eq!(clock_to_minutes("08:30:59"), 510);
    assert_eq!(clock_to_minutes("-01:00:00"), -60);
}

#[test]
fn test_clock_to_minutes_is_total_on_garbage() {
    // no panic, deterministic value
    assert_eq!(clock_to_minutes("garbage"), 0);
    assert_eq!(clock_to_minutes(""), 0);
}

#[test]
fn test_parse_clock_minutes_validates() {
    assert_eq!(parse_clock_minutes("17:00").unwrap(), 1020);
    assert!(parse_clock_minutes("25:00").is_err());
    assert!(parse_clock_minutes("8h").is_err());
}

#[test]
fn test_signed_minutes_styles() {
    use timebank::utils::{MinuteStyle, signed_minutes};

    assert_eq!(signed_minutes(145, MinuteStyle::Clock), "+02:25");
    assert_eq!(signed_minutes(-70, MinuteStyle::Words), "-01h 10m");
    assert_eq!(signed_minutes(0, MinuteStyle::Clock), "00:00");
}
