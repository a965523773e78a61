use crate::{format, format_compact};

/// WHAT: Zero renders as 0:00
/// WHY: Idle/Finished countdowns must never show an empty string
#[test]
fn given_zero_when_formatting_then_minutes_and_padded_seconds() {
    // Given/When/Then
    assert_eq!(format(0), "0:00");
}

/// WHAT: Sub-hour values render as M:SS with unpadded minutes
/// WHY: Keeps short countdowns compact
#[test]
fn given_sub_hour_seconds_when_formatting_then_m_ss() {
    assert_eq!(format(65), "1:05");
    assert_eq!(format(59), "0:59");
    assert_eq!(format(600), "10:00");
    assert_eq!(format(3599), "59:59");
}

/// WHAT: Values of an hour or more render as H:MM:SS
/// WHY: Minutes must be padded once hours are shown
#[test]
fn given_hours_when_formatting_then_h_mm_ss() {
    assert_eq!(format(3661), "1:01:01");
    assert_eq!(format(3600), "1:00:00");
    assert_eq!(format(36_000 + 59), "10:00:59");
}

/// WHAT: Negative input is treated as zero
/// WHY: Remaining time is never negative on screen
#[test]
fn given_negative_seconds_when_formatting_then_zero() {
    assert_eq!(format(-5), "0:00");
    assert_eq!(format_compact(-5), "0:00");
}

/// WHAT: Compact variant drops seconds once hours are present
/// WHY: Status-bar title has a fixed width budget
#[test]
fn given_hours_when_formatting_compact_then_h_mm() {
    assert_eq!(format_compact(3661), "1:01");
    assert_eq!(format_compact(7199), "1:59");
}

/// WHAT: Compact variant matches the full format below one hour
/// WHY: Seconds matter when less than an hour remains
#[test]
fn given_sub_hour_seconds_when_formatting_compact_then_m_ss() {
    assert_eq!(format_compact(65), "1:05");
    assert_eq!(format_compact(0), "0:00");
}
