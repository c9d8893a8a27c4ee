use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

// @module: Wall-clock time arithmetic for subtitle timing

// @const: ISO local time regex (HH:MM:SS with optional fraction)
static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})(?:\.(\d+))?$").unwrap()
});

const MS_PER_DAY: i64 = 86_400_000;

/// A wall-clock time with millisecond precision, interpreted as elapsed
/// time since the start of the recording. There is no date component and
/// no ambient clock involved; arithmetic wraps modulo 24 hours, which is
/// a documented limitation rather than expected behavior for real input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TimeOfDay {
    /// Milliseconds since midnight, always in `0..86_400_000`
    ms: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { ms: 0 };

    /// Create a time from hour/minute/second components.
    /// Out-of-range components wrap into the day like any other arithmetic.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self::from_milliseconds(((hour as i64 * 3600) + (minute as i64 * 60) + second as i64) * 1000)
    }

    /// Create a time from hour/minute/second plus a millisecond fraction.
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self::from_milliseconds(
            ((hour as i64 * 3600) + (minute as i64 * 60) + second as i64) * 1000 + millisecond as i64,
        )
    }

    /// Create a time from a raw millisecond count, wrapping into `0..24h`.
    pub fn from_milliseconds(ms: i64) -> Self {
        TimeOfDay { ms: ms.rem_euclid(MS_PER_DAY) as u32 }
    }

    /// Parse an ISO-8601 local time (`HH:MM:SS`, optional fractional
    /// seconds). Returns `None` for anything that does not parse or has
    /// out-of-range components; the transcript parser reclassifies such
    /// lines as body text, so this is never an error.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = TIME_REGEX.captures(text)?;

        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        let second: u32 = caps[3].parse().ok()?;
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }

        let millisecond = match caps.get(4) {
            Some(fraction) => fraction_to_millis(fraction.as_str())?,
            None => 0,
        };

        Some(Self::from_hms_milli(hour, minute, second, millisecond))
    }

    /// Shift this time by a number of seconds (fractional and negative
    /// offsets allowed), carrying across minute/hour boundaries.
    pub fn add_seconds(self, seconds: f64) -> Self {
        let delta_ms = (seconds * 1000.0).round() as i64;
        Self::from_milliseconds(self.ms as i64 + delta_ms)
    }

    /// Total whole seconds since midnight; the sub-second fraction is
    /// ignored for this conversion.
    pub fn total_seconds(self) -> i64 {
        (self.ms / 1000) as i64
    }

    pub fn hour(self) -> u32 {
        self.ms / 3_600_000
    }

    pub fn minute(self) -> u32 {
        (self.ms % 3_600_000) / 60_000
    }

    pub fn second(self) -> u32 {
        (self.ms % 60_000) / 1_000
    }

    pub fn millisecond(self) -> u32 {
        self.ms % 1_000
    }
}

/// Convert fraction digits to milliseconds: take at most three digits and
/// pad on the right, so `.5` is 500 ms and `.05` is 50 ms.
fn fraction_to_millis(digits: &str) -> Option<u32> {
    let mut padded: String = digits.chars().take(3).collect();
    while padded.len() < 3 {
        padded.push('0');
    }
    padded.parse().ok()
}

impl fmt::Display for TimeOfDay {
    /// Format as a VTT timestamp, `HH:MM:SS.mmm`. The sub-second field is
    /// the fraction's digits padded on the right to three places, not a
    /// zero-padded millisecond count (50 ms renders as `.500`).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:0<3}",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}
