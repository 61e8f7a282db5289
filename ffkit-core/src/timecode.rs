//! `HH:MM:SS` timestamps for the trim operation.
//!
//! A timestamp is exactly six digits split 2/2/2. Component ranges are not
//! checked (`00:99:00` is accepted), matching what ffmpeg itself tolerates
//! for `-ss`/`-t` values.

use std::fmt;

/// A wall-clock offset in hours, minutes, and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl Timestamp {
    /// Parses `HH:MM:SS`, requiring exactly two digits per component.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
            return None;
        }
        let component = |range: std::ops::Range<usize>| -> Option<u32> {
            let digits = &value[range];
            if digits.bytes().all(|b| b.is_ascii_digit()) {
                digits.parse().ok()
            } else {
                None
            }
        };
        Some(Self {
            hours: component(0..2)?,
            minutes: component(3..5)?,
            seconds: component(6..8)?,
        })
    }

    /// Total offset in seconds.
    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Re-encodes a second count as zero-padded `HH:MM:SS` via floor division.
///
/// Negative inputs are not rejected: the hour component goes negative and the
/// result is left for ffmpeg to refuse. Trim deliberately does not check that
/// end follows begin.
#[must_use]
pub fn format_seconds(total: i64) -> String {
    let hours = total.div_euclid(3600);
    let remainder = total.rem_euclid(3600);
    let minutes = remainder / 60;
    let seconds = remainder % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Duration from `begin` to `end` as a `HH:MM:SS` string.
#[must_use]
pub fn duration_between(begin: &Timestamp, end: &Timestamp) -> String {
    format_seconds(end.total_seconds() - begin.total_seconds())
}
