//! Clock-time normalization for activity entry.
//!
//! Activity times are typed quickly and loosely (`930`, `9:30pm`, `14`),
//! but reports always show them as `HH:MM AM`. Only the digits matter:
//!
//! | input  | clock |
//! |--------|-------|
//! | `9`    | 09:00 |
//! | `12`   | 12:00 |
//! | `930`  | 09:30 |
//! | `0225` | 02:25 |
//! | `1430` | 14:30 |
//!
//! Hours above 23 are clamped to 23 and minutes above 59 to 59. The period
//! is taken from the input when present, otherwise from the caller.

use std::fmt;

/// Half of the day a clock time belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Period {
    #[default]
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

/// Normalizes a loosely typed clock time into `HH:MM AM|PM`.
///
/// Returns `None` when the input holds no digits at all.
///
/// ```rust
/// use dayrep::libs::clock::{normalize_clock, Period};
///
/// assert_eq!(normalize_clock("930", Period::Am).as_deref(), Some("09:30 AM"));
/// assert_eq!(normalize_clock("1:15 pm", Period::Am).as_deref(), Some("01:15 PM"));
/// assert_eq!(normalize_clock("", Period::Am), None);
/// ```
pub fn normalize_clock(input: &str, default_period: Period) -> Option<String> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    let period = if lower.ends_with("pm") || lower.ends_with('p') {
        Period::Pm
    } else if lower.ends_with("am") || lower.ends_with('a') {
        Period::Am
    } else {
        default_period
    };

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let (hours, minutes) = match digits.len() {
        0 => return None,
        1 | 2 => (&digits[..], "0"),
        3 => (&digits[..1], &digits[1..3]),
        _ => (&digits[..2], &digits[2..4]),
    };

    let hours = hours.parse::<u32>().ok()?.min(23);
    let minutes = minutes.parse::<u32>().ok()?.min(59);

    Some(format!("{:02}:{:02} {}", hours, minutes, period))
}
