//! Calendar date normalization between ISO storage form and human spellings.
//!
//! Report dates travel through the application in exactly one canonical
//! form, `YYYY-MM-DD`. Human-readable spellings exist only at the edges:
//! they are normalized on the way in and formatted on the way out.
//!
//! ## Recognized input shapes
//!
//! Tried in order, first match wins:
//!
//! 1. `2026-02-16` (ISO, single-digit month and day are zero-padded)
//! 2. `16 February 2026` / `16 Feb 2026`
//! 3. `February 16, 2026` / `Feb 16 2026`
//!
//! Month names are case-insensitive, either in full or as a three-letter
//! abbreviation (`sept` is accepted as well). Purely numeric forms such as
//! `02/16/2026` are rejected instead of guessed.
//!
//! ## Timezones
//!
//! All arithmetic is done on explicit year/month/day fields held in a
//! [`chrono::NaiveDate`]. Nothing here is ever anchored to a local midnight,
//! so the day stored is always the day displayed.
//!
//! ## Usage
//!
//! ```rust
//! use dayrep::libs::dates::{format_for_display, normalize_for_storage};
//!
//! assert_eq!(normalize_for_storage("Feb 16, 2026").unwrap(), "2026-02-16");
//! assert_eq!(format_for_display("2026-02-16"), "February 16, 2026");
//! assert_eq!(format_for_display("not a date"), "not a date");
//! ```

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Earliest year accepted for a report date.
pub const MIN_YEAR: i32 = 1900;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static ISO_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap());
static ISO_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").unwrap());
static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(\d{1,2})\s+([a-z]+)\s+(\d{4})$").unwrap());
static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([a-z]+)\s+(\d{1,2}),?\s+(\d{4})$").unwrap());

/// Errors produced while normalizing a date for storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date format: \"{0}\". Expected format: \"February 16, 2026\" or \"16 February 2026\"")]
    InvalidDateFormat(String),
}

/// A timezone-free calendar date that always renders as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(NaiveDate);

impl IsoDate {
    /// Builds a date from explicit fields, enforcing the accepted year range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Renders the date as `Month D, YYYY`.
    pub fn to_display(&self) -> String {
        format!("{} {}, {}", MONTH_NAMES[self.month() as usize - 1], self.day(), self.year())
    }

    /// The `dd_mm_yy` fragment used in export filenames.
    ///
    /// ```rust
    /// use dayrep::libs::dates::IsoDate;
    ///
    /// let date = IsoDate::from_ymd(2026, 2, 16).unwrap();
    /// assert_eq!(date.filename_fragment(), "16_02_26");
    /// ```
    pub fn filename_fragment(&self) -> String {
        format!("{:02}_{:02}_{:02}", self.day(), self.month(), self.year() % 100)
    }
}

impl From<NaiveDate> for IsoDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for IsoDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_to_iso(s)
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_to_iso(&raw).map_err(serde::de::Error::custom)
    }
}

/// Looks up a month by its full English name or accepted abbreviation.
pub fn month_from_name(name: &str) -> Option<u32> {
    let month = match name.to_ascii_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parses any recognized date spelling into a canonical [`IsoDate`].
///
/// The three shapes are tried in a fixed order and the first one that both
/// matches and yields a real calendar date wins. Anything else fails with
/// [`DateError::InvalidDateFormat`] carrying the trimmed input.
pub fn parse_to_iso(input: &str) -> Result<IsoDate, DateError> {
    let cleaned = input.trim();

    let iso = ISO_SHAPE
        .captures(cleaned)
        .and_then(|caps| fields_to_date(&caps[1], caps[2].parse().ok()?, &caps[3]));
    let day_first = || {
        DAY_MONTH_YEAR
            .captures(cleaned)
            .and_then(|caps| fields_to_date(&caps[3], month_from_name(&caps[2])?, &caps[1]))
    };
    let month_first = || {
        MONTH_DAY_YEAR
            .captures(cleaned)
            .and_then(|caps| fields_to_date(&caps[3], month_from_name(&caps[1])?, &caps[2]))
    };

    if let Some(date) = iso.or_else(day_first).or_else(month_first) {
        return Ok(date);
    }

    tracing::debug!(input = cleaned, "unrecognized date format");
    Err(DateError::InvalidDateFormat(cleaned.to_string()))
}

fn fields_to_date(year: &str, month: u32, day: &str) -> Option<IsoDate> {
    let year = year.parse::<i32>().ok()?;
    let day = day.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    IsoDate::from_ymd(year, month, day)
}

/// Formats a stored ISO date as `Month D, YYYY` without any timezone shift.
///
/// Only the leading `YYYY-MM-DD` is inspected, so full timestamps are
/// accepted as well. Input that does not start with a valid date is returned
/// unchanged.
pub fn format_from_iso(iso: &str) -> String {
    let Some(caps) = ISO_PREFIX.captures(iso) else {
        tracing::debug!(input = iso, "not an ISO date, leaving as is");
        return iso.to_string();
    };
    caps[2]
        .parse()
        .ok()
        .and_then(|month| fields_to_date(&caps[1], month, &caps[3]))
        .map(|date| date.to_display())
        .unwrap_or_else(|| iso.to_string())
}

/// Strict entry point used before anything is written to storage.
pub fn normalize_for_storage(input: &str) -> Result<String, DateError> {
    parse_to_iso(input).map(|date| date.to_string())
}

/// Lenient entry point used for display; never fails.
pub fn format_for_display(iso: &str) -> String {
    format_from_iso(iso)
}

/// Returns true when `input` is in one of the recognized shapes.
pub fn is_valid_date(input: &str) -> bool {
    parse_to_iso(input).is_ok()
}

/// Today's local calendar date, with no time of day attached.
pub fn today() -> IsoDate {
    IsoDate(Local::now().date_naive())
}
