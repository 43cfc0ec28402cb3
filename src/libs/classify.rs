//! Line classification for daily report text.
//!
//! A report is a plain-text memo with a small set of line conventions:
//!
//! ```text
//! Daily Report – February 16, 2026
//!
//! 09:30 AM – Fixed ticket X
//! 01:15 PM – Call with support about ticket Y
//! 06:00 PM – Summary of today
//! - Solved ticket X
//! - Discussed ticket Y with support
//! ```
//!
//! [`classify`] assigns every line a [`LineKind`]. Classification is total:
//! a line that fits no convention becomes [`LineKind::Plain`], and a timed
//! line whose time/description split fails keeps its kind but loses the
//! split, so its text is still rendered in full.
//!
//! The separator between a timestamp and its description is the en dash
//! (`–`, U+2013). The hyphen-minus is reserved for bullets.

use once_cell::sync::Lazy;
use regex::Regex;

/// The dash separating a timestamp from its description.
pub const EN_DASH: char = '\u{2013}';

/// Title lines start with this prefix.
pub const TITLE_PREFIX: &str = "Daily Report";

/// Any line containing this marker is the summary header.
pub const SUMMARY_MARKER: &str = "Summary of today";

/// Bullet lines start with this prefix.
pub const BULLET_PREFIX: char = '-';

static TIMED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2} [AP]M\s*–").unwrap());
static TIME_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{2}:\d{2} [AP]M)(\s*–\s*)(.+)$").unwrap());

/// A timestamp/description pair cut out of a timed line.
///
/// `separator` is the exact text between the two parts as it appears in the
/// source, so `time + separator + description` always reproduces the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSplit<'a> {
    pub time: &'a str,
    pub separator: &'a str,
    pub description: &'a str,
}

impl<'a> TimeSplit<'a> {
    /// The bold lead-in of a timed line, e.g. `"09:30 AM – "`.
    pub fn lead(&self) -> String {
        format!("{}{}", self.time, self.separator)
    }
}

/// Semantic kind of one report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Title,
    SummaryHeader(Option<TimeSplit<'a>>),
    Bullet,
    TimedActivity(Option<TimeSplit<'a>>),
    Plain,
    Blank,
}

/// A line together with its kind. Borrowed from the input, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind<'a>,
    /// The trimmed line text.
    pub text: &'a str,
}

impl<'a> ClassifiedLine<'a> {
    pub fn split(&self) -> Option<TimeSplit<'a>> {
        match self.kind {
            LineKind::SummaryHeader(split) | LineKind::TimedActivity(split) => split,
            _ => None,
        }
    }

    /// The timestamp of a successfully split timed or summary line.
    pub fn time(&self) -> Option<&'a str> {
        self.split().map(|split| split.time)
    }

    /// The description of a successfully split timed or summary line.
    pub fn description(&self) -> Option<&'a str> {
        self.split().map(|split| split.description)
    }

    pub fn is_title(&self) -> bool {
        matches!(self.kind, LineKind::Title)
    }

    pub fn is_summary_header(&self) -> bool {
        matches!(self.kind, LineKind::SummaryHeader(_))
    }

    pub fn is_timed_activity(&self) -> bool {
        matches!(self.kind, LineKind::TimedActivity(_))
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self.kind, LineKind::Bullet)
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, LineKind::Plain)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }
}

/// Splits `HH:MM AM – description` into its parts.
///
/// Shared by summary headers and timed activities so both degrade the same
/// way. Returns `None` when the line does not have the full shape, for
/// example when nothing follows the dash.
pub fn split_time(line: &str) -> Option<TimeSplit<'_>> {
    let caps = TIME_SPLIT.captures(line)?;
    Some(TimeSplit {
        time: caps.get(1)?.as_str(),
        separator: caps.get(2)?.as_str(),
        description: caps.get(3)?.as_str(),
    })
}

/// Classifies a single line of report text.
///
/// Rules are checked in a fixed order because several patterns are prefixes
/// of each other (a summary header is also a timed line, a bullet may
/// mention the summary marker):
///
/// 1. empty or whitespace-only → [`LineKind::Blank`]
/// 2. starts with `Daily Report` → [`LineKind::Title`]
/// 3. contains `Summary of today` → [`LineKind::SummaryHeader`]
/// 4. starts with `-` → [`LineKind::Bullet`]
/// 5. starts with `HH:MM AM –` → [`LineKind::TimedActivity`]
/// 6. anything else → [`LineKind::Plain`]
///
/// ```rust
/// use dayrep::libs::classify::{classify, LineKind};
///
/// let line = classify("09:30 AM – Fixed ticket X");
/// assert!(line.is_timed_activity());
/// assert_eq!(line.time(), Some("09:30 AM"));
/// assert_eq!(line.description(), Some("Fixed ticket X"));
///
/// assert_eq!(classify("   ").kind, LineKind::Blank);
/// ```
pub fn classify(line: &str) -> ClassifiedLine<'_> {
    let text = line.trim();

    let kind = if text.is_empty() {
        LineKind::Blank
    } else if text.starts_with(TITLE_PREFIX) {
        LineKind::Title
    } else if text.contains(SUMMARY_MARKER) {
        LineKind::SummaryHeader(split_or_degrade(text))
    } else if text.starts_with(BULLET_PREFIX) {
        LineKind::Bullet
    } else if TIMED_LINE.is_match(text) {
        LineKind::TimedActivity(split_or_degrade(text))
    } else {
        LineKind::Plain
    };

    ClassifiedLine { kind, text }
}

fn split_or_degrade(text: &str) -> Option<TimeSplit<'_>> {
    let split = split_time(text);
    if split.is_none() {
        tracing::debug!(line = text, "timed line did not split, keeping it as a single run");
    }
    split
}

/// Classifies every line of a report in input order.
pub fn classify_report(report: &str) -> Vec<ClassifiedLine<'_>> {
    report.lines().map(classify).collect()
}
