//! Daily report model and the fields derived from report text.
//!
//! `full_report` is the only source of truth. `activities` and `summary`
//! are read back out of it when a report is saved, so what is stored always
//! agrees with what gets exported.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::libs::classify::{classify, EN_DASH, SUMMARY_MARKER};
use crate::libs::dates::{parse_to_iso, DateError, IsoDate};

/// Clock time of the summary line. Fixed by the report convention.
pub const SUMMARY_TIME: &str = "06:00 PM";

/// Maximum preview length in characters, before the trailing ellipsis.
const PREVIEW_LEN: usize = 150;

/// The full summary header line, `06:00 PM – Summary of today`.
pub fn summary_line() -> String {
    format!("{} {} {}", SUMMARY_TIME, EN_DASH, SUMMARY_MARKER)
}

/// The title line of a report, e.g. `Daily Report – February 16, 2026`.
pub fn report_title(date: &IsoDate) -> String {
    format!("Daily Report {} {}", EN_DASH, date.to_display())
}

/// One time-stamped entry of a working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub description: String,
}

impl Activity {
    pub fn new(time: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            description: description.into(),
        }
    }

    /// True when either field is empty; such entries are never kept.
    pub fn is_blank(&self) -> bool {
        self.time.trim().is_empty() || self.description.trim().is_empty()
    }

    /// The activity as a report line, `09:30 AM – Fixed ticket X`.
    pub fn line(&self) -> String {
        format!("{} {} {}", self.time.trim(), EN_DASH, self.description.trim())
    }
}

/// Drops activities with a blank time or description.
pub fn retain_filled(activities: Vec<Activity>) -> Vec<Activity> {
    activities.into_iter().filter(|activity| !activity.is_blank()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: Option<i64>,
    pub report_date: IsoDate,
    pub activities: Vec<Activity>,
    pub summary: Option<String>,
    pub full_report: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Report {
    /// Builds an unsaved report from user input.
    ///
    /// The date is normalized strictly and is the only thing that can fail.
    /// When no filled-in activities are given they are extracted from the
    /// report text.
    pub fn from_submission(date: &str, activities: Vec<Activity>, full_report: impl Into<String>) -> Result<Self, DateError> {
        let report_date = parse_to_iso(date)?;
        let full_report = full_report.into();

        let mut activities = retain_filled(activities);
        if activities.is_empty() {
            activities = extract_activities(&full_report);
        }

        Ok(Self {
            id: None,
            report_date,
            activities,
            summary: extract_summary(&full_report),
            full_report,
            created_at: None,
        })
    }

    pub fn title(&self) -> String {
        report_title(&self.report_date)
    }

    /// A one-line teaser for report lists.
    ///
    /// The title is skipped; the next three non-blank lines are joined with
    /// `" | "`, cut to 150 characters and followed by `...`.
    pub fn preview(&self) -> String {
        let joined = self
            .full_report
            .lines()
            .filter(|line| !line.trim().is_empty())
            .skip(1)
            .take(3)
            .collect::<Vec<_>>()
            .join(" | ");
        let mut preview: String = joined.chars().take(PREVIEW_LEN).collect();
        preview.push_str("...");
        preview
    }
}

/// Everything after the summary header, trimmed.
///
/// Only the exact `06:00 PM – Summary of today` header is recognized.
/// Returns `None` when the header is missing or nothing follows it.
pub fn extract_summary(report_text: &str) -> Option<String> {
    let marker = summary_line();
    let start = report_text.find(&marker)? + marker.len();
    let summary = report_text[start..].trim();
    if summary.is_empty() {
        None
    } else {
        Some(summary.to_string())
    }
}

/// Timed lines that come before the summary header.
///
/// Only the exact `06:00 PM – Summary of today` header ends the activities,
/// so an activity that merely mentions the summary is still collected.
pub fn extract_activities(report_text: &str) -> Vec<Activity> {
    let marker = summary_line();
    report_text
        .lines()
        .take_while(|line| !line.contains(&marker))
        .map(classify)
        .filter_map(|line| line.split())
        .map(|split| Activity::new(split.time, split.description))
        .collect()
}
