//! Stores a composed report.
//!
//! The text is read from `--file` or stdin. Activities given with `-a`
//! take precedence; otherwise they are extracted from the text, as is the
//! summary.

use crate::{
    commands::{parse_activities, read_report_text, resolve_date},
    db::reports::Reports,
    libs::{clock::Period, messages::Message, report::Report},
    msg_bail_anyhow, msg_error_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[arg(short, long, default_value = "today")]
    date: String,

    /// File holding the report text; stdin is read when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Replace the stored report with this id instead of adding a new one
    #[arg(long)]
    id: Option<i64>,

    /// Activity as TIME=DESCRIPTION; repeatable
    #[arg(short, long = "activity")]
    activities: Vec<String>,

    #[arg(short, long, value_enum, default_value = "am")]
    period: Period,
}

pub fn cmd(args: SaveArgs) -> Result<()> {
    let date = resolve_date(&args.date)?;
    let activities = parse_activities(&args.activities, args.period)?;

    let text = read_report_text(args.file.as_deref())?;
    if text.trim().is_empty() {
        msg_bail_anyhow!(Message::ReportEmpty);
    }

    let report = Report::from_submission(&date.to_string(), activities, text)
        .map_err(|e| msg_error_anyhow!(Message::InvalidDate(e.to_string())))?;
    if report.summary.is_none() {
        msg_warning!(Message::ReportSummaryMissing);
    }

    let mut reports = Reports::new()?;
    match args.id {
        Some(id) => {
            if !reports.update(id, &report)? {
                msg_bail_anyhow!(Message::ReportNotFound(id));
            }
            msg_success!(Message::ReportUpdated(id));
        }
        None => {
            let id = reports.insert(&report)?;
            msg_success!(Message::ReportSaved(id));
        }
    }
    Ok(())
}
