//! Command-line interface.
//!
//! Each subcommand lives in its own module exposing an `Args` struct and a
//! `cmd` function. Helpers shared by several commands are kept here.

pub mod date;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod migrations;
pub mod prompt;
pub mod save;
pub mod show;

use crate::libs::clock::{normalize_clock, Period};
use crate::libs::dates::{parse_to_iso, today, IsoDate};
use crate::libs::messages::Message;
use crate::libs::report::Activity;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure author name and export directory")]
    Init(init::InitArgs),
    #[command(about = "Normalize a date to its ISO and display forms", arg_required_else_help = true)]
    Date(date::DateArgs),
    #[command(about = "Print the composition prompt for a day of activities", arg_required_else_help = true)]
    Prompt(prompt::PromptArgs),
    #[command(about = "Store a daily report", arg_required_else_help = true)]
    Save(save::SaveArgs),
    #[command(about = "List stored reports")]
    List,
    #[command(about = "Show a stored report", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Delete a stored report", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Export a report as Word, PDF or text", arg_required_else_help = true)]
    Export(export::ExportArgs),
    #[command(about = "Inspect the database schema version")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Date(args) => date::cmd(args),
            Commands::Prompt(args) => prompt::cmd(args),
            Commands::Save(args) => save::cmd(args),
            Commands::List => list::cmd(),
            Commands::Show(args) => show::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Parses a date argument; `today` is accepted besides the usual spellings.
pub fn resolve_date(input: &str) -> Result<IsoDate> {
    if input.trim().eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_to_iso(input).map_err(|e| msg_error_anyhow!(Message::InvalidDate(e.to_string())))
}

/// Parses a `TIME=DESCRIPTION` activity argument, normalizing the time.
///
/// ```rust
/// use dayrep::commands::parse_activity;
/// use dayrep::libs::clock::Period;
///
/// let activity = parse_activity("930=Fixed ticket X", Period::Am).unwrap();
/// assert_eq!(activity.time, "09:30 AM");
/// assert_eq!(activity.description, "Fixed ticket X");
/// ```
pub fn parse_activity(raw: &str, default_period: Period) -> Result<Activity> {
    let (time, description) = raw.split_once('=').ok_or_else(|| msg_error_anyhow!(Message::InvalidActivity(raw.to_string())))?;
    let time = normalize_clock(time, default_period).ok_or_else(|| msg_error_anyhow!(Message::InvalidClock(time.to_string())))?;
    Ok(Activity::new(time, description.trim()))
}

pub fn parse_activities(raw: &[String], default_period: Period) -> Result<Vec<Activity>> {
    raw.iter().map(|arg| parse_activity(arg, default_period)).collect()
}

/// Report text from a file, or from stdin when no file is given.
pub fn read_report_text(file: Option<&Path>) -> Result<String> {
    let (source, text) = match file {
        Some(path) => (path.display().to_string(), fs::read_to_string(path)),
        None => {
            let mut buf = String::new();
            ("stdin".to_string(), io::stdin().read_to_string(&mut buf).map(|_| buf))
        }
    };
    text.map_err(|e| msg_error_anyhow!(Message::ReportReadFailed(source, e.to_string())))
}
