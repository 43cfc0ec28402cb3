//! Exports a report as a Word, PDF or text document.
//!
//! The source is either a stored report (`--id`) or a text file together
//! with its date (`--file` and `--date`). Without `--output` the file goes
//! to the configured export directory, or the current directory, under its
//! suggested name.

use crate::{
    commands::{read_report_text, resolve_date},
    db::reports::Reports,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Id of a stored report
    #[arg(long, conflicts_with = "file")]
    id: Option<i64>,

    /// File holding report text that has not been stored
    #[arg(long, requires = "date")]
    file: Option<PathBuf>,

    /// Date of the report in --file
    #[arg(short, long)]
    date: Option<String>,

    #[arg(short, long, value_enum, default_value = "docx")]
    format: ExportFormat,

    /// Output file, or directory to place the suggested file name in
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let exporter = Exporter::new(args.format, config.author().map(str::to_string));

    let document = match (args.id, &args.file, &args.date) {
        (Some(id), _, _) => {
            let report = Reports::new()?.fetch(id)?.ok_or_else(|| msg_error_anyhow!(Message::ReportNotFound(id)))?;
            exporter.export_report(&report)
        }
        (None, Some(file), Some(date)) => {
            let date = resolve_date(date)?;
            let text = read_report_text(Some(file))?;
            exporter.export_text(&text, &date)
        }
        _ => msg_bail_anyhow!(Message::ExportSourceMissing),
    }
    .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;

    let path = match args.output {
        Some(output) if output.is_dir() => document.write_to_dir(&output),
        Some(output) => document.write_to(&output).map(|_| output),
        None => {
            let dir = config.output_dir().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
            document.write_to_dir(&dir)
        }
    }
    .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
