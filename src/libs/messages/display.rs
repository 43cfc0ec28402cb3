//! Text of every [`Message`].
//!
//! ```rust
//! use dayrep::libs::messages::Message;
//!
//! assert_eq!(Message::ReportSaved(3).to_string(), "Report #3 saved");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration found, nothing to delete".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigSaveError(error) => format!("Failed to save configuration: {}", error),
            Message::ConfigPath(path) => format!("Configuration file: {}", path),
            Message::PromptAuthor => "Your name, as used in export file names".to_string(),
            Message::PromptOutputDir => "Default directory for exported reports".to_string(),

            // === DATE MESSAGES ===
            Message::DateIso(date) => format!("ISO:     {}", date),
            Message::DateDisplay(date) => format!("Display: {}", date),
            Message::InvalidDate(error) => error.to_string(),

            // === ACTIVITY MESSAGES ===
            Message::InvalidActivity(raw) => {
                format!("Invalid activity \"{}\". Expected TIME=DESCRIPTION, e.g. \"930=Fixed ticket X\"", raw)
            }
            Message::InvalidClock(raw) => format!("Invalid time \"{}\". Use digits such as 9, 930 or 14:30", raw),
            Message::NoActivities => "At least one activity with a time and a description is required".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportSaved(id) => format!("Report #{} saved", id),
            Message::ReportUpdated(id) => format!("Report #{} updated", id),
            Message::ReportNotFound(id) => format!("Report #{} not found", id),
            Message::ReportDeleted(id) => format!("Report #{} deleted", id),
            Message::ReportEmpty => "Report text is empty".to_string(),
            Message::ReportReadFailed(source, error) => format!("Failed to read report from {}: {}", source, error),
            Message::ReportSummaryMissing => "No \"06:00 PM – Summary of today\" section found, saving without summary".to_string(),
            Message::ReportsHeader => "Daily reports:".to_string(),
            Message::NoReportsFound => "No reports found".to_string(),
            Message::ConfirmDeleteReport(id, date) => format!("Delete report #{} for {}?", id, date),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptSystemHeader => "--- system ---".to_string(),
            Message::PromptUserHeader => "--- user ---".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Report exported to {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),
            Message::ExportSourceMissing => "Pass --id, or --file together with --date".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::MigrationsCompleted(version) => format!("Database migrated to v{}", version),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
