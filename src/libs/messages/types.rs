/// Every user-facing message of the application.
///
/// Text lives in one place, the `Display` impl in `display.rs`; call sites
/// only pick a variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigParseError(String),
    ConfigSaveError(String),
    ConfigPath(String),
    PromptAuthor,
    PromptOutputDir,

    // === DATE MESSAGES ===
    DateIso(String),
    DateDisplay(String),
    InvalidDate(String),

    // === ACTIVITY MESSAGES ===
    InvalidActivity(String),
    InvalidClock(String),
    NoActivities,

    // === REPORT MESSAGES ===
    ReportSaved(i64),
    ReportUpdated(i64),
    ReportNotFound(i64),
    ReportDeleted(i64),
    ReportEmpty,
    ReportReadFailed(String, String), // source, error
    ReportSummaryMissing,
    ReportsHeader,
    NoReportsFound,
    ConfirmDeleteReport(i64, String), // id, date
    OperationCancelled,

    // === PROMPT MESSAGES ===
    PromptSystemHeader,
    PromptUserHeader,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportFailed(String),
    ExportSourceMissing,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    MigrationsCompleted(u32),
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
