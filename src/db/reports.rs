use crate::db::db::Db;
use crate::libs::dates::parse_to_iso;
use crate::libs::report::{Activity, Report};
use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const INSERT_REPORT: &str = "INSERT INTO daily_reports (report_date, activities, summary, full_report) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_REPORT: &str = "UPDATE daily_reports SET report_date = ?2, activities = ?3, summary = ?4, full_report = ?5 WHERE id = ?1";
const DELETE_REPORT: &str = "DELETE FROM daily_reports WHERE id = ?1";
const SELECT_REPORT_BY_ID: &str = "SELECT id, report_date, activities, summary, full_report, created_at FROM daily_reports WHERE id = ?1";
const SELECT_ALL_REPORTS: &str = "SELECT id, report_date, activities, summary, full_report, created_at FROM daily_reports
    ORDER BY report_date DESC, created_at DESC, id DESC";
const SELECT_REPORTS_BY_DATE: &str = "SELECT id, report_date, activities, summary, full_report, created_at FROM daily_reports
    WHERE report_date = ?1 ORDER BY created_at DESC, id DESC";

/// Stored daily reports.
pub struct Reports {
    conn: Connection,
}

impl Reports {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Reports stored in an explicit database file.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self { conn: db.conn })
    }

    /// Stores a new report and returns its id.
    pub fn insert(&mut self, report: &Report) -> Result<i64> {
        let activities = serde_json::to_string(&report.activities)?;
        self.conn.execute(
            INSERT_REPORT,
            params![report.report_date.to_string(), activities, report.summary, report.full_report],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, date = %report.report_date, "report stored");
        Ok(id)
    }

    /// Replaces the content of report `id`. Returns false when it does not exist.
    pub fn update(&mut self, id: i64, report: &Report) -> Result<bool> {
        let activities = serde_json::to_string(&report.activities)?;
        let affected = self.conn.execute(
            UPDATE_REPORT,
            params![id, report.report_date.to_string(), activities, report.summary, report.full_report],
        )?;
        if affected > 0 {
            tracing::info!(id, date = %report.report_date, "report updated");
        }
        Ok(affected > 0)
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<Report>> {
        self.conn.query_row(SELECT_REPORT_BY_ID, params![id], map_report).optional().map_err(Into::into)
    }

    /// All reports, newest report date first.
    pub fn fetch_all(&mut self) -> Result<Vec<Report>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_REPORTS)?;
        let reports = stmt.query_map([], map_report)?.collect::<Result<Vec<_>, _>>()?;
        Ok(reports)
    }

    /// Reports for one ISO date, newest first.
    pub fn fetch_by_date(&mut self, date: &str) -> Result<Vec<Report>> {
        let mut stmt = self.conn.prepare(SELECT_REPORTS_BY_DATE)?;
        let reports = stmt.query_map(params![date], map_report)?.collect::<Result<Vec<_>, _>>()?;
        Ok(reports)
    }

    /// Removes report `id`. Returns false when it does not exist.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_REPORT, params![id])?;
        if affected > 0 {
            tracing::info!(id, "report deleted");
        }
        Ok(affected > 0)
    }
}

fn map_report(row: &Row<'_>) -> rusqlite::Result<Report> {
    let raw_date: String = row.get(1)?;
    let report_date = parse_to_iso(&raw_date).map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    let raw_activities: String = row.get(2)?;
    let activities: Vec<Activity> =
        serde_json::from_str(&raw_activities).map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(Report {
        id: Some(row.get(0)?),
        report_date,
        activities,
        summary: row.get(3)?,
        full_report: row.get(4)?,
        created_at: row.get(5)?,
    })
}
