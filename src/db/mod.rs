//! SQLite persistence.
//!
//! [`db::Db`] opens a connection and brings its schema up to date through
//! [`migrations`]; [`reports::Reports`] stores and queries daily reports.
//!
//! ```rust,no_run
//! use dayrep::db::reports::Reports;
//!
//! let mut reports = Reports::new()?;
//! for report in reports.fetch_all()? {
//!     println!("{} {}", report.report_date, report.preview());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod migrations;
pub mod reports;
