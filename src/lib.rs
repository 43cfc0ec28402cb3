//! # Dayrep - daily work reports
//!
//! A command-line utility for composing, storing and exporting daily work
//! reports. A report is plain text following a few line conventions:
//!
//! ```text
//! Daily Report – February 16, 2026
//!
//! 09:30 AM – Fixed ticket X
//! 06:00 PM – Summary of today
//! - Solved ticket X
//! ```
//!
//! The text is the single source of truth. On export every line is
//! classified ([`libs::classify`]), turned into styled segments
//! ([`libs::segment`]) and painted into a Word, PDF or text document
//! ([`libs::export`]). Dates are stored as ISO and normalized at the edges
//! ([`libs::dates`]).
//!
//! ## Usage
//!
//! ```rust
//! use dayrep::libs::export::{export, ExportFormat};
//!
//! let pdf = export("Daily Report – February 16, 2026\n", "Daily Report – February 16, 2026", ExportFormat::Pdf)?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok::<(), dayrep::libs::export::ExportError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
