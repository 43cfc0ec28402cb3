//! Report export to Word, PDF and plain text.
//!
//! Every format goes through the same one-pass pipeline:
//!
//! ```text
//! full_report ─ lines ─ classify ─ render ─ paint ─ bytes
//! ```
//!
//! Classification and rendering live in [`crate::libs::classify`] and
//! [`crate::libs::segment`]. A format only implements [`Painter`], which
//! receives the rendered segments in input order and packs them into its
//! native container.
//!
//! ## Usage
//!
//! ```rust
//! use dayrep::libs::export::{export, ExportFormat};
//!
//! let report = "Daily Report – February 16, 2026\n\n09:30 AM – Fixed ticket X\n";
//! let bytes = export(report, "Daily Report – February 16, 2026", ExportFormat::Txt)?;
//! assert_eq!(String::from_utf8(bytes).unwrap(), report);
//! # Ok::<(), dayrep::libs::export::ExportError>(())
//! ```

pub mod docx;
pub mod error;
pub mod pdf;
pub mod text;

pub use docx::DocxPainter;
pub use error::ExportError;
pub use pdf::PdfPainter;
pub use text::TextPainter;

use std::fs;
use std::path::{Path, PathBuf};

use crate::libs::dates::IsoDate;
use crate::libs::report::Report;
use crate::libs::segment::{render_report, Rendered, Spacing};

/// A document builder fed with rendered segments.
///
/// Calls arrive in input order. Each non-blank line produces one
/// `begin_paragraph`, one `paint_*` call per segment and one
/// `end_paragraph`; each blank line produces one `advance_spacing`.
pub trait Painter {
    fn begin_paragraph(&mut self, spacing_before: Spacing, indent_level: u8);
    fn paint_bold(&mut self, text: &str);
    fn paint_plain(&mut self, text: &str);
    fn end_paragraph(&mut self, spacing_after: Spacing);
    fn advance_spacing(&mut self, spacing: Spacing);

    /// Packs everything painted so far into the format's binary container.
    fn finish(self, title: &str) -> Result<Vec<u8>, ExportError>
    where
        Self: Sized;
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Microsoft Word document.
    #[default]
    Docx,
    /// PDF document, A4.
    Pdf,
    /// Plain UTF-8 text.
    Txt,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Txt => "txt",
        }
    }

    /// MIME type for serving the exported bytes.
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Txt => "text/plain; charset=utf-8",
        }
    }
}

/// Counts of what a paint pass produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintStats {
    pub paragraphs: usize,
    pub segments: usize,
    pub advances: usize,
}

/// Drives `painter` through a report, line by line.
pub fn paint<P: Painter>(report_text: &str, painter: &mut P) -> PaintStats {
    let mut stats = PaintStats::default();

    for rendered in render_report(report_text) {
        match rendered {
            Rendered::Advance(spacing) => {
                painter.advance_spacing(spacing);
                stats.advances += 1;
            }
            Rendered::Paragraph(segments) => {
                // Segments of one line share their paragraph layout.
                let Some(first) = segments.first() else { continue };
                let (before, after, indent) = (first.spacing_before, first.spacing_after, first.indent_level);

                painter.begin_paragraph(before, indent);
                for segment in &segments {
                    if segment.bold {
                        painter.paint_bold(&segment.text);
                    } else {
                        painter.paint_plain(&segment.text);
                    }
                }
                painter.end_paragraph(after);

                stats.paragraphs += 1;
                stats.segments += segments.len();
            }
        }
    }

    stats
}

fn paint_with<P: Painter>(report_text: &str, title: &str, mut painter: P, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let stats = paint(report_text, &mut painter);
    let bytes = painter.finish(title)?;
    tracing::debug!(
        format = format.extension(),
        paragraphs = stats.paragraphs,
        segments = stats.segments,
        advances = stats.advances,
        bytes = bytes.len(),
        "report exported"
    );
    Ok(bytes)
}

/// Exports report text into `format`.
///
/// The report is transcribed as-is: no line is added, dropped or
/// reordered. An empty report yields a valid document without paragraphs.
pub fn export(report_text: &str, title: &str, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Docx => paint_with(report_text, title, DocxPainter::new(), format),
        ExportFormat::Pdf => paint_with(report_text, title, PdfPainter::new(), format),
        ExportFormat::Txt => paint_with(report_text, title, TextPainter::new(), format),
    }
}

/// Suggested file name, e.g. `Daily Report Jane 16_02_26.docx`.
///
/// Without an author the name part is left out: `Daily Report 16_02_26.pdf`.
pub fn export_filename(author: Option<&str>, date: &IsoDate, format: ExportFormat) -> String {
    let fragment = date.filename_fragment();
    match author.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Daily Report {} {}.{}", name, fragment, format.extension()),
        None => format!("Daily Report {}.{}", fragment, format.extension()),
    }
}

/// An exported report ready to be written or served.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
}

impl ExportedDocument {
    /// Writes the document into `dir` under its suggested file name.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        self.write_to(&path)?;
        Ok(path)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Exports stored reports in one format, naming files after an author.
#[derive(Debug, Clone)]
pub struct Exporter {
    format: ExportFormat,
    author: Option<String>,
}

impl Exporter {
    pub fn new(format: ExportFormat, author: Option<String>) -> Self {
        Self { format, author }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Exports `report`, titled after its date.
    pub fn export_report(&self, report: &Report) -> Result<ExportedDocument, ExportError> {
        self.export_text(&report.full_report, &report.report_date)
    }

    /// Exports report text that has not been stored.
    pub fn export_text(&self, report_text: &str, date: &IsoDate) -> Result<ExportedDocument, ExportError> {
        let title = crate::libs::report::report_title(date);
        let bytes = export(report_text, &title, self.format)?;
        Ok(ExportedDocument {
            bytes,
            filename: export_filename(self.author.as_deref(), date, self.format),
            content_type: self.format.content_type(),
        })
    }
}
