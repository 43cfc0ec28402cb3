use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, LineSpacing, Paragraph, Run, RunFonts};

use super::{ExportError, Painter};
use crate::libs::segment::{Spacing, BODY_FONT, BODY_SIZE_PT};

/// Left indentation per indent level, in twips (half an inch).
const INDENT_TWIPS: i32 = 720;

/// Paints report segments as Word paragraphs and runs.
///
/// Blank lines have no paragraph of their own; their spacing is carried
/// over to the next paragraph's spacing-before, so an export of a report
/// made only of blank lines has no paragraphs at all.
#[derive(Default)]
pub struct DocxPainter {
    paragraphs: Vec<Paragraph>,
    runs: Vec<Run>,
    before: u32,
    pending: u32,
    indent: u8,
}

impl DocxPainter {
    pub fn new() -> Self {
        Self::default()
    }

    fn run(text: &str) -> Run {
        Run::new()
            .add_text(text)
            .size(BODY_SIZE_PT as usize * 2) // OOXML uses half-points
            .fonts(RunFonts::new().ascii(BODY_FONT).hi_ansi(BODY_FONT))
    }
}

impl Painter for DocxPainter {
    fn begin_paragraph(&mut self, spacing_before: Spacing, indent_level: u8) {
        self.runs.clear();
        self.before = spacing_before.twips() + std::mem::take(&mut self.pending);
        self.indent = indent_level;
    }

    fn paint_bold(&mut self, text: &str) {
        self.runs.push(Self::run(text).bold());
    }

    fn paint_plain(&mut self, text: &str) {
        self.runs.push(Self::run(text));
    }

    fn end_paragraph(&mut self, spacing_after: Spacing) {
        let mut paragraph = Paragraph::new()
            .align(AlignmentType::Left)
            .line_spacing(LineSpacing::new().before(self.before).after(spacing_after.twips()));
        if self.indent > 0 {
            paragraph = paragraph.indent(Some(INDENT_TWIPS * i32::from(self.indent)), None, None, None);
        }
        for run in self.runs.drain(..) {
            paragraph = paragraph.add_run(run);
        }
        self.paragraphs.push(paragraph);
    }

    fn advance_spacing(&mut self, spacing: Spacing) {
        self.pending += spacing.twips();
    }

    fn finish(self, _title: &str) -> Result<Vec<u8>, ExportError> {
        let docx = self
            .paragraphs
            .into_iter()
            .fold(Docx::new(), |docx, paragraph| docx.add_paragraph(paragraph));

        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).map_err(|e| ExportError::Docx(e.to_string()))?;

        Ok(buf.into_inner())
    }
}
