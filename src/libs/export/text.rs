use super::{ExportError, Painter};
use crate::libs::segment::Spacing;

/// Paints a report back into plain text, one output line per input line.
///
/// Styling is dropped, blank lines are kept. The result is what a reader
/// sees in the Word and PDF exports, which makes it the reference for
/// checking that export never adds, drops or reorders text.
#[derive(Debug, Default)]
pub struct TextPainter {
    out: String,
    line: String,
}

impl TextPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text painted so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }
}

impl Painter for TextPainter {
    fn begin_paragraph(&mut self, _spacing_before: Spacing, _indent_level: u8) {
        self.line.clear();
    }

    fn paint_bold(&mut self, text: &str) {
        self.line.push_str(text);
    }

    fn paint_plain(&mut self, text: &str) {
        self.line.push_str(text);
    }

    fn end_paragraph(&mut self, _spacing_after: Spacing) {
        self.out.push_str(&self.line);
        self.out.push('\n');
        self.line.clear();
    }

    fn advance_spacing(&mut self, _spacing: Spacing) {
        self.out.push('\n');
    }

    fn finish(self, _title: &str) -> Result<Vec<u8>, ExportError> {
        Ok(self.out.into_bytes())
    }
}
