//! PDF painter built directly on `lopdf` objects.
//!
//! Text is set in the standard Times base fonts with WinAnsi encoding, so
//! no font program is embedded and the en dash survives as a real dash.
//! Line breaking uses approximate Times metrics; the goal is a readable
//! memo, not typographic precision.

use encoding_rs::WINDOWS_1252;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::{ExportError, Painter};
use crate::libs::segment::{Spacing, BODY_SIZE_PT};

/// A4 in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 72;
const INDENT_PT: i64 = 20;
const LINE_HEIGHT: f32 = BODY_SIZE_PT as f32 * 1.15;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

type Run = (bool, String);

#[derive(Debug)]
struct PlacedLine {
    x: i64,
    y: i64,
    runs: Vec<Run>,
}

/// Paints report segments onto A4 pages.
#[derive(Debug)]
pub struct PdfPainter {
    pages: Vec<Vec<PlacedLine>>,
    cursor: f32,
    runs: Vec<Run>,
    indent: u8,
}

impl Default for PdfPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfPainter {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            cursor: (PAGE_HEIGHT - MARGIN) as f32,
            runs: Vec::new(),
            indent: 0,
        }
    }

    fn move_down(&mut self, spacing: Spacing) {
        self.cursor -= spacing.lines() * LINE_HEIGHT;
    }

    fn place(&mut self, x: i64, runs: Vec<Run>) {
        if self.cursor - LINE_HEIGHT < MARGIN as f32 {
            self.pages.push(Vec::new());
            self.cursor = (PAGE_HEIGHT - MARGIN) as f32;
        }
        let y = (self.cursor - BODY_SIZE_PT as f32).round() as i64;
        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine { x, y, runs });
        }
        self.cursor -= LINE_HEIGHT;
    }
}

impl Painter for PdfPainter {
    fn begin_paragraph(&mut self, spacing_before: Spacing, indent_level: u8) {
        self.runs.clear();
        self.indent = indent_level;
        self.move_down(spacing_before);
    }

    fn paint_bold(&mut self, text: &str) {
        self.runs.push((true, text.to_string()));
    }

    fn paint_plain(&mut self, text: &str) {
        self.runs.push((false, text.to_string()));
    }

    fn end_paragraph(&mut self, spacing_after: Spacing) {
        let indent = INDENT_PT * i64::from(self.indent);
        let max_width = (PAGE_WIDTH - 2 * MARGIN - indent) as f32;
        let runs = std::mem::take(&mut self.runs);
        for line in wrap(&runs, max_width) {
            self.place(MARGIN + indent, line);
        }
        self.move_down(spacing_after);
    }

    fn advance_spacing(&mut self, spacing: Spacing) {
        self.move_down(spacing);
    }

    fn finish(self, title: &str) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(base_font("Times-Roman"));
        let bold_id = doc.add_object(base_font("Times-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for lines in &self.pages {
            let content = page_content(lines);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![0i64.into(), 0i64.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => text_string(title),
            "Producer" => text_string("dayrep"),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf)?;
        Ok(buf)
    }
}

fn base_font(name: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => name,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn page_content(lines: &[PlacedLine]) -> Content {
    let mut operations = Vec::new();
    for line in lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Td", vec![line.x.into(), line.y.into()]));
        for (bold, text) in &line.runs {
            let font = if *bold { BOLD_FONT } else { REGULAR_FONT };
            operations.push(Operation::new("Tf", vec![font.into(), i64::from(BODY_SIZE_PT).into()]));
            operations.push(Operation::new("Tj", vec![Object::String(win_ansi(text), StringFormat::Literal)]));
        }
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

/// Encodes text for the WinAnsi base fonts; unmappable characters become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let (bytes, _, unmappable) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
        if unmappable {
            tracing::debug!(character = %ch, "no WinAnsi glyph, replaced with '?'");
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

/// A PDF text string in UTF-16BE with byte order mark.
fn text_string(text: &str) -> Object {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Approximate advance width of `text` in points.
fn text_width(text: &str, bold: bool) -> f32 {
    let em: f32 = text
        .chars()
        .map(|ch| match ch {
            ' ' | '.' | ',' | ':' | ';' | '\'' => 0.25,
            'i' | 'j' | 'l' | 'I' | '!' | '|' => 0.28,
            'f' | 't' | 'r' | '-' | '(' | ')' => 0.33,
            'm' | 'M' | 'W' => 0.85,
            'w' => 0.72,
            '0'..='9' | '–' => 0.5,
            c if c.is_uppercase() => 0.68,
            _ => 0.48,
        })
        .sum();
    let factor = if bold { 1.05 } else { 1.0 };
    em * BODY_SIZE_PT as f32 * factor
}

/// Breaks styled runs into lines no wider than `max_width`.
///
/// Breaks only at spaces; a single word wider than the line is kept whole.
fn wrap(runs: &[Run], max_width: f32) -> Vec<Vec<Run>> {
    let mut lines = Vec::new();
    let mut line: Vec<Run> = Vec::new();
    let mut width = 0.0;

    for (bold, text) in runs {
        for word in text.split_inclusive(' ') {
            let word_width = text_width(word, *bold);
            if !line.is_empty() && width + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                width = 0.0;
            }
            match line.last_mut() {
                Some((last_bold, last)) if last_bold == bold => last.push_str(word),
                _ => line.push((*bold, word.to_string())),
            }
            width += word_width;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
