//! Format-agnostic rendering of classified lines into styled segments.
//!
//! Every export target shares these rules; only the paint step differs.
//! A report is meant to look like a typed memo, so all text uses one
//! typeface at one size. Only weight, spacing and indentation vary.

use super::classify::{ClassifiedLine, LineKind, TimeSplit};

/// The single typeface used by every export target.
pub const BODY_FONT: &str = "Times New Roman";

/// Body text size in points.
pub const BODY_SIZE_PT: u32 = 12;

/// Vertical space between paragraphs, independent of the output format.
///
/// Painters translate these into their native units (twips for Word,
/// points for PDF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Spacing {
    #[default]
    None,
    /// Minimal gap between consecutive body lines.
    Compact,
    /// Half a text line; used around the summary header and for blank lines.
    HalfLine,
    /// Gap separating the title from the body.
    Heading,
}

impl Spacing {
    /// Spacing expressed in text lines.
    pub fn lines(self) -> f32 {
        match self {
            Spacing::None => 0.0,
            Spacing::Compact => 0.3,
            Spacing::HalfLine => 0.5,
            Spacing::Heading => 1.5,
        }
    }

    /// Spacing in twentieths of a point, as used by Word paragraphs.
    pub fn twips(self) -> u32 {
        match self {
            Spacing::None => 0,
            Spacing::Compact => 100,
            Spacing::HalfLine => 200,
            Spacing::Heading => 400,
        }
    }
}

/// A run of uniformly styled text plus the layout of its paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub spacing_before: Spacing,
    pub spacing_after: Spacing,
    pub indent_level: u8,
}

/// The rendering of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// One paragraph made of one or more segments painted on the same line.
    Paragraph(Vec<Segment>),
    /// No text, only a vertical advance (a blank line in the source).
    Advance(Spacing),
}

impl Rendered {
    pub fn segments(&self) -> &[Segment] {
        match self {
            Rendered::Paragraph(segments) => segments,
            Rendered::Advance(_) => &[],
        }
    }

    /// The visible text of the line.
    pub fn text(&self) -> String {
        self.segments().iter().map(|segment| segment.text.as_str()).collect()
    }
}

#[derive(Clone, Copy)]
struct Layout {
    before: Spacing,
    after: Spacing,
    indent: u8,
}

impl Layout {
    const fn after(after: Spacing) -> Self {
        Self { before: Spacing::None, after, indent: 0 }
    }

    fn segment(self, text: impl Into<String>, bold: bool) -> Segment {
        Segment {
            text: text.into(),
            bold,
            spacing_before: self.before,
            spacing_after: self.after,
            indent_level: self.indent,
        }
    }
}

const TITLE: Layout = Layout::after(Spacing::Heading);
const SUMMARY: Layout = Layout {
    before: Spacing::HalfLine,
    after: Spacing::HalfLine,
    indent: 0,
};
const BULLET: Layout = Layout {
    before: Spacing::None,
    after: Spacing::Compact,
    indent: 1,
};
const BODY: Layout = Layout::after(Spacing::Compact);

/// Maps a classified line to its styled segments.
///
/// ```rust
/// use dayrep::libs::classify::classify;
/// use dayrep::libs::segment::{render, Rendered, Spacing};
///
/// let rendered = render(&classify("09:30 AM – Fixed ticket X"));
/// let segments = rendered.segments();
/// assert_eq!(segments.len(), 2);
/// assert!(segments[0].bold);
/// assert_eq!(segments[0].text, "09:30 AM – ");
/// assert_eq!(segments[1].text, "Fixed ticket X");
///
/// assert_eq!(render(&classify("")), Rendered::Advance(Spacing::HalfLine));
/// ```
pub fn render(line: &ClassifiedLine<'_>) -> Rendered {
    let segments = match line.kind {
        LineKind::Blank => return Rendered::Advance(Spacing::HalfLine),
        LineKind::Title => vec![TITLE.segment(line.text, true)],
        LineKind::SummaryHeader(split) => timed(SUMMARY, line.text, split),
        LineKind::TimedActivity(split) => timed(BODY, line.text, split),
        LineKind::Bullet => vec![BULLET.segment(line.text, false)],
        LineKind::Plain => vec![BODY.segment(line.text, false)],
    };
    Rendered::Paragraph(segments)
}

fn timed(layout: Layout, text: &str, split: Option<TimeSplit<'_>>) -> Vec<Segment> {
    match split {
        Some(split) => vec![layout.segment(split.lead(), true), layout.segment(split.description, false)],
        None => vec![layout.segment(text, false)],
    }
}

/// Classifies and renders a whole report in input order.
pub fn render_report(report: &str) -> Vec<Rendered> {
    report.lines().map(|line| render(&super::classify::classify(line))).collect()
}
