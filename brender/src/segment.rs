//! Renderable segment types produced by the formatter.

/// One run of text inside a [`DisplaySegment::BoldLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub emphasized: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// A classified, renderable unit derived from one line of a bot reply.
///
/// Segments are recomputed per render and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySegment {
    /// A product name line, marker and bold delimiters stripped.
    ProductHeading(String),
    /// An indented product attribute line, leading whitespace stripped.
    ProductDetail(String),
    /// A line mixing plain and emphasized runs.
    BoldLine(Vec<TextRun>),
    /// An unformatted line.
    PlainLine(String),
    /// A blank line.
    Break,
}
