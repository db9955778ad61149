//! Line classifier turning semi-structured bot reply text into segments.
//!
//! ```rust
//! use brender::{format_content, DisplaySegment};
//!
//! let segments = format_content("🔸 **Aurora 14**\n   Price: $899.99");
//! assert_eq!(segments[0], DisplaySegment::ProductHeading("Aurora 14".to_string()));
//! assert_eq!(segments[1], DisplaySegment::ProductDetail("Price: $899.99".to_string()));
//! ```

use crate::{DisplaySegment, TextRun};

/// Glyph the backend prefixes product name lines with.
pub const PRODUCT_MARKER: &str = "🔸";

const BOLD_DELIMITER: &str = "**";

/// Classifies every line of `content` into exactly one segment, in input
/// order. Total: unrecognized input degrades to [`DisplaySegment::PlainLine`].
pub fn format_content(content: &str) -> Vec<DisplaySegment> {
    content.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> DisplaySegment {
    if let Some(name) = product_heading(line) {
        return DisplaySegment::ProductHeading(name.to_string());
    }

    let trimmed = line.trim();
    if (line.starts_with(' ') || line.starts_with('\t')) && !trimmed.is_empty() {
        return DisplaySegment::ProductDetail(trimmed.to_string());
    }

    if trimmed.is_empty() {
        return DisplaySegment::Break;
    }

    if line.contains(BOLD_DELIMITER) {
        return DisplaySegment::BoldLine(bold_runs(line));
    }

    DisplaySegment::PlainLine(line.to_string())
}

/// A heading is `🔸 **name**` with the bold run spanning to end of line;
/// a run that closes earlier falls through to bold-line classification.
fn product_heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("🔸 **")?;
    let name = rest.strip_suffix(BOLD_DELIMITER)?;
    if name.contains(BOLD_DELIMITER) {
        return None;
    }

    Some(name)
}

fn bold_runs(line: &str) -> Vec<TextRun> {
    let parts: Vec<&str> = line.split(BOLD_DELIMITER).collect();
    // An even part count means an odd number of delimiters: the final run
    // was never closed and stays plain.
    let unterminated = parts.len() % 2 == 0;
    let last = parts.len() - 1;

    parts
        .into_iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(index, part)| TextRun {
            text: part.to_string(),
            emphasized: index % 2 == 1 && !(unterminated && index == last),
        })
        .collect()
}
