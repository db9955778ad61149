//! Pure formatting of bot replies into renderable display segments.

mod format;
mod segment;

pub use format::{PRODUCT_MARKER, format_content};
pub use segment::{DisplaySegment, TextRun};
