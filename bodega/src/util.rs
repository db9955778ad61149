//! Small conveniences for presentation layers.

use crate::{DisplaySegment, Message, format_content};

const SUGGESTED_QUERIES: &[&str] = &[
    "Show me electronics",
    "I need a laptop",
    "What books do you have?",
    "Show me furniture under $200",
    "I'm looking for toys",
    "What are your latest textiles?",
];

/// Starter prompts to offer when a transcript is empty.
pub fn suggested_queries() -> &'static [&'static str] {
    SUGGESTED_QUERIES
}

/// Formats a message's content into renderable segments.
pub fn message_segments(message: &Message) -> Vec<DisplaySegment> {
    format_content(&message.content)
}
