//! Session, message, and product wire model types.
//!
//! Timestamps are opaque backend-issued strings (ISO 8601 on the wire); the
//! client orders messages by insertion, never by parsing timestamps.

use std::fmt::{Display, Formatter};

use bcommon::SessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: SessionId,
    pub updated_at: String,
    pub message_count: u64,
}

impl Session {
    pub fn new(session_id: impl Into<SessionId>, updated_at: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            updated_at: updated_at.into(),
            message_count: 0,
        }
    }

    pub fn with_message_count(mut self, message_count: u64) -> Self {
        self.message_count = message_count;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            Self::User => "user",
            Self::Bot => "bot",
        };

        f.write_str(role)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u64,
    pub session_id: SessionId,
    pub role: Role,
    pub content: String,
    pub timestamp: String,
    pub related_products: Vec<Product>,
}

impl Message {
    pub fn new(
        id: u64,
        session_id: impl Into<SessionId>,
        role: Role,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            session_id: session_id.into(),
            role,
            content: content.into(),
            timestamp: timestamp.into(),
            related_products: Vec::new(),
        }
    }

    pub fn with_related_products(mut self, related_products: Vec<Product>) -> Self {
        self.related_products = related_products;
        self
    }
}

/// Opaque catalog entry owned by the backend; forwarded for display only.
///
/// `price` is a decimal serialized as a string on the wire and is never
/// parsed client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub rating: f64,
    pub stock: i64,
    pub description: String,
    pub image_url: String,
}

/// The send-message response: the stored user message paired with the bot
/// reply it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageExchange {
    pub user_message: Message,
    pub bot_message: Message,
}
