//! Common imports for most bodega applications.

pub use crate::{connect, connect_with_client, message_segments, orchestrator, suggested_queries};
pub use crate::{
    BackendError, BackendErrorKind, BackendFuture, BoxFuture, ChatBackend, ChatOrchestrator,
    ChatPhase, DisplaySegment, HttpChatBackend, Message, MessageExchange, MessageStore, Product,
    Role, SendOutcome, Session, SessionId, SessionRegistry, TextRun, format_content,
};
