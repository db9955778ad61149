//! Unified facade over the bodega workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the core bodega crates and provides convenience helpers for
//! wiring the orchestrator to a backend.
//!
//! ```
//! use bodega::prelude::*;
//!
//! let chat = connect("http://localhost:8000/api");
//! assert_eq!(chat.phase(), ChatPhase::Uninitialized);
//! ```

pub mod prelude;
pub mod runtime;
pub mod util;

pub use bbackend;
pub use bchat;
pub use bcommon;
pub use brender;

pub use bbackend::{
    BackendError, BackendErrorKind, BackendFuture, ChatBackend, HttpChatBackend, Message,
    MessageExchange, Product, Role, Session,
};
pub use bchat::{ChatOrchestrator, ChatPhase, MessageStore, SendOutcome, SessionRegistry};
pub use bcommon::{BoxFuture, SessionId};
pub use brender::{DisplaySegment, PRODUCT_MARKER, TextRun, format_content};

pub use runtime::{connect, connect_with_client, orchestrator};
pub use util::{message_segments, suggested_queries};
