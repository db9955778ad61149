//! Backend contract and HTTP client for the shopping-assistant chat API.

mod backend;
mod error;
mod http;
mod model;

pub use backend::{BackendFuture, ChatBackend};
pub use error::{BackendError, BackendErrorKind};
pub use http::HttpChatBackend;
pub use model::{Message, MessageExchange, Product, Role, Session};
pub use bcommon::SessionId;
