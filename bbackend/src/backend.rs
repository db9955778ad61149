use std::future::Future;
use std::pin::Pin;

use bcommon::SessionId;

use crate::{BackendError, Message, MessageExchange, Session};

pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The session/message capability the chat orchestrator consumes.
///
/// Each call maps to exactly one backend attempt; retry policy, if any,
/// belongs to the caller.
pub trait ChatBackend: Send + Sync {
    fn list_sessions<'a>(&'a self) -> BackendFuture<'a, Result<Vec<Session>, BackendError>>;

    fn create_session<'a>(&'a self) -> BackendFuture<'a, Result<Session, BackendError>>;

    fn delete_session<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BackendFuture<'a, Result<(), BackendError>>;

    fn reset_session<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BackendFuture<'a, Result<(), BackendError>>;

    fn list_messages<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BackendFuture<'a, Result<Vec<Message>, BackendError>>;

    fn send_message<'a>(
        &'a self,
        session_id: &'a SessionId,
        content: &'a str,
    ) -> BackendFuture<'a, Result<MessageExchange, BackendError>>;
}
