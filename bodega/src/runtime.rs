//! Wiring helpers that connect the orchestrator to a backend.

use std::sync::Arc;

use crate::{ChatBackend, ChatOrchestrator, HttpChatBackend};

pub fn orchestrator(backend: Arc<dyn ChatBackend>) -> ChatOrchestrator {
    ChatOrchestrator::new(backend)
}

/// Builds an orchestrator over the HTTP backend at `base_url`, for example
/// `http://localhost:8000/api`.
pub fn connect(base_url: impl Into<String>) -> ChatOrchestrator {
    orchestrator(Arc::new(HttpChatBackend::from_base_url(base_url)))
}

/// Like [`connect`], but reuses a caller-configured [`reqwest::Client`].
pub fn connect_with_client(client: reqwest::Client, base_url: impl Into<String>) -> ChatOrchestrator {
    orchestrator(Arc::new(HttpChatBackend::new(client, base_url)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        BackendError, BackendFuture, ChatBackend, ChatPhase, Message, MessageExchange, Session,
        SessionId,
    };

    use super::{connect, orchestrator};

    #[derive(Default)]
    struct RecordingBackend {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingBackend {
        fn record(&self, call: &str) {
            self.calls.lock().expect("calls lock").push(call.to_string());
        }
    }

    impl ChatBackend for RecordingBackend {
        fn list_sessions<'a>(&'a self) -> BackendFuture<'a, Result<Vec<Session>, BackendError>> {
            Box::pin(async move {
                self.record("list_sessions");
                Ok(vec![Session::new("s1", "2024-05-01T10:00:00Z")])
            })
        }

        fn create_session<'a>(&'a self) -> BackendFuture<'a, Result<Session, BackendError>> {
            Box::pin(async move {
                self.record("create_session");
                Ok(Session::new("s-new", "2024-05-01T10:00:00Z"))
            })
        }

        fn delete_session<'a>(
            &'a self,
            _session_id: &'a SessionId,
        ) -> BackendFuture<'a, Result<(), BackendError>> {
            Box::pin(async move { Ok(()) })
        }

        fn reset_session<'a>(
            &'a self,
            _session_id: &'a SessionId,
        ) -> BackendFuture<'a, Result<(), BackendError>> {
            Box::pin(async move { Ok(()) })
        }

        fn list_messages<'a>(
            &'a self,
            _session_id: &'a SessionId,
        ) -> BackendFuture<'a, Result<Vec<Message>, BackendError>> {
            Box::pin(async move {
                self.record("list_messages");
                Ok(Vec::new())
            })
        }

        fn send_message<'a>(
            &'a self,
            _session_id: &'a SessionId,
            _content: &'a str,
        ) -> BackendFuture<'a, Result<MessageExchange, BackendError>> {
            Box::pin(async move { Err(BackendError::api("not scripted")) })
        }
    }

    #[tokio::test]
    async fn orchestrator_drives_the_supplied_backend() {
        let backend = Arc::new(RecordingBackend::default());
        let chat = orchestrator(backend.clone());

        chat.initialize().await;

        assert_eq!(chat.phase(), ChatPhase::Idle);
        assert_eq!(chat.active_session_id(), Some(SessionId::from("s1")));
        assert_eq!(
            backend.calls.lock().expect("calls lock").clone(),
            vec!["list_sessions", "list_messages"]
        );
    }

    #[test]
    fn connect_starts_uninitialized() {
        let chat = connect("http://localhost:8000/api");
        assert_eq!(chat.phase(), ChatPhase::Uninitialized);
        assert!(chat.sessions().is_empty());
    }
}
