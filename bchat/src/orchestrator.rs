//! Session/message orchestration state machine over a chat backend.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bbackend::{ChatBackend, Message, Session};
use bcommon::SessionId;

use crate::{MessageStore, SessionRegistry};

/// Lifecycle of the chat view. `Idle` and `Sending` are the two operating
/// sub-states; once either is reached the orchestrator never returns to
/// `Uninitialized` or `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Uninitialized,
    Loading,
    Idle,
    Sending,
}

impl ChatPhase {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Idle | Self::Sending)
    }
}

/// What happened to a submitted message. Rejected variants and `Failed`
/// leave the typed text with the caller, so an input field can keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    RejectedEmptyInput,
    RejectedNoActiveSession,
    RejectedAlreadySending,
    Failed,
}

impl SendOutcome {
    pub fn consumed_input(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

#[derive(Debug, Default)]
struct ChatState {
    registry: SessionRegistry,
    store: MessageStore,
    active: Option<SessionId>,
    phase: ChatPhase,
    select_generation: u64,
}

/// Coordinates the session registry and message store against the backend.
///
/// All mutations go through this type; the presentation layer reads cloned
/// snapshots only. Backend failures are absorbed here: they are logged and
/// resolved to a safe transition, never surfaced as errors.
pub struct ChatOrchestrator {
    backend: Arc<dyn ChatBackend>,
    state: Mutex<ChatState>,
}

impl ChatOrchestrator {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(ChatState::default()),
        }
    }

    /// Loads the session list and converges on one active session: the
    /// newest existing session, or a freshly created one when the list is
    /// empty or unavailable. Subsequent calls are no-ops.
    pub async fn initialize(&self) {
        {
            let mut state = self.state();
            if state.phase != ChatPhase::Uninitialized {
                tracing::debug!(phase = "chat", event = "initialize_skipped");
                return;
            }
            state.phase = ChatPhase::Loading;
        }

        match self.backend.list_sessions().await {
            Ok(sessions) if !sessions.is_empty() => {
                let first = sessions[0].session_id.clone();
                self.state().registry.replace_all(sessions);
                self.select_session(&first).await;
            }
            Ok(_) => self.create_session().await,
            Err(error) => {
                tracing::warn!(
                    phase = "chat",
                    event = "list_sessions_failed",
                    error_kind = ?error.kind,
                    retryable = error.retryable,
                    error = %error,
                    "falling back to session creation"
                );
                self.create_session().await;
            }
        }

        self.state().phase = ChatPhase::Idle;
    }

    /// Requests a new session and makes it active with an empty transcript.
    /// The session id is authoritative from the backend response; exactly
    /// one create call per invocation.
    pub async fn create_session(&self) {
        match self.backend.create_session().await {
            Ok(session) => {
                let session_id = session.session_id.clone();
                let mut state = self.state();
                state.registry.add(session);
                state.active = Some(session_id);
                state.store.clear();
            }
            Err(error) => {
                tracing::error!(
                    phase = "chat",
                    event = "create_session_failed",
                    error_kind = ?error.kind,
                    retryable = error.retryable,
                    error = %error
                );
            }
        }
    }

    /// Makes `session_id` active and replaces the transcript with its
    /// messages. The active pointer moves immediately; the fetched messages
    /// are applied only if no newer select has been issued meanwhile, so a
    /// slow response cannot overwrite a later session's transcript. On
    /// failure the store keeps its previous contents.
    pub async fn select_session(&self, session_id: &SessionId) {
        let generation = {
            let mut state = self.state();
            state.select_generation += 1;
            state.active = Some(session_id.clone());
            state.select_generation
        };

        match self.backend.list_messages(session_id).await {
            Ok(messages) => {
                let mut state = self.state();
                if state.select_generation == generation {
                    state.store.replace_all(messages);
                } else {
                    tracing::debug!(
                        phase = "chat",
                        event = "stale_select_dropped",
                        session_id = %session_id,
                        generation
                    );
                }
            }
            Err(error) => {
                tracing::warn!(
                    phase = "chat",
                    event = "list_messages_failed",
                    session_id = %session_id,
                    error_kind = ?error.kind,
                    retryable = error.retryable,
                    error = %error
                );
            }
        }
    }

    /// Clears the active session's history on the backend and re-selects it
    /// to pick up the fresh transcript. The registry entry survives.
    pub async fn reset_session(&self) {
        let Some(session_id) = self.state().active.clone() else {
            tracing::debug!(phase = "chat", event = "reset_without_active_session");
            return;
        };

        match self.backend.reset_session(&session_id).await {
            Ok(()) => self.select_session(&session_id).await,
            Err(error) => {
                tracing::error!(
                    phase = "chat",
                    event = "reset_session_failed",
                    session_id = %session_id,
                    error_kind = ?error.kind,
                    retryable = error.retryable,
                    error = %error
                );
            }
        }
    }

    /// Deletes the session and, when it was active, immediately converges on
    /// a replacement: the new first registry entry, or a created session when
    /// none remain. The view never settles with zero usable sessions.
    pub async fn delete_session(&self, session_id: &SessionId) {
        if let Err(error) = self.backend.delete_session(session_id).await {
            tracing::error!(
                phase = "chat",
                event = "delete_session_failed",
                session_id = %session_id,
                error_kind = ?error.kind,
                retryable = error.retryable,
                error = %error
            );
            return;
        }

        let replacement = {
            let mut state = self.state();
            let active = state.active.clone();
            if !state.registry.remove(session_id, active.as_ref()) {
                return;
            }
            state.active = None;
            state.registry.first().map(|session| session.session_id.clone())
        };

        match replacement {
            Some(next) => self.select_session(&next).await,
            None => self.create_session().await,
        }
    }

    /// Submits `text` for the active session. Guarded no-op on empty input,
    /// missing active session, or an exchange already in flight; guarded
    /// rejections never reach the backend. On success the user message and
    /// bot reply are appended as one atomic update and the registry entry is
    /// touched with the bot message's timestamp, order untouched.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let trimmed = text.trim();
        let session_id = {
            let mut state = self.state();
            if trimmed.is_empty() {
                return SendOutcome::RejectedEmptyInput;
            }
            let Some(session_id) = state.active.clone() else {
                return SendOutcome::RejectedNoActiveSession;
            };
            if state.phase == ChatPhase::Sending {
                return SendOutcome::RejectedAlreadySending;
            }
            state.phase = ChatPhase::Sending;
            session_id
        };

        let result = self.backend.send_message(&session_id, trimmed).await;

        let mut state = self.state();
        state.phase = ChatPhase::Idle;
        match result {
            Ok(exchange) => {
                state.registry.touch(
                    &session_id,
                    exchange.bot_message.timestamp.clone(),
                    2,
                );

                // The transcript only holds the active session; if the user
                // switched away mid-flight the exchange stays server-side
                // until that session is selected again.
                if state.active.as_ref() == Some(&session_id) {
                    state
                        .store
                        .append([exchange.user_message, exchange.bot_message]);
                } else {
                    tracing::debug!(
                        phase = "chat",
                        event = "exchange_for_inactive_session_dropped",
                        session_id = %session_id
                    );
                }

                SendOutcome::Delivered
            }
            Err(error) => {
                tracing::error!(
                    phase = "chat",
                    event = "send_failed",
                    session_id = %session_id,
                    error_kind = ?error.kind,
                    retryable = error.retryable,
                    error = %error
                );
                SendOutcome::Failed
            }
        }
    }

    pub fn sessions(&self) -> Vec<Session> {
        self.state().registry.sessions().to_vec()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state().store.messages().to_vec()
    }

    pub fn active_session_id(&self) -> Option<SessionId> {
        self.state().active.clone()
    }

    pub fn active_session(&self) -> Option<Session> {
        let state = self.state();
        state
            .active
            .as_ref()
            .and_then(|session_id| state.registry.get(session_id).cloned())
    }

    pub fn phase(&self) -> ChatPhase {
        self.state().phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase() == ChatPhase::Sending
    }

    // A poisoned lock still holds the last consistent snapshot; keep serving
    // it instead of propagating a panic into the presentation layer.
    fn state(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
