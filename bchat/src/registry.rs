//! Ordered collection of session summaries for the session switcher.

use bbackend::Session;
use bcommon::SessionId;

/// Holds sessions in the order the backend returned them (most recently
/// updated first); the registry never re-sorts.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Vec<Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn first(&self) -> Option<&Session> {
        self.sessions.first()
    }

    pub fn get(&self, session_id: &SessionId) -> Option<&Session> {
        self.sessions
            .iter()
            .find(|session| session.session_id == *session_id)
    }

    pub fn replace_all(&mut self, sessions: Vec<Session>) {
        self.sessions = sessions;
    }

    pub fn add(&mut self, session: Session) {
        self.sessions.insert(0, session);
    }

    /// Removes the session and reports whether the caller's active pointer
    /// referenced it and must be reassigned before control returns to the
    /// presentation layer.
    pub fn remove(&mut self, session_id: &SessionId, active: Option<&SessionId>) -> bool {
        let before = self.sessions.len();
        self.sessions
            .retain(|session| session.session_id != *session_id);

        let removed = self.sessions.len() != before;
        removed && active == Some(session_id)
    }

    /// Refreshes a session's `updated_at` and advances its message count in
    /// place, keeping the list order untouched.
    pub fn touch(
        &mut self,
        session_id: &SessionId,
        updated_at: impl Into<String>,
        appended_messages: u64,
    ) {
        if let Some(session) = self
            .sessions
            .iter_mut()
            .find(|session| session.session_id == *session_id)
        {
            session.updated_at = updated_at.into();
            session.message_count += appended_messages;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str) -> Session {
        Session::new(id, "2024-05-01T10:00:00Z")
    }

    #[test]
    fn add_prepends_and_order_is_preserved() {
        let mut registry = SessionRegistry::new();
        registry.replace_all(vec![session("s1"), session("s2")]);
        registry.add(session("s3"));

        let ids: Vec<&str> = registry
            .sessions()
            .iter()
            .map(|session| session.session_id.as_str())
            .collect();
        assert_eq!(ids, vec!["s3", "s1", "s2"]);
    }

    #[test]
    fn remove_reports_reassignment_only_for_the_active_session() {
        let mut registry = SessionRegistry::new();
        registry.replace_all(vec![session("s1"), session("s2")]);

        let active = SessionId::from("s1");
        assert!(!registry.remove(&SessionId::from("s2"), Some(&active)));
        assert!(registry.remove(&SessionId::from("s1"), Some(&active)));
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_of_unknown_session_never_requires_reassignment() {
        let mut registry = SessionRegistry::new();
        registry.replace_all(vec![session("s1")]);

        let active = SessionId::from("missing");
        assert!(!registry.remove(&SessionId::from("missing"), Some(&active)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn touch_updates_in_place_without_reordering() {
        let mut registry = SessionRegistry::new();
        registry.replace_all(vec![session("s1"), session("s2")]);

        registry.touch(&SessionId::from("s2"), "2024-05-01T11:00:00Z", 2);

        let ids: Vec<&str> = registry
            .sessions()
            .iter()
            .map(|session| session.session_id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s2"]);

        let touched = registry.get(&SessionId::from("s2")).expect("s2 present");
        assert_eq!(touched.updated_at, "2024-05-01T11:00:00Z");
        assert_eq!(touched.message_count, 2);
    }
}
