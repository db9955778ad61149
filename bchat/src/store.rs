//! Transcript storage for the active session.

use bbackend::Message;

/// Insertion-ordered messages of the currently active session. Messages are
/// immutable once stored; the only removals are wholesale replacement on
/// session switch and clearing on reset or deletion.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn replace_all(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// Appends a batch in one call so a user message and its paired bot
    /// reply become visible together.
    pub fn append(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use bbackend::Role;

    use super::*;

    fn message(id: u64, role: Role, content: &str) -> Message {
        Message::new(id, "s1", role, content, "2024-05-01T10:00:00Z")
    }

    #[test]
    fn append_keeps_insertion_order_and_replace_is_wholesale() {
        let mut store = MessageStore::new();
        store.append([message(1, Role::User, "hi"), message(2, Role::Bot, "hello")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[0].id, 1);

        store.replace_all(vec![message(9, Role::Bot, "welcome")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.messages()[0].id, 9);

        store.clear();
        assert!(store.is_empty());
    }
}
