//! Cross-page operation message log.
//!
//! Pages append user-facing messages ("X was saved", "X was deleted") here
//! instead of owning their own notification state, so messages survive the
//! navigation that follows the operation.

use serde::{Deserialize, Serialize};

/// A single logged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// User-facing message text. Never empty.
    pub text: String,
}

/// Append-only log of operation messages.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Empty messages are ignored.
    pub fn add(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.entries.push(Message { text });
        }
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.entries
    }

    /// Most recent message, if any.
    pub fn latest(&self) -> Option<&Message> {
        self.entries.last()
    }

    /// Remove all messages.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_read() {
        let mut log = MessageLog::new();
        log.add("Hammer was saved");
        log.add("Hammer was deleted");

        assert_eq!(log.messages().len(), 2);
        assert_eq!(log.latest().unwrap().text, "Hammer was deleted");
    }

    #[test]
    fn test_empty_messages_ignored() {
        let mut log = MessageLog::new();
        log.add("");
        assert!(log.messages().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut log = MessageLog::new();
        log.add("something");
        log.clear();
        assert!(log.latest().is_none());
    }
}
