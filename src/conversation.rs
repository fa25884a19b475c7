// Conversation history for multi-turn chats
//
// History is held in memory only for the duration of a session; nothing is
// persisted.

use serde::{Deserialize, Serialize};

use crate::backend::ChatMessage;

/// Bounded, in-memory conversation history for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHistory {
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    max_messages: usize,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            max_messages: 20, // last 10 user + 10 assistant turns
        }
    }

    pub fn with_limit(max_messages: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_messages,
        }
    }

    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
        self.trim_if_needed();
    }

    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
        self.trim_if_needed();
    }

    /// Get all messages for a backend request, oldest first
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    fn trim_if_needed(&mut self) {
        if self.messages.len() > self.max_messages {
            let remove_count = self.messages.len() - self.max_messages;
            self.messages.drain(0..remove_count);
        }
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_count() {
        let mut history = ConversationHistory::new();
        assert!(history.is_empty());

        history.add_user_message("hi");
        history.add_assistant_message("hello");
        assert_eq!(history.message_count(), 2);
        assert_eq!(history.messages()[0].role, "user");
        assert_eq!(history.messages()[1].role, "assistant");
    }

    #[test]
    fn test_trims_oldest_beyond_limit() {
        let mut history = ConversationHistory::with_limit(4);

        for i in 0..4 {
            history.add_user_message(format!("q{}", i));
            history.add_assistant_message(format!("a{}", i));
        }

        assert_eq!(history.message_count(), 4);
        // Oldest turns dropped, newest kept
        assert_eq!(history.messages()[0].content, "q2");
        assert_eq!(history.messages()[3].content, "a3");
    }

    #[test]
    fn test_clear() {
        let mut history = ConversationHistory::new();
        history.add_user_message("hi");
        history.clear();
        assert!(history.is_empty());
    }
}
