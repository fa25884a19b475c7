// Request/response types for the hosted conversational backend

use serde::{Deserialize, Serialize};

/// One conversational message in backend wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request to the hosted conversational endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BackendRequest {
    /// Conversation messages, oldest first
    pub messages: Vec<ChatMessage>,

    /// Model name (backend-specific, set from config)
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Persona/system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl BackendRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: String::new(), // filled in by the backend implementation
            max_tokens: 1024,
            system: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Response from the hosted conversational endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendResponse {
    /// Response ID assigned by the backend
    pub id: String,

    /// Generated reply text
    pub content: String,

    /// Model that generated the reply
    #[serde(default)]
    pub model: String,
}
