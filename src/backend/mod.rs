// Remote conversational-AI backend
//
// The actual conversational intelligence is delegated to an external hosted
// service. This module is a thin client abstraction over it so the turn
// engine can run with or without a configured backend.

use anyhow::Result;
use async_trait::async_trait;

mod hosted;
pub mod types;

pub use hosted::HostedBackend;
pub use types::{BackendRequest, BackendResponse, ChatMessage};

/// Trait for conversational backends
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a conversation and get the generated reply
    async fn send_message(&self, request: &BackendRequest) -> Result<BackendResponse>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
