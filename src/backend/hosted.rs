// HTTP client for the hosted conversational endpoint

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::types::{BackendRequest, BackendResponse};
use super::ChatBackend;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MODEL: &str = "companion-1";

/// Client for the remote hosted conversational-AI service.
///
/// The wire protocol belongs to the external service; this client only posts
/// conversation messages and reads back the generated reply.
#[derive(Clone)]
pub struct HostedBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HostedBackend {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl ChatBackend for HostedBackend {
    async fn send_message(&self, request: &BackendRequest) -> Result<BackendResponse> {
        let mut request = request.clone();
        if request.model.is_empty() {
            request.model = self.model.clone();
        }

        tracing::debug!(
            url = %self.messages_url(),
            messages = request.messages.len(),
            "Sending request to hosted backend"
        );

        let response = self
            .client
            .post(self.messages_url())
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to hosted backend")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Hosted backend request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let backend_response: BackendResponse = response
            .json()
            .await
            .context("Failed to parse hosted backend response")?;

        Ok(backend_response)
    }

    fn name(&self) -> &str {
        "hosted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::ChatMessage;

    #[tokio::test]
    async fn test_send_message_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "resp_1", "content": "Hello from Liam", "model": "companion-1"}"#)
            .create_async()
            .await;

        let backend = HostedBackend::new(server.url(), "test-key").unwrap();
        let request = BackendRequest::new(vec![ChatMessage::user("hello")]);

        let response = backend.send_message(&request).await.unwrap();
        assert_eq!(response.content, "Hello from Liam");
        assert_eq!(response.id, "resp_1");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let backend = HostedBackend::new(server.url(), "test-key").unwrap();
        let request = BackendRequest::new(vec![ChatMessage::user("hello")]);

        let result = backend.send_message(&request).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("500"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let backend = HostedBackend::new("https://api.example.com/", "key").unwrap();
        assert_eq!(backend.messages_url(), "https://api.example.com/v1/messages");
    }
}
