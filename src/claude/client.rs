// HTTP client for the Anthropic Messages API

use anyhow::{Context, Result};
use reqwest::Client;

use super::types::{MessageRequest, MessageResponse};

const CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct ClaudeClient {
    client: Client,
    api_key: String,
    messages_url: String,
}

impl ClaudeClient {
    pub fn new(api_key: String) -> Result<Self> {
        // No request timeout is set; the client library's default applies.
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            messages_url: CLAUDE_API_URL.to_string(),
        })
    }

    /// Point the client at a different API host (tests, proxies).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.messages_url = format!("{}/v1/messages", base_url.trim_end_matches('/'));
        self
    }

    /// Send a message request and wait for the complete response
    pub async fn send_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
        tracing::debug!("Sending request to Claude API: {:?}", request);

        let response = self
            .client
            .post(&self.messages_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to Claude API")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Claude API request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let message_response: MessageResponse = response
            .json()
            .await
            .context("Failed to parse Claude API response")?;

        tracing::debug!("Received response: {:?}", message_response);

        Ok(message_response)
    }
}
