//! OpenAI-compatible LLM provider.
//!
//! Used for both Groq and OpenAI, which share the chat-completion schema.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::LLMError;
use super::provider::{LLMProvider, Provider};
use super::types::{ChatRequest, ChatResponse};

/// OpenAI-compatible provider authenticated with a bearer token.
pub struct OpenAICompatibleProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAICompatibleProvider {
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client for one of the hosted providers at its fixed endpoint.
    #[must_use]
    pub fn for_provider(client: Client, provider: &Provider) -> Self {
        Self::new(client, provider.base_url(), provider.api_key())
    }
}

#[async_trait]
impl LLMProvider for OpenAICompatibleProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %request.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, message });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| LLMError::MalformedResponse(format!("unexpected response body: {e}")))
    }
}
