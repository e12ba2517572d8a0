//! Single-prompt completions against the configured provider.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use super::error::LLMError;
use super::openai::OpenAICompatibleProvider;
use super::provider::LLMProvider;
use super::types::{ChatRequest, Message};
use crate::config::AiConfig;

/// System instruction sent ahead of every prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful business assistant.";

/// Sampling temperature for every completion.
pub const TEMPERATURE: f32 = 0.4;

/// Per-call timeout for outbound provider requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// Build the shared HTTP client used for provider calls.
pub fn build_http_client() -> Result<Client, LLMError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Turns a prompt into generated text using the provider chosen at startup.
///
/// Holds no provider when no credential was configured; every call then
/// fails with [`LLMError::MissingCredentials`] without touching the network.
#[derive(Clone)]
pub struct Assistant {
    provider: Option<Arc<dyn LLMProvider>>,
    model: String,
}

impl Assistant {
    pub fn new(provider: Option<Arc<dyn LLMProvider>>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Wire up the provider selected in `config`.
    pub fn from_config(config: &AiConfig, client: Client) -> Self {
        let provider = match &config.provider {
            Some(selected) => {
                info!(provider = %selected, model = %config.model, "Using LLM provider");
                Some(Arc::new(OpenAICompatibleProvider::for_provider(client, selected))
                    as Arc<dyn LLMProvider>)
            }
            None => {
                warn!("No LLM provider configured. Set GROQ_API_KEY or OPENAI_API_KEY.");
                None
            }
        };
        Self::new(provider, config.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Send `prompt` as the user turn and return the trimmed reply text.
    pub async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        let provider = self.provider.as_ref().ok_or(LLMError::MissingCredentials)?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
            temperature: Some(TEMPERATURE),
        };

        let response = provider.chat(request).await?;
        response
            .first_content()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                LLMError::MalformedResponse("missing choices[0].message.content".to_string())
            })
    }
}
