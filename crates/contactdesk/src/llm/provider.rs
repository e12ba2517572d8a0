//! LLM provider trait and provider selection.

use std::fmt;

use async_trait::async_trait;

use super::error::LLMError;
use super::types::{ChatRequest, ChatResponse};

/// Trait for chat completion backends.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Make a chat completion request.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError>;
}

/// The hosted provider selected at startup, carrying its credential.
///
/// Both speak the OpenAI chat-completion schema and differ only in endpoint.
#[derive(Clone, PartialEq, Eq)]
pub enum Provider {
    Groq(String),
    OpenAI(String),
}

impl Provider {
    pub const GROQ_BASE_URL: &'static str = "https://api.groq.com/openai/v1";
    pub const OPENAI_BASE_URL: &'static str = "https://api.openai.com/v1";

    /// Pick a provider from the available credentials.
    ///
    /// A Groq key always wins; an OpenAI key is only used without one.
    /// Empty keys count as absent.
    pub fn from_credentials(
        groq_api_key: Option<String>,
        openai_api_key: Option<String>,
    ) -> Option<Self> {
        let present = |key: Option<String>| key.filter(|k| !k.is_empty());

        if let Some(key) = present(groq_api_key) {
            return Some(Provider::Groq(key));
        }
        present(openai_api_key).map(Provider::OpenAI)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Groq(_) => "groq",
            Provider::OpenAI(_) => "openai",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Provider::Groq(_) => Self::GROQ_BASE_URL,
            Provider::OpenAI(_) => Self::OPENAI_BASE_URL,
        }
    }

    pub fn api_key(&self) -> &str {
        match self {
            Provider::Groq(key) | Provider::OpenAI(key) => key,
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(match self {
            Provider::Groq(_) => "Groq",
            Provider::OpenAI(_) => "OpenAI",
        })
        .field(&"<redacted>")
        .finish()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
