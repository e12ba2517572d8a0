//! LLM provider client for chat completions.

mod assistant;
mod error;
mod openai;
mod provider;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use assistant::{Assistant, REQUEST_TIMEOUT, SYSTEM_PROMPT, TEMPERATURE, build_http_client};
pub use error::LLMError;
pub use openai::OpenAICompatibleProvider;
pub use provider::{LLMProvider, Provider};
pub use types::{ChatRequest, ChatResponse, Choice, ChoiceMessage, Message, Role, Usage};
