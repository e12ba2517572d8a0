//! LLM error types.

use thiserror::Error;

/// Errors that can occur when making LLM API calls.
#[derive(Debug, Error)]
pub enum LLMError {
    /// No provider credential was configured.
    #[error("Missing GROQ_API_KEY or OPENAI_API_KEY")]
    MissingCredentials,

    /// HTTP request failed
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// API answered 2xx but the body did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
