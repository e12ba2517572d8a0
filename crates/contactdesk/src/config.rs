use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::llm::Provider;

pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";

// ============================================================================
// Config (root)
// ============================================================================

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub ai: AiConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let mut server = ServerConfig::default();
        if let Some(host) = get("HOST") {
            server.host = host;
        }
        if let Some(port) = get("PORT") {
            server.port = parse_value("PORT", &port)?;
        }
        if let Some(timeout) = get("REQUEST_TIMEOUT_SECONDS") {
            server.request_timeout_seconds = parse_value("REQUEST_TIMEOUT_SECONDS", &timeout)?;
        }

        let ai = AiConfig {
            provider: Provider::from_credentials(get("GROQ_API_KEY"), get("OPENAI_API_KEY")),
            model: get("AI_MODEL").unwrap_or_else(default_model),
        };

        Ok(Self { server, ai })
    }
}

/// Load a dotenv file into the process environment.
///
/// With no explicit path, looks for `.env` in the current directory and its
/// parents, and a missing file is not an error. Variables already set in
/// the environment are left alone.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => {
            dotenv::from_path(path)?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenv::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        },
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Whole-request budget; must cover two sequential provider calls.
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    60
}

// ============================================================================
// AiConfig
// ============================================================================

#[derive(Debug, Clone)]
pub struct AiConfig {
    /// `None` when neither credential is set.
    pub provider: Option<Provider>,
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: None,
            model: default_model(),
        }
    }
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenv::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

// ============================================================================
// Tests
// ============================================================================
