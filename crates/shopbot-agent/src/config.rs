//! Configuration for the completion provider and generation parameters.
//!
//! Both values are built once at startup and shared read-only afterwards.

use std::time::Duration;

use crate::error::{AgentError, Result};
use crate::persona::DEFAULT_PERSONA;

/// Environment variable for the Groq API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the model id.
pub const GROQ_MODEL_ENV: &str = "GROQ_MODEL";

/// Environment variable overriding the chat completions endpoint.
pub const GROQ_API_URL_ENV: &str = "GROQ_API_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const GROQ_TIMEOUT_ENV: &str = "GROQ_TIMEOUT_SECS";

/// Groq chat completions endpoint (OpenAI compatible).
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model id.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default cap on generated tokens.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;

/// Default bound on a single completion call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the completion provider.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Bearer credential.
    pub api_key: String,
    /// Chat completions endpoint.
    pub api_url: String,
    /// Upper bound on one request, including reading the body.
    pub request_timeout: Duration,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Create a config for the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Read the config from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(GROQ_API_KEY_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AgentError::Configuration(format!(
                    "Missing {} environment variable",
                    GROQ_API_KEY_ENV
                ))
            })?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup(GROQ_API_URL_ENV).filter(|v| !v.is_empty()) {
            config.api_url = url;
        }

        if let Some(raw) = lookup(GROQ_TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| AgentError::InvalidValue {
                    name: GROQ_TIMEOUT_ENV.to_string(),
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Generation parameters attached to every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    /// System instruction.
    pub persona: String,

    /// Model identifier.
    pub model_id: String,

    /// Sampling temperature (0.0 to 2.0).
    pub temperature: f32,

    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            model_id: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl CompletionSettings {
    /// Defaults with the model taken from `GROQ_MODEL` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults with the model taken from the lookup when set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(model) = lookup(GROQ_MODEL_ENV).filter(|m| !m.trim().is_empty()) {
            settings.model_id = model;
        }
        settings
    }

    /// Set the model id.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the persona.
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }
}
