//! Error types for the agent crate.

use thiserror::Error;

/// Errors raised while setting up the completion pipeline.
///
/// Completion calls themselves never fail with this type; they report a
/// [`crate::CompletionResult`] instead.
#[derive(Error, Debug)]
pub enum AgentError {
    /// A required setting is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A setting is present but cannot be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// Name of the environment variable.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;
