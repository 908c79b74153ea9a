//! Error types for the Telegram bot.

use thiserror::Error;

/// Errors that can stop the bot from starting.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set BOT_TOKEN environment variable.")]
    NoToken,

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// Completion pipeline could not be configured.
    #[error(transparent)]
    Agent(#[from] shopbot_agent::AgentError),
}

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, TelegramError>;

impl From<teloxide::RequestError> for TelegramError {
    fn from(e: teloxide::RequestError) -> Self {
        TelegramError::BotStartFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopbot_agent::AgentError;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TelegramError::NoToken.to_string(),
            "Telegram bot token not set. Set BOT_TOKEN environment variable."
        );

        let err: TelegramError = AgentError::Configuration("Missing GROQ_API_KEY environment variable".into()).into();
        assert_eq!(
            err.to_string(),
            "configuration error: Missing GROQ_API_KEY environment variable"
        );
    }
}
