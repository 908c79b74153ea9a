//! Inbound chat events.

/// Prefix that marks a message as a command.
pub const COMMAND_PREFIX: char = '/';

/// A single user message delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// Name the sender shows in the chat.
    pub sender_display_name: String,
    /// Message text as received.
    pub raw_text: String,
    /// Command keyword without the prefix, when the message is a command.
    pub command_token: Option<String>,
}

impl InboundEvent {
    /// Build an event from a message text, extracting the command token.
    ///
    /// `/prices@shop_bot extra` yields the token `prices`.
    pub fn from_text(sender_display_name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let command_token = parse_command_token(&raw_text);
        Self {
            sender_display_name: sender_display_name.into(),
            raw_text,
            command_token,
        }
    }

    /// Build a free-text event.
    pub fn text(sender_display_name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            sender_display_name: sender_display_name.into(),
            raw_text: raw_text.into(),
            command_token: None,
        }
    }

    /// Build a command event.
    pub fn command(sender_display_name: impl Into<String>, token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            sender_display_name: sender_display_name.into(),
            raw_text: format!("{}{}", COMMAND_PREFIX, token),
            command_token: Some(token),
        }
    }

    /// Whether the event carries a command.
    pub fn is_command(&self) -> bool {
        self.command_token.is_some()
    }
}

fn parse_command_token(text: &str) -> Option<String> {
    let rest = text.trim_start().strip_prefix(COMMAND_PREFIX)?;
    let word = rest.split_whitespace().next().unwrap_or("");
    let token = word.split('@').next().unwrap_or(word);
    Some(token.to_string())
}
