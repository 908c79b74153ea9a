//! Per-request completion context.
//!
//! [`ContextBuilder`] turns an [`InboundEvent`] into a [`CompletionRequest`]
//! by attaching the persona and generation parameters from the injected
//! [`CompletionSettings`]. It holds no state beyond those settings.

use serde::Serialize;

use crate::config::CompletionSettings;
use crate::event::InboundEvent;

/// Everything needed for one completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    /// System instruction.
    pub persona: String,
    /// Name of the person who wrote the message.
    pub sender_display_name: String,
    /// The message itself.
    pub user_text: String,
    /// Model identifier.
    pub model_id: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
}

impl CompletionRequest {
    /// Content of the user-role message: `"{sender}: {text}"`.
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.sender_display_name, self.user_text)
    }
}

/// Builds completion requests from inbound events.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    settings: CompletionSettings,
}

impl ContextBuilder {
    /// Create a builder around fixed settings.
    pub fn new(settings: CompletionSettings) -> Self {
        Self { settings }
    }

    /// The settings attached to every request.
    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// Build the request for an event.
    pub fn build(&self, event: &InboundEvent) -> CompletionRequest {
        CompletionRequest {
            persona: self.settings.persona.clone(),
            sender_display_name: event.sender_display_name.clone(),
            user_text: event.raw_text.clone(),
            model_id: self.settings.model_id.clone(),
            temperature: self.settings.temperature,
            max_output_tokens: self.settings.max_output_tokens,
        }
    }
}
