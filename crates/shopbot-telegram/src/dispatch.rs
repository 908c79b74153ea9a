//! Event dispatch.
//!
//! [`DispatchEngine::handle`] is the entry point for every inbound event and
//! always produces exactly one [`OutboundReply`]. Commands go to the static
//! router; everything else is proxied to the completion client, whose
//! failures (and panics) collapse into a single fallback reply.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use shopbot_agent::{
    CompletionClient, CompletionErrorKind, CompletionResult, ContextBuilder, InboundEvent,
};
use tracing::{debug, error, info, warn};

use crate::commands::{route, unknown_command, Command};
use crate::reply::OutboundReply;

/// Reply shown whenever a completion cannot be produced.
pub const FALLBACK_TEXT: &str = "Извините, временные проблемы с подключением. \
    Попробуйте позже или напишите 'цены' для получения информации о товарах.";

/// Routes inbound events to the command router or the completion client.
///
/// Holds only immutable state, so one instance can serve any number of
/// concurrent events.
#[derive(Clone)]
pub struct DispatchEngine {
    builder: ContextBuilder,
    client: Arc<dyn CompletionClient>,
}

impl DispatchEngine {
    /// Create an engine around a context builder and completion client.
    pub fn new(builder: ContextBuilder, client: Arc<dyn CompletionClient>) -> Self {
        Self { builder, client }
    }

    /// Handle one event.
    pub async fn handle(&self, event: InboundEvent) -> OutboundReply {
        match event.command_token.as_deref() {
            Some(token) => match Command::from_token(token) {
                Some(command) => {
                    info!(command = command.token(), "Command matched");
                    route(command)
                }
                None => {
                    info!(token = %token, "Unrecognized command");
                    unknown_command(token)
                }
            },
            None => self.converse(&event).await,
        }
    }

    async fn converse(&self, event: &InboundEvent) -> OutboundReply {
        if event.raw_text.trim().is_empty() {
            debug!("Empty message, skipping completion");
            return fallback();
        }

        let request = self.builder.build(event);
        debug!(sender = %event.sender_display_name, text = %event.raw_text, "Requesting completion");

        let result = match AssertUnwindSafe(self.client.complete(&request))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(panic_info) => {
                let panic_msg = panic_info
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic_info.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!(panic = %panic_msg, "Completion client panicked");
                CompletionResult::failure(CompletionErrorKind::Unknown)
            }
        };

        match result {
            CompletionResult::Success { reply_text } => OutboundReply::plain(reply_text),
            CompletionResult::Failure { kind } => {
                report_failure(kind);
                fallback()
            }
        }
    }
}

fn report_failure(kind: CompletionErrorKind) {
    match kind {
        CompletionErrorKind::AuthError => {
            error!(kind = %kind, "Completion provider rejected the API key")
        }
        CompletionErrorKind::Timeout
        | CompletionErrorKind::RateLimited
        | CompletionErrorKind::MalformedResponse
        | CompletionErrorKind::Unknown => warn!(kind = %kind, "Answering with fallback reply"),
    }
}

fn fallback() -> OutboundReply {
    OutboundReply::plain(FALLBACK_TEXT)
}
