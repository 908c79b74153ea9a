//! Groq API client for chat completions.
//!
//! Each call sends exactly two messages (system persona, user text) and
//! reports the outcome as a [`CompletionResult`]. Transport, status and
//! decoding failures are classified into [`CompletionErrorKind`] here and
//! never returned as errors. No retries are made.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ProviderConfig;
use crate::context::CompletionRequest;
use crate::error::Result;
use crate::response::{CompletionErrorKind, CompletionResult};

/// Something that can answer a completion request.
///
/// Implementations must be total: every outcome, including transport
/// faults, is reported through the returned [`CompletionResult`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion.
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult;
}

/// HTTP client for an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl GroqClient {
    /// Create a client with the given provider settings.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ProviderConfig::from_env()?)
    }

    /// The endpoint requests are sent to.
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    async fn send(&self, request: &CompletionRequest) -> std::result::Result<String, CompletionErrorKind> {
        let body = ChatRequest::from_completion(request);

        trace!(model = %body.model, "Sending chat request");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %truncate(&text, 200), "Completion provider returned an error");
            return Err(classify_status(status));
        }

        let bytes = response.bytes().await.map_err(|e| classify_transport(&e))?;
        let parsed: ChatResponse = serde_json::from_slice(&bytes).map_err(|e| {
            debug!(error = %e, "Failed to decode completion response");
            CompletionErrorKind::MalformedResponse
        })?;

        if let Some(usage) = &parsed.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion received"
            );
        }

        extract_reply(parsed)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult {
        let outcome = tokio::time::timeout(self.config.request_timeout, self.send(request))
            .await
            .unwrap_or(Err(CompletionErrorKind::Timeout));

        if let Err(kind) = &outcome {
            debug!(kind = %kind, model = %request.model_id, "Completion failed");
        }

        outcome.into()
    }
}

/// Map a non-success HTTP status to a failure kind.
pub fn classify_status(status: StatusCode) -> CompletionErrorKind {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionErrorKind::AuthError,
        StatusCode::TOO_MANY_REQUESTS => CompletionErrorKind::RateLimited,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => CompletionErrorKind::Timeout,
        _ => CompletionErrorKind::Unknown,
    }
}

fn classify_transport(err: &reqwest::Error) -> CompletionErrorKind {
    if err.is_timeout() {
        CompletionErrorKind::Timeout
    } else if err.is_decode() {
        CompletionErrorKind::MalformedResponse
    } else if let Some(status) = err.status() {
        classify_status(status)
    } else {
        CompletionErrorKind::Unknown
    }
}

/// Pull the reply text out of the first choice.
pub fn extract_reply(response: ChatResponse) -> std::result::Result<String, CompletionErrorKind> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(CompletionErrorKind::MalformedResponse)
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,

    /// Conversation messages.
    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate.
    pub max_tokens: u32,

    /// Temperature for generation.
    pub temperature: f32,
}

impl ChatRequest {
    /// Build the wire request: system persona followed by the user turn.
    pub fn from_completion(request: &CompletionRequest) -> Self {
        Self {
            model: request.model_id.clone(),
            messages: vec![
                ChatMessage::system(&request.persona),
                ChatMessage::user(request.user_message()),
            ],
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
        }
    }
}

/// A message in the chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: String,

    /// Text content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices.
    pub choices: Vec<ChatChoice>,

    /// Token usage information.
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// A choice in the completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message for this choice.
    pub message: ResponseMessage,
}

/// Message in a completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Text content of the response.
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage information. Providers may omit any of the counts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt.
    #[serde(default)]
    pub prompt_tokens: u32,

    /// Tokens in the completion.
    #[serde(default)]
    pub completion_tokens: u32,
}
