//! Completion pipeline for the resume shop bot.
//!
//! This crate holds everything between an inbound chat message and the
//! language model:
//!
//! - [`InboundEvent`]: one user message, optionally carrying a command token
//! - [`ContextBuilder`]: attaches the shop persona and generation parameters
//! - [`CompletionClient`]: the seam to the model provider, with [`GroqClient`]
//!   as the HTTP implementation
//! - [`CompletionResult`]: tagged outcome of a call, never an error
//!
//! # Environment Variables
//!
//! Required:
//! - `GROQ_API_KEY`: Groq API key
//!
//! Optional:
//! - `GROQ_MODEL`: Model to use (default: llama-3.3-70b-versatile)
//! - `GROQ_API_URL`: Chat completions endpoint
//! - `GROQ_TIMEOUT_SECS`: Per-request timeout (default: 30)
//!
//! # Example
//!
//! ```no_run
//! use shopbot_agent::{CompletionClient, CompletionSettings, ContextBuilder, GroqClient, InboundEvent};
//!
//! # async fn run() -> shopbot_agent::Result<()> {
//! let client = GroqClient::from_env()?;
//! let builder = ContextBuilder::new(CompletionSettings::from_env());
//!
//! let request = builder.build(&InboundEvent::text("Anna", "сколько стоит письмо?"));
//! let result = client.complete(&request).await;
//! println!("{:?}", result);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod persona;
pub mod response;

pub use client::{CompletionClient, GroqClient};
pub use config::{CompletionSettings, ProviderConfig};
pub use context::{CompletionRequest, ContextBuilder};
pub use error::{AgentError, Result};
pub use event::InboundEvent;
pub use persona::{CatalogItem, CATALOG, DEFAULT_PERSONA};
pub use response::{CompletionErrorKind, CompletionResult};
