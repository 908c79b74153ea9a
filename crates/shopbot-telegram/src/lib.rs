//! Telegram front end for the resume shop bot.
//!
//! Every text message becomes an [`InboundEvent`](shopbot_agent::InboundEvent)
//! handled by the [`DispatchEngine`]: commands get fixed replies, free text is
//! answered by the language model, and any completion failure is answered
//! with a fixed fallback message. Each message gets exactly one reply.
//!
//! # Environment Variables
//!
//! Required:
//! - `BOT_TOKEN`: Bot token from @BotFather
//! - `GROQ_API_KEY`: Groq API key
//!
//! Optional:
//! - `GROQ_MODEL`: Model to use (default: llama-3.3-70b-versatile)
//! - `GROQ_API_URL`: Chat completions endpoint
//! - `GROQ_TIMEOUT_SECS`: Per-request timeout (default: 30)
//!
//! # Commands
//!
//! - `/start` - Greeting
//! - `/help` - List commands
//! - `/prices` - Price list
//! - `/contacts` - Contact details

pub mod bot;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod reply;

pub use bot::ShopBot;
pub use commands::{route, Command};
pub use dispatch::{DispatchEngine, FALLBACK_TEXT};
pub use error::{Result, TelegramError};
pub use reply::{FormatHint, OutboundReply};
