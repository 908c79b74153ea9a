//! Telegram transport: turns messages into events and replies into messages.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use shopbot_agent::InboundEvent;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ParseMode};
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use crate::commands::Command;
use crate::dispatch::DispatchEngine;
use crate::error::{Result, TelegramError};
use crate::reply::{FormatHint, OutboundReply};

/// Environment variable holding the bot token.
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Display name used when a message has no visible sender.
pub const DEFAULT_SENDER_NAME: &str = "Клиент";

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("Invalid markup tag regex"));

/// The resume shop Telegram bot.
pub struct ShopBot {
    /// The teloxide bot instance.
    bot: Bot,
    /// Shared by every handler invocation.
    engine: Arc<DispatchEngine>,
}

impl ShopBot {
    /// Create a bot with an explicit token.
    pub fn new(token: impl Into<String>, engine: DispatchEngine) -> Self {
        Self {
            bot: Bot::new(token),
            engine: Arc::new(engine),
        }
    }

    /// Create a bot using the `BOT_TOKEN` environment variable.
    pub fn from_env(engine: DispatchEngine) -> Result<Self> {
        let token = std::env::var(BOT_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(TelegramError::NoToken)?;
        Ok(Self::new(token, engine))
    }

    /// Get the bot's username.
    pub async fn get_me(&self) -> Result<String> {
        let me = self.bot.get_me().await?;
        Ok(me.username().to_string())
    }

    /// Publish the command menu. Failure only costs the menu.
    pub async fn register_commands(&self) {
        match self.bot.set_my_commands(Command::bot_commands()).await {
            Ok(_) => debug!("Command menu registered"),
            Err(e) => warn!(error = %e, "Failed to register command menu"),
        }
    }

    /// Run the long-polling loop until Ctrl+C.
    pub async fn start_polling(&self) -> Result<()> {
        info!("Starting Telegram bot in polling mode...");

        self.register_commands().await;

        let engine = Arc::clone(&self.engine);
        let handler = Update::filter_message()
            .filter_map(|msg: Message| inbound_event(&msg))
            .endpoint(move |bot: Bot, msg: Message, event: InboundEvent| {
                let engine = Arc::clone(&engine);
                async move { handle_event(bot, msg, event, engine).await }
            });

        info!("Bot is running! Send /start to begin.");

        Dispatcher::builder(self.bot.clone(), handler)
            .default_handler(|upd| async move {
                debug!("Ignoring non-text update: {:?}", upd.id);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

/// Build an event from a text message. Non-text messages yield `None`.
pub fn inbound_event(msg: &Message) -> Option<InboundEvent> {
    let text = msg.text()?;
    let first_name = msg.from.as_ref().map(|u| u.first_name.as_str());
    Some(InboundEvent::from_text(sender_name(first_name), text))
}

/// Display name for a sender, falling back to [`DEFAULT_SENDER_NAME`].
pub fn sender_name(first_name: Option<&str>) -> String {
    first_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_SENDER_NAME)
        .to_string()
}

async fn handle_event(
    bot: Bot,
    msg: Message,
    event: InboundEvent,
    engine: Arc<DispatchEngine>,
) -> ResponseResult<()> {
    if !event.is_command() {
        let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;
    }

    let reply = engine.handle(event).await;
    deliver(&bot, msg.chat.id, &reply).await?;

    debug!(chat_id = %msg.chat.id, "Reply sent");
    Ok(())
}

/// Send a reply, retrying rich text as plain text if Telegram rejects the markup.
pub async fn deliver(bot: &Bot, chat_id: ChatId, reply: &OutboundReply) -> ResponseResult<()> {
    match reply.format_hint {
        FormatHint::Plain => {
            bot.send_message(chat_id, &reply.text).await?;
        }
        FormatHint::RichText => {
            let sent = bot
                .send_message(chat_id, &reply.text)
                .parse_mode(ParseMode::Html)
                .await;
            if let Err(e) = sent {
                warn!(chat_id = %chat_id, error = %e, "Rich text rejected, sending plain text");
                bot.send_message(chat_id, strip_markup(&reply.text)).await?;
            }
        }
    }
    Ok(())
}

/// Remove HTML tags and decode the basic entities.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG
        .replace_all(text, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
