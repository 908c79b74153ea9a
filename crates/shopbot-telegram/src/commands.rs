//! Static command replies.

use shopbot_agent::CATALOG;
use teloxide::utils::command::BotCommands;

use crate::reply::OutboundReply;

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Начать работу")]
    Start,

    #[command(description = "Показать эту справку")]
    Help,

    #[command(description = "Посмотреть цены")]
    Prices,

    #[command(description = "Контакты")]
    Contacts,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 4] = [Self::Start, Self::Help, Self::Prices, Self::Contacts];

    /// Look up a command by its token (without the leading `/`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "prices" => Some(Self::Prices),
            "contacts" => Some(Self::Contacts),
            _ => None,
        }
    }

    /// The token as typed by users.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Prices => "prices",
            Self::Contacts => "contacts",
        }
    }
}

const GREETING: &str = "👋 Привет! Я ИИ-помощник магазина резюме.\n\n\
    Я помогу выбрать резюме или сопроводительное письмо. Просто напиши мне, что тебя интересует!";

const HELP: &str = "Доступные команды:\n\
    /start - Начать работу\n\
    /help - Показать эту справку\n\
    /prices - Посмотреть цены\n\
    /contacts - Контакты";

const CONTACTS: &str = "📧 По вопросам заказов: shop@example.com\n\
    📱 Поддержка: @support_username";

/// Reply for a recognized command.
pub fn route(command: Command) -> OutboundReply {
    match command {
        Command::Start => OutboundReply::plain(GREETING),
        Command::Help => OutboundReply::plain(HELP),
        Command::Prices => OutboundReply::rich(prices_text()),
        Command::Contacts => OutboundReply::plain(CONTACTS),
    }
}

/// Reply for a command token nobody handles.
pub fn unknown_command(token: &str) -> OutboundReply {
    let token = token.trim();
    let shown = if token.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", token)
    };

    let suggestions: Vec<String> = Command::ALL
        .iter()
        .map(|c| format!("/{}", c.token()))
        .collect();

    OutboundReply::plain(format!(
        "Неизвестная команда: {}\n\nВозможно, вы имели в виду одну из этих команд:\n{}",
        shown,
        suggestions.join("\n")
    ))
}

fn prices_text() -> String {
    let items: Vec<String> = CATALOG
        .iter()
        .map(|item| match item.note {
            Some(note) => format!("• {} — {} ₽ ({})", item.name, item.price_rub, note),
            None => format!("• {} — {} ₽", item.name, item.price_rub),
        })
        .collect();

    format!(
        "💰 <b>Наши цены:</b>\n\n{}\n\nДля заказа напишите мне, что хотите, и укажите ваше имя и email!",
        items.join("\n")
    )
}
