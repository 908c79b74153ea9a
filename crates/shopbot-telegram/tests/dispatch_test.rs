//! Integration tests for event dispatch with a scripted completion client.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shopbot_agent::{
    CompletionClient, CompletionErrorKind, CompletionRequest, CompletionResult,
    CompletionSettings, ContextBuilder, InboundEvent,
};
use shopbot_telegram::{DispatchEngine, FormatHint, OutboundReply, FALLBACK_TEXT};

/// Returns a fixed result and records every request it sees.
struct ScriptedClient {
    result: CompletionResult,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    fn new(result: CompletionResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult {
        self.seen.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

fn engine_with(client: Arc<ScriptedClient>) -> DispatchEngine {
    DispatchEngine::new(ContextBuilder::new(CompletionSettings::default()), client)
}

fn anna_asks_about_letter() -> InboundEvent {
    InboundEvent {
        sender_display_name: "Anna".to_string(),
        raw_text: "сколько стоит письмо?".to_string(),
        command_token: None,
    }
}

#[tokio::test]
async fn test_success_reply_is_passed_through() {
    let client = ScriptedClient::new(CompletionResult::success(
        "Сопроводительное письмо стоит 800 ₽",
    ));
    let engine = engine_with(client.clone());

    let reply = engine.handle(anna_asks_about_letter()).await;

    assert_eq!(
        reply,
        OutboundReply {
            text: "Сопроводительное письмо стоит 800 ₽".to_string(),
            format_hint: FormatHint::Plain,
        }
    );

    let seen = client.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].sender_display_name, "Anna");
    assert_eq!(seen[0].user_text, "сколько стоит письмо?");
    assert_eq!(seen[0].temperature, 0.7);
    assert_eq!(seen[0].max_output_tokens, 500);
}

#[tokio::test]
async fn test_timeout_yields_fallback() {
    let engine = engine_with(ScriptedClient::new(CompletionResult::failure(
        CompletionErrorKind::Timeout,
    )));

    let reply = engine.handle(anna_asks_about_letter()).await;
    assert_eq!(reply.text, FALLBACK_TEXT);
    assert_eq!(reply.format_hint, FormatHint::Plain);
}

#[tokio::test]
async fn test_every_failure_kind_yields_identical_fallback() {
    let mut replies = Vec::new();
    for kind in CompletionErrorKind::ALL {
        let engine = engine_with(ScriptedClient::new(CompletionResult::failure(kind)));
        replies.push(engine.handle(anna_asks_about_letter()).await);
        replies.push(engine.handle(anna_asks_about_letter()).await);
    }

    let first = replies[0].clone();
    assert_eq!(first, OutboundReply::plain(FALLBACK_TEXT));
    assert!(replies.iter().all(|r| r == &first));
}

#[tokio::test]
async fn test_prices_command_lists_catalog() {
    let client = ScriptedClient::new(CompletionResult::success("unused"));
    let engine = engine_with(client.clone());

    let event = InboundEvent {
        sender_display_name: "Anna".to_string(),
        raw_text: "/prices".to_string(),
        command_token: Some("prices".to_string()),
    };
    let reply = engine.handle(event).await;

    assert_eq!(reply.format_hint, FormatHint::RichText);
    for (name, price) in [
        ("Готовое резюме", "500 ₽"),
        ("Индивидуальное резюме", "1500 ₽"),
        ("Сопроводительное письмо", "800 ₽"),
        ("Успешный старт", "2000 ₽"),
    ] {
        assert!(reply.text.contains(name), "missing {}", name);
        assert!(reply.text.contains(price), "missing {}", price);
    }
    assert!(client.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_command_replies_ignore_sender() {
    let engine = engine_with(ScriptedClient::new(CompletionResult::success("unused")));

    for token in ["start", "help", "prices", "contacts"] {
        let for_anna = engine.handle(InboundEvent::command("Anna", token)).await;
        let for_boris = engine.handle(InboundEvent::command("Boris", token)).await;
        assert_eq!(for_anna, for_boris, "/{} depends on sender", token);
        assert!(!for_anna.text.is_empty());
    }
}

#[tokio::test]
async fn test_unknown_command_suggests_alternatives() {
    let engine = engine_with(ScriptedClient::new(CompletionResult::success("unused")));

    let reply = engine
        .handle(InboundEvent::from_text("Anna", "/order резюме"))
        .await;

    assert_eq!(reply.format_hint, FormatHint::Plain);
    assert!(reply.text.contains("/order"));
    assert!(reply.text.contains("/prices"));
    assert_ne!(reply.text, FALLBACK_TEXT);
}

#[tokio::test]
async fn test_concurrent_events_each_get_one_reply() {
    let engine = Arc::new(engine_with(ScriptedClient::new(CompletionResult::success(
        "ok",
    ))));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                let event = if i % 2 == 0 {
                    InboundEvent::text(format!("user{}", i), "привет")
                } else {
                    InboundEvent::command(format!("user{}", i), "help")
                };
                engine.handle(event).await
            })
        })
        .collect();

    let mut replies = 0;
    for handle in handles {
        let reply = handle.await.unwrap();
        assert!(!reply.text.is_empty());
        replies += 1;
    }
    assert_eq!(replies, 32);
}
