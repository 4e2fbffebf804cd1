//! Full handler tree: routing of updates through `schema`
//!
//! Run with: cargo test --test dispatch_test

mod common;

use std::ops::ControlFlow;

use pretty_assertions::assert_eq;
use teloxide::dptree;

use common::{callback_update, message_update, otaniemi_restaurants, BotHarness};
use fuksibot::telegram::schema;

async fn dispatch(test: &BotHarness, update: teloxide::types::Update) -> bool {
    let result = schema(test.deps.clone())
        .dispatch(dptree::deps![test.bot.clone(), update])
        .await;

    match result {
        ControlFlow::Break(outcome) => {
            assert!(outcome.is_ok(), "handler failed: {:?}", outcome.err());
            true
        }
        ControlFlow::Continue(_) => false,
    }
}

#[tokio::test]
async fn test_canteens_command_is_handled() {
    let test = BotHarness::new().await;
    test.mock_telegram().await;
    test.mock_areas(otaniemi_restaurants()).await;

    assert!(dispatch(&test, message_update("/canteens")).await);

    let sent = test.requests_to("sendMessage").await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0]["text"].as_str().unwrap().contains("Kvarkki"));
}

#[tokio::test]
async fn test_command_addressed_to_this_bot() {
    let test = BotHarness::new().await;
    test.mock_telegram().await;
    test.mock_areas(otaniemi_restaurants()).await;

    assert!(dispatch(&test, message_update("/canteens@fuksi_test_bot")).await);
    assert_eq!(test.requests_to("sendMessage").await.len(), 1);
}

#[tokio::test]
async fn test_other_commands_get_no_reply() {
    let test = BotHarness::new().await;
    test.mock_telegram().await;
    test.mock_areas(otaniemi_restaurants()).await;

    for text in ["/start", "/help", "/canteens@someone_else_bot", "canteens please"] {
        assert!(!dispatch(&test, message_update(text)).await, "{:?} was handled", text);
    }

    assert_eq!(test.telegram_request_count().await, 0);
    assert!(test.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_callbacks_are_routed() {
    let test = BotHarness::new().await;
    test.mock_telegram().await;

    assert!(dispatch(&test, callback_update("ct:cancel")).await);

    assert_eq!(test.requests_to("deleteMessage").await.len(), 1);
    assert_eq!(test.requests_to("answerCallbackQuery").await.len(), 1);
}
