//! Shared harness for the integration tests
//!
//! One wiremock server stands in for both the Telegram Bot API (under
//! `/bot<token>/...`) and the Kanttiinit API (`/areas`, `/menus`).

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{json, Value};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fuksibot::telegram::HandlerDeps;
use fuksicore::{KanttiinitClient, KanttiinitConfig};

pub const TEST_TOKEN: &str = "test_token_12345:ABCDEF";
pub const TEST_CHAT_ID: i64 = 123456789;
pub const BOT_USERNAME: &str = "fuksi_test_bot";

/// Fixed "today" for the date picker
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// Test harness with a mock server and real handler dependencies
pub struct BotHarness {
    pub server: MockServer,
    pub bot: Bot,
    pub deps: HandlerDeps,
}

impl BotHarness {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let bot = Bot::new(TEST_TOKEN).set_api_url(server.uri().parse().unwrap());

        let mut config = KanttiinitConfig::new(server.uri().parse().unwrap());
        config.timeout = Duration::from_secs(5);
        let kanttiinit = Arc::new(KanttiinitClient::new(config).unwrap());
        let deps = HandlerDeps::new(kanttiinit, BOT_USERNAME).with_today(today);

        Self { server, bot, deps }
    }

    /// Answers every Telegram method the bot uses
    pub async fn mock_telegram(&self) {
        mock_telegram_api(&self.server).await;
    }

    /// Serves `restaurants` as the Otaniemi area
    pub async fn mock_areas(&self, restaurants: Value) {
        Mock::given(method("GET"))
            .and(path("/areas"))
            .respond_with(ResponseTemplate::new(200).set_body_json(areas_body(restaurants)))
            .mount(&self.server)
            .await;
    }

    /// Requests whose path ends with `method_name`, compared case-insensitively
    pub async fn requests_to(&self, method_name: &str) -> Vec<Value> {
        requests_to(&self.server, method_name).await
    }

    pub async fn telegram_request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path().starts_with("/bot"))
            .count()
    }
}

pub fn areas_body(restaurants: Value) -> Value {
    json!([
        {"id": 1, "name": "Otaniemi", "restaurants": restaurants},
        {"id": 2, "name": "Helsinki", "restaurants": [{"id": 90, "name": "Chemicum"}]}
    ])
}

pub fn otaniemi_restaurants() -> Value {
    json!([
        {
            "id": 2,
            "name": "Kvarkki",
            "address": "Otakaari 3",
            "openingHours": ["10:30 - 14:00", "10:30 - 14:00", null, "10:30 - 14:00", "10:30 - 13:00", null, null]
        },
        {"id": 5, "name": "Dipoli", "address": "Otakaari 24"},
        {"id": 7, "name": "Täffä", "address": "Otakaari 22"}
    ])
}

fn sent_message(text: &str) -> Value {
    json!({
        "ok": true,
        "result": {
            "message_id": 42,
            "date": 1760000000,
            "chat": {"id": TEST_CHAT_ID, "type": "private", "first_name": "Test"},
            "from": {"id": 987654321, "is_bot": true, "first_name": "FuksiBot", "username": BOT_USERNAME},
            "text": text
        }
    })
}

fn telegram_path(method_name: &str) -> String {
    format!("(?i)^/bot[^/]+/{}$", method_name)
}

/// Mocks sendMessage, editMessageText, editMessageReplyMarkup,
/// deleteMessage and answerCallbackQuery
pub async fn mock_telegram_api(server: &MockServer) {
    for method_name in ["sendMessage", "editMessageText", "editMessageReplyMarkup"] {
        Mock::given(method("POST"))
            .and(path_regex(telegram_path(method_name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(sent_message("ok")))
            .mount(server)
            .await;
    }
    for method_name in ["deleteMessage", "answerCallbackQuery"] {
        Mock::given(method("POST"))
            .and(path_regex(telegram_path(method_name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": true})))
            .mount(server)
            .await;
    }
}

/// Mocks sendPoll with a poll message in the reply
pub async fn mock_send_poll(server: &MockServer) {
    let response = json!({
        "ok": true,
        "result": {
            "message_id": 77,
            "date": 1760000000,
            "chat": {"id": TEST_CHAT_ID, "type": "private", "first_name": "Test"},
            "poll": {
                "id": "5000000001",
                "question": "Lunch",
                "options": [
                    {"text": "11-12h", "voter_count": 0},
                    {"text": "12-13h", "voter_count": 0}
                ],
                "total_voter_count": 0,
                "is_closed": false,
                "is_anonymous": false,
                "type": "regular",
                "allows_multiple_answers": false
            }
        }
    });

    Mock::given(method("POST"))
        .and(path_regex(telegram_path("sendPoll")))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

/// JSON bodies of the requests whose path ends with `method_name`
pub async fn requests_to(server: &MockServer, method_name: &str) -> Vec<Value> {
    let suffix = format!("/{}", method_name.to_lowercase());
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path().to_lowercase().ends_with(&suffix))
        .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
        .collect()
}

/// Raw JSON of a text message from a user in the test chat
pub fn message_json(text: &str) -> Value {
    json!({
        "message_id": 1,
        "date": 1760000000,
        "chat": {"id": TEST_CHAT_ID, "type": "private", "first_name": "Test", "username": "testuser"},
        "from": {"id": 111, "is_bot": false, "first_name": "Test", "username": "testuser"},
        "text": text
    })
}

pub fn message(text: &str) -> Message {
    serde_json::from_value(message_json(text)).expect("Failed to deserialize message")
}

/// Forum supergroup used for topic messages
pub const FORUM_CHAT_ID: i64 = -1001234567890;

/// Raw JSON of a text message posted inside forum topic `thread_id`
pub fn topic_message_json(text: &str, thread_id: i32) -> Value {
    json!({
        "message_id": 2,
        "message_thread_id": thread_id,
        "is_topic_message": true,
        "date": 1760000000,
        "chat": {"id": FORUM_CHAT_ID, "type": "supergroup", "title": "Fuksit", "is_forum": true},
        "from": {"id": 111, "is_bot": false, "first_name": "Test", "username": "testuser"},
        "text": text
    })
}

pub fn topic_message(text: &str, thread_id: i32) -> Message {
    serde_json::from_value(topic_message_json(text, thread_id)).expect("Failed to deserialize topic message")
}

/// Raw JSON of a button press on the bot's message 42 in the test chat
pub fn callback_json(data: &str) -> Value {
    json!({
        "id": "callback_123",
        "from": {"id": 111, "is_bot": false, "first_name": "Test", "username": "testuser"},
        "message": {
            "message_id": 42,
            "date": 1760000000,
            "chat": {"id": TEST_CHAT_ID, "type": "private", "first_name": "Test", "username": "testuser"},
            "from": {"id": 987654321, "is_bot": true, "first_name": "FuksiBot", "username": BOT_USERNAME},
            "text": "Choose the action:"
        },
        "chat_instance": "chat_instance_123",
        "data": data
    })
}

pub fn callback(data: &str) -> CallbackQuery {
    serde_json::from_value(callback_json(data)).expect("Failed to deserialize callback")
}

pub fn message_update(text: &str) -> Update {
    serde_json::from_str(&json!({"update_id": 1000, "message": message_json(text)}).to_string())
        .expect("Failed to deserialize update")
}

pub fn callback_update(data: &str) -> Update {
    serde_json::from_str(&json!({"update_id": 1001, "callback_query": callback_json(data)}).to_string())
        .expect("Failed to deserialize update")
}
