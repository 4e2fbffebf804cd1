//! Configuration for the lunch poll dispatcher and the canteen bot
//!
//! Both configs are read from the process environment. `from_lookup` takes
//! any `key -> value` function so tests can inject values without touching
//! the real environment.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::ConfigError;

/// Environment variable names
pub mod vars {
    /// Bot token used by the lunch poll dispatcher
    pub const POLL_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
    /// Chat that receives the lunch poll
    pub const POLL_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
    /// Forum topic inside the chat (optional)
    pub const POLL_THREAD_ID: &str = "TELEGRAM_THREAD_ID";
    /// Let voters pick several time slots (optional, default false)
    pub const POLL_MULTIPLE_ANSWERS: &str = "LUNCH_POLL_MULTIPLE_ANSWERS";

    /// Bot token for the canteen bot, checked in this order
    pub const BOT_TOKEN_CANDIDATES: [&str; 3] = ["API_TOKEN", "BOT_TOKEN", "TELOXIDE_TOKEN"];

    /// Custom Bot API server (optional)
    pub const BOT_API_URL: &str = "BOT_API_URL";
    pub const KANTTIINIT_URL: &str = "KANTTIINIT_URL";
    pub const KANTTIINIT_AREA: &str = "KANTTIINIT_AREA";
    pub const KANTTIINIT_LANG: &str = "KANTTIINIT_LANG";
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
}

/// Kanttiinit API defaults
pub mod kanttiinit {
    /// Base URL of the Kanttiinit kitchen API
    pub const BASE_URL: &str = "https://kitchen.kanttiinit.fi";
    /// Area whose restaurants make up the canteen listing
    pub const AREA: &str = "Otaniemi";
    pub const LANG: &str = "en";
    /// Public website shown by the "Link" action
    pub const WEBSITE: &str = "https://kanttiinit.fi";
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for outbound HTTP requests (in seconds).
    /// Must stay above [`POLLING_TIMEOUT_SECS`].
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Long-polling timeout teloxide's default listener sends with getUpdates
    pub const POLLING_TIMEOUT_SECS: u64 = 10;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Settings for the one-shot lunch poll dispatcher.
#[derive(Debug)]
pub struct PollConfig {
    pub bot_token: SecretString,
    pub chat_id: i64,
    pub thread_id: Option<i32>,
    pub api_url: Option<Url>,
    pub multiple_answers: bool,
}

impl PollConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, failing on the first missing or malformed value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = SecretString::from(required(&lookup, vars::POLL_BOT_TOKEN)?);
        let chat_id = parse_var(vars::POLL_CHAT_ID, &required(&lookup, vars::POLL_CHAT_ID)?)?;
        let thread_id = optional(&lookup, vars::POLL_THREAD_ID)
            .map(|raw| parse_var(vars::POLL_THREAD_ID, &raw))
            .transpose()?;
        let api_url = optional(&lookup, vars::BOT_API_URL)
            .map(|raw| parse_url(vars::BOT_API_URL, &raw))
            .transpose()?;
        let multiple_answers = optional(&lookup, vars::POLL_MULTIPLE_ANSWERS)
            .map(|raw| parse_bool(vars::POLL_MULTIPLE_ANSWERS, &raw))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            bot_token,
            chat_id,
            thread_id,
            api_url,
            multiple_answers,
        })
    }
}

/// Where and how to reach the Kanttiinit API.
#[derive(Debug, Clone)]
pub struct KanttiinitConfig {
    pub base_url: Url,
    pub area: String,
    pub lang: String,
    pub timeout: Duration,
}

impl KanttiinitConfig {
    /// Config pointing at `base_url` with the default area, language and timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            area: kanttiinit::AREA.to_string(),
            lang: kanttiinit::LANG.to_string(),
            timeout: network::timeout(),
        }
    }
}

/// Settings for the long-running canteen bot.
#[derive(Debug)]
pub struct BotConfig {
    pub bot_token: SecretString,
    pub api_url: Option<Url>,
    pub kanttiinit: KanttiinitConfig,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = vars::BOT_TOKEN_CANDIDATES
            .iter()
            .find_map(|name| optional(&lookup, name))
            .map(SecretString::from)
            .ok_or(ConfigError::Missing(vars::BOT_TOKEN_CANDIDATES[0]))?;
        let api_url = optional(&lookup, vars::BOT_API_URL)
            .map(|raw| parse_url(vars::BOT_API_URL, &raw))
            .transpose()?;

        let base_url = optional(&lookup, vars::KANTTIINIT_URL).unwrap_or_else(|| kanttiinit::BASE_URL.to_string());
        let mut kanttiinit = KanttiinitConfig::new(parse_url(vars::KANTTIINIT_URL, &base_url)?);
        if let Some(area) = optional(&lookup, vars::KANTTIINIT_AREA) {
            kanttiinit.area = area;
        }
        if let Some(lang) = optional(&lookup, vars::KANTTIINIT_LANG) {
            kanttiinit.lang = lang;
        }
        if let Some(raw) = optional(&lookup, vars::HTTP_TIMEOUT_SECS) {
            let secs: u64 = parse_var(vars::HTTP_TIMEOUT_SECS, &raw)?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    name: vars::HTTP_TIMEOUT_SECS,
                    reason: "must be greater than zero".to_string(),
                });
            }
            kanttiinit.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            bot_token,
            api_url,
            kanttiinit,
        })
    }

    /// Timeout of the Telegram HTTP client.
    ///
    /// Fixed to [`network::timeout()`] so long-polled getUpdates calls are
    /// never cut short; `HTTP_TIMEOUT_SECS` only applies to Kanttiinit.
    pub fn telegram_timeout(&self) -> Duration {
        network::timeout()
    }
}

/// Trimmed value of `name`, treating empty strings as unset.
fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
