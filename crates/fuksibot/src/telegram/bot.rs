//! Bot initialization utilities
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command registration in the Telegram UI

use std::time::Duration;

use fuksicore::AppResult;
use reqwest::ClientBuilder;
use secrecy::{ExposeSecret, SecretString};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use url::Url;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Otaniemi canteen commands.")]
    Canteens,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError)` - The HTTP client could not be built
pub fn create_bot(token: &SecretString, api_url: Option<&Url>, timeout: Duration) -> AppResult<Bot> {
    let client = ClientBuilder::new().timeout(timeout).build()?;
    let bot = Bot::with_client(token.expose_secret(), client);

    Ok(match api_url {
        Some(url) => {
            log::info!("Using custom Bot API URL: {}", url);
            bot.set_api_url(url.clone())
        }
        None => bot,
    })
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> ResponseResult<()> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}
