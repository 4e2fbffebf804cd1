use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

use fuksibot::cli::BotCli;
use fuksibot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use fuksicore::{init_logger, BotConfig, KanttiinitClient};

/// Entry point of the /canteens bot
///
/// # Errors
/// Returns an error if configuration is missing or the Bot API cannot be reached at startup.
#[tokio::main]
async fn main() -> Result<()> {
    let _cli = BotCli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    init_logger()?;

    let config = BotConfig::from_env()?;
    run_bot(config).await
}

async fn run_bot(config: BotConfig) -> Result<()> {
    log::info!("Starting bot...");

    let bot = create_bot(&config.bot_token, config.api_url.as_ref(), config.telegram_timeout())?;

    let bot_info = bot.get_me().await?;
    let bot_username = bot_info.username.clone().unwrap_or_default();
    log::info!("Bot username: {:?}, Bot ID: {}", bot_info.username, bot_info.id);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let kanttiinit = Arc::new(KanttiinitClient::new(config.kanttiinit.clone())?);
    log::info!(
        "Serving canteens of {} from {}",
        kanttiinit.area(),
        config.kanttiinit.base_url
    );
    let deps = HandlerDeps::new(kanttiinit, bot_username);

    Dispatcher::builder(bot, schema(deps))
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
