//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};
use teloxide::utils::command::BotCommands;

use super::callbacks::handle_canteen_callback;
use super::commands::handle_canteens_command;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same tree runs in production and in the integration tests. Updates
/// matching no branch fall through to the dispatcher's default handler.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(callback_handler(deps_callback))
}

/// Messages carrying a command from [`Command`], addressed to this bot or to nobody
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let bot_username = deps.bot_username.clone();

    Update::filter_message()
        .filter_map(move |msg: Message| msg.text().and_then(|text| Command::parse(text, &bot_username).ok()))
        .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Canteens => handle_canteens_command(&bot, &msg, &deps).await?,
                }
                Ok(())
            }
        })
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move { handle_canteen_callback(&bot, q, &deps).await }
    })
}
