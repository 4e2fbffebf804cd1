//! Command handler implementations (/canteens)

use fuksicore::format;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, Message, ParseMode};

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::keyboards;

/// Handle /canteens command
///
/// Fetches the canteen listing once and replies in the originating chat.
/// A failed fetch is reported to the chat and is not propagated, so the
/// dispatcher keeps serving the next update.
pub async fn handle_canteens_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let (text, keyboard): (String, Option<InlineKeyboardMarkup>) = match deps.kanttiinit.restaurants().await {
        Ok(restaurants) if restaurants.is_empty() => {
            log::info!("No canteens listed for area {}", deps.kanttiinit.area());
            (format::NO_CANTEENS_MESSAGE.to_string(), None)
        }
        Ok(restaurants) => {
            log::info!("Listing {} canteens for chat {}", restaurants.len(), msg.chat.id);
            (
                format::canteen_listing(deps.kanttiinit.area(), &restaurants),
                Some(keyboards::canteen_actions()),
            )
        }
        Err(e) => {
            log::error!("Failed to fetch canteens for chat {}: {}", msg.chat.id, e);
            (format::error_reply(&e), None)
        }
    };

    let mut request = bot
        .send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .disable_notification(true);
    if let Some(thread_id) = msg.thread_id {
        request = request.message_thread_id(thread_id);
    }
    if let Some(keyboard) = keyboard {
        request = request.reply_markup(keyboard);
    }
    request.await?;

    Ok(())
}
