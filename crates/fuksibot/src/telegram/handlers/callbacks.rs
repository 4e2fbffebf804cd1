//! Callback query handling for the /canteens inline keyboards

use fuksicore::config::kanttiinit::WEBSITE;
use fuksicore::{format, AppResult};
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode};

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::callbacks::CallbackAction;
use crate::telegram::keyboards;

/// Handles a button press on a canteen message.
///
/// Every query is answered so the client stops its spinner. Failed
/// Kanttiinit requests are reported as an alert and never escape.
pub async fn handle_canteen_callback(bot: &Bot, q: CallbackQuery, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let callback_id = q.id.clone();

    let (chat_id, message_id) = match q.message.as_ref() {
        Some(message) => (message.chat().id, message.id()),
        None => {
            log::debug!("Callback {:?} without a message, ignoring", callback_id);
            bot.answer_callback_query(callback_id).await?;
            return Ok(());
        }
    };

    let Some(action) = q.data.as_deref().and_then(CallbackAction::parse) else {
        log::warn!("Unknown callback data {:?} in chat {}", q.data, chat_id);
        bot.answer_callback_query(callback_id).await?;
        if let Err(e) = bot.delete_message(chat_id, message_id).await {
            log::warn!("Failed to delete message with stale keyboard: {:?}", e);
        }
        return Ok(());
    };

    log::debug!("Callback {:?} in chat {}", action, chat_id);

    match apply_action(bot, chat_id, message_id, action, deps).await {
        Ok(()) => {
            bot.answer_callback_query(callback_id).await?;
        }
        Err(e) => {
            log::error!("Callback {:?} failed in chat {}: {}", action, chat_id, e);
            bot.answer_callback_query(callback_id)
                .text(format::error_reply(&e))
                .show_alert(true)
                .await?;
        }
    }

    Ok(())
}

async fn apply_action(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    action: CallbackAction,
    deps: &HandlerDeps,
) -> AppResult<()> {
    match action {
        CallbackAction::Link => {
            edit_message(bot, chat_id, message_id, WEBSITE.to_string(), Some(keyboards::cancel_send())).await
        }
        CallbackAction::MenuCanteens => {
            show_picker(bot, chat_id, message_id, deps, format::MENU_CANTEEN_PROMPT, CallbackAction::MenuDates).await
        }
        CallbackAction::HoursCanteens => {
            show_picker(
                bot,
                chat_id,
                message_id,
                deps,
                format::HOURS_CANTEEN_PROMPT,
                CallbackAction::OpeningHours,
            )
            .await
        }
        CallbackAction::OpeningHours(id) => {
            let text = match deps.kanttiinit.restaurant(id).await? {
                Some(restaurant) => format::opening_hours(&restaurant),
                None => format::UNKNOWN_CANTEEN_MESSAGE.to_string(),
            };
            edit_message(bot, chat_id, message_id, text, Some(keyboards::cancel_send())).await
        }
        CallbackAction::MenuDates(id) => {
            let keyboard = keyboards::date_picker(id, (deps.today)());
            edit_message(bot, chat_id, message_id, format::MENU_DATE_PROMPT.to_string(), Some(keyboard)).await
        }
        CallbackAction::Menu { restaurant_id, day } => {
            let text = match deps.kanttiinit.restaurant(restaurant_id).await? {
                Some(restaurant) => {
                    let items = deps.kanttiinit.menu(restaurant_id, day).await?;
                    format::menu(&restaurant.name, day, &items)
                }
                None => format::UNKNOWN_CANTEEN_MESSAGE.to_string(),
            };
            edit_message(bot, chat_id, message_id, text, Some(keyboards::cancel_send())).await
        }
        CallbackAction::Send => {
            bot.edit_message_reply_markup(chat_id, message_id).await?;
            Ok(())
        }
        CallbackAction::Cancel => {
            bot.delete_message(chat_id, message_id).await?;
            Ok(())
        }
    }
}

async fn show_picker(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    deps: &HandlerDeps,
    prompt: &str,
    action: fn(u32) -> CallbackAction,
) -> AppResult<()> {
    let restaurants = deps.kanttiinit.restaurants().await?;
    if restaurants.is_empty() {
        return edit_message(bot, chat_id, message_id, format::NO_CANTEENS_MESSAGE.to_string(), None).await;
    }
    let keyboard = keyboards::canteen_picker(&restaurants, action);
    edit_message(bot, chat_id, message_id, prompt.to_string(), Some(keyboard)).await
}

async fn edit_message(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
) -> AppResult<()> {
    let mut request = bot
        .edit_message_text(chat_id, message_id, text)
        .parse_mode(ParseMode::Html);
    if let Some(keyboard) = keyboard {
        request = request.reply_markup(keyboard);
    }
    request.await?;
    Ok(())
}
