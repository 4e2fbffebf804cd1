//! Inline keyboards for the /canteens flow

use chrono::{Days, NaiveDate};
use fuksicore::format::date_label;
use fuksicore::Restaurant;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::callbacks::CallbackAction;

/// Days offered by the menu date picker, starting today
pub const MENU_DAYS: u64 = 7;

fn button(text: impl Into<String>, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, action.to_data())
}

fn cancel_row() -> Vec<InlineKeyboardButton> {
    vec![button("Cancel", CallbackAction::Cancel)]
}

/// One action per row: Link, Menu, Opening Hours, Cancel
pub fn canteen_actions() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button("Link", CallbackAction::Link)],
        vec![button("Menu", CallbackAction::MenuCanteens)],
        vec![button("Opening Hours", CallbackAction::HoursCanteens)],
        cancel_row(),
    ])
}

/// Two canteens per row; an odd last canteen gets the full row.
pub fn canteen_picker(restaurants: &[Restaurant], action: fn(u32) -> CallbackAction) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = restaurants
        .chunks(2)
        .map(|pair| pair.iter().map(|r| button(r.name.trim(), action(r.id))).collect())
        .collect();
    rows.push(cancel_row());
    InlineKeyboardMarkup::new(rows)
}

/// One row per day for `MENU_DAYS` days starting at `today`
pub fn date_picker(restaurant_id: u32, today: NaiveDate) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = (0..MENU_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|day| vec![button(date_label(day), CallbackAction::Menu { restaurant_id, day })])
        .collect();
    rows.push(cancel_row());
    InlineKeyboardMarkup::new(rows)
}

/// Final preview buttons
pub fn cancel_send() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        button("Cancel", CallbackAction::Cancel),
        button("Send", CallbackAction::Send),
    ]])
}
