//! Text rendering for chat replies (Telegram HTML parse mode)

use chrono::NaiveDate;

use crate::error::AppError;
use crate::kanttiinit::{MenuItem, Restaurant};
use crate::utils::escape_html;

/// Reply for an empty canteen listing
pub const NO_CANTEENS_MESSAGE: &str = "No canteen data available right now.";

/// Line shown in place of an empty menu
pub const NO_MENU_LINE: &str = "No menu available for this day.";

/// Shown when a button refers to a canteen that is no longer listed
pub const UNKNOWN_CANTEEN_MESSAGE: &str = "That canteen is no longer listed. Send /canteens again.";

pub const ACTION_PROMPT: &str = "Choose the action:";
pub const MENU_CANTEEN_PROMPT: &str = "<b>Menu</b>\nChoose the canteen:";
pub const MENU_DATE_PROMPT: &str = "<b>Menu date</b>\nChoose the date:";
pub const HOURS_CANTEEN_PROMPT: &str = "<b>Opening Hours</b>\nChoose the canteen:";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Numbered canteen listing, or [`NO_CANTEENS_MESSAGE`] when empty.
pub fn canteen_listing(area: &str, restaurants: &[Restaurant]) -> String {
    if restaurants.is_empty() {
        return NO_CANTEENS_MESSAGE.to_string();
    }

    let mut text = format!("<b>{} canteens</b>\n", escape_html(area));
    for (i, restaurant) in restaurants.iter().enumerate() {
        text.push_str(&format!("{}. {}", i + 1, escape_html(restaurant.name.trim())));
        if let Some(address) = restaurant.address.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
            text.push_str(&format!(" · <i>{}</i>", escape_html(address)));
        }
        text.push('\n');
    }
    text.push('\n');
    text.push_str(ACTION_PROMPT);
    text
}

/// Weekly opening hours; days without data render as "closed".
pub fn opening_hours(restaurant: &Restaurant) -> String {
    let mut text = format!("<b>{}</b>\n<code>", escape_html(restaurant.name.trim()));
    for (i, day) in WEEKDAYS.iter().enumerate() {
        let hours = restaurant
            .opening_hours
            .get(i)
            .and_then(|h| h.as_deref())
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or("closed");
        text.push_str(&format!("{}: {}\n", day, escape_html(hours)));
    }
    text.push_str("</code>");
    text
}

/// Numbered menu of `restaurant_name` on `day`.
pub fn menu(restaurant_name: &str, day: NaiveDate, items: &[MenuItem]) -> String {
    let mut text = format!(
        "<b>{} ({})</b>\n<code>",
        escape_html(restaurant_name.trim()),
        day.format("%Y-%m-%d")
    );

    if items.is_empty() {
        text.push_str(NO_MENU_LINE);
        text.push('\n');
    }
    for (i, item) in items.iter().enumerate() {
        text.push_str(&format!("{}. {}", i + 1, escape_html(item.title.trim())));
        if !item.properties.is_empty() {
            text.push_str(&format!(" [{}]", escape_html(&item.properties.join(", "))));
        }
        text.push('\n');
    }

    text.push_str("</code>");
    text
}

/// Button label for a day in the date picker, e.g. "16.10.26 (Fri)"
pub fn date_label(day: NaiveDate) -> String {
    day.format("%d.%m.%y (%a)").to_string()
}

/// User-visible text for a failed request
pub fn error_reply(err: &AppError) -> String {
    format!("⚠️ {}", err.user_message())
}
