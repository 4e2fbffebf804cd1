//! Inline keyboard actions of the /canteens flow
//!
//! Callback data format (always below Telegram's 64-byte limit):
//! - `ct:link`, `ct:menu`, `ct:hours`, `ct:send`, `ct:cancel`
//! - `ct:hours:<restaurant_id>`: opening hours of one canteen
//! - `ct:menu:<restaurant_id>`: date picker for one canteen
//! - `ct:day:<restaurant_id>:<YYYY-MM-DD>`: menu of one canteen on one day

use chrono::NaiveDate;

const PREFIX: &str = "ct:";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A button press in the canteen flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Show the Kanttiinit website link
    Link,
    /// Canteen picker leading to menus
    MenuCanteens,
    /// Canteen picker leading to opening hours
    HoursCanteens,
    OpeningHours(u32),
    /// Date picker for one canteen's menu
    MenuDates(u32),
    Menu { restaurant_id: u32, day: NaiveDate },
    /// Publish the preview by dropping its keyboard
    Send,
    /// Delete the message
    Cancel,
}

impl CallbackAction {
    /// Parses callback data; `None` for foreign, stale or malformed data.
    pub fn parse(data: &str) -> Option<Self> {
        let mut parts = data.strip_prefix(PREFIX)?.split(':');

        let action = match (parts.next()?, parts.next(), parts.next()) {
            ("link", None, None) => Self::Link,
            ("menu", None, None) => Self::MenuCanteens,
            ("hours", None, None) => Self::HoursCanteens,
            ("send", None, None) => Self::Send,
            ("cancel", None, None) => Self::Cancel,
            ("hours", Some(id), None) => Self::OpeningHours(id.parse().ok()?),
            ("menu", Some(id), None) => Self::MenuDates(id.parse().ok()?),
            ("day", Some(id), Some(day)) => Self::Menu {
                restaurant_id: id.parse().ok()?,
                day: NaiveDate::parse_from_str(day, DATE_FORMAT).ok()?,
            },
            _ => return None,
        };

        if parts.next().is_some() {
            return None;
        }
        Some(action)
    }

    /// Encodes the action as callback data
    pub fn to_data(self) -> String {
        match self {
            Self::Link => format!("{PREFIX}link"),
            Self::MenuCanteens => format!("{PREFIX}menu"),
            Self::HoursCanteens => format!("{PREFIX}hours"),
            Self::Send => format!("{PREFIX}send"),
            Self::Cancel => format!("{PREFIX}cancel"),
            Self::OpeningHours(id) => format!("{PREFIX}hours:{id}"),
            Self::MenuDates(id) => format!("{PREFIX}menu:{id}"),
            Self::Menu { restaurant_id, day } => {
                format!("{PREFIX}day:{restaurant_id}:{}", day.format(DATE_FORMAT))
            }
        }
    }
}
