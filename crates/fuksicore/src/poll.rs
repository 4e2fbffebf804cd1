//! The daily lunch poll: fixed time slots for tomorrow's lunch

use chrono::{Days, NaiveDate};

use crate::config::PollConfig;

/// Poll options, in display order
pub const LUNCH_SLOTS: [&str; 5] = ["11-12h", "12-13h", "13-14h", "14-15h", "later/other"];

/// A poll ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunchPoll {
    pub question: String,
    pub options: Vec<String>,
    pub is_anonymous: bool,
    pub allows_multiple_answers: bool,
}

impl LunchPoll {
    /// Poll for lunch on `day`, e.g. "Lunch Saturday (17.10.2026)".
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            question: format!("Lunch {}", day.format("%A (%d.%m.%Y)")),
            options: LUNCH_SLOTS.iter().map(|slot| slot.to_string()).collect(),
            is_anonymous: false,
            allows_multiple_answers: false,
        }
    }

    /// Poll for the day after `today`.
    pub fn for_tomorrow(today: NaiveDate) -> Self {
        Self::for_day(today.checked_add_days(Days::new(1)).unwrap_or(today))
    }

    pub fn allowing_multiple_answers(mut self, allow: bool) -> Self {
        self.allows_multiple_answers = allow;
        self
    }
}

/// Chat (and optional forum topic) that receives the poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTarget {
    pub chat_id: i64,
    pub thread_id: Option<i32>,
}

impl From<&PollConfig> for PollTarget {
    fn from(config: &PollConfig) -> Self {
        Self {
            chat_id: config.chat_id,
            thread_id: config.thread_id,
        }
    }
}
