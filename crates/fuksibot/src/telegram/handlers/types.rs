//! Handler types and dependencies

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use fuksicore::KanttiinitClient;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub kanttiinit: Arc<KanttiinitClient>,
    /// Bot username (without @), used to accept `/command@bot` in groups
    pub bot_username: String,
    /// Source of "today" for the menu date picker
    pub today: fn() -> NaiveDate,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(kanttiinit: Arc<KanttiinitClient>, bot_username: impl Into<String>) -> Self {
        Self {
            kanttiinit,
            bot_username: bot_username.into(),
            today: local_today,
        }
    }

    /// Replace the clock used for the date picker
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
