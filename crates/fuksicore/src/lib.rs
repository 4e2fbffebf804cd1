//! fuksicore - everything fuksibot needs that does not talk to Telegram
//!
//! # Module Structure
//!
//! - `config`: environment-driven settings for both binaries
//! - `error`: `ConfigError`, `AppError` and `AppResult`
//! - `kanttiinit`: client for the Kanttiinit canteen API
//! - `poll`: the daily lunch poll
//! - `format`: HTML text for chat replies
//! - `logging`: tracing subscriber setup
//! - `utils`: HTML escaping for Telegram messages

pub mod config;
pub mod error;
pub mod format;
pub mod kanttiinit;
pub mod logging;
pub mod poll;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{BotConfig, KanttiinitConfig, PollConfig};
pub use error::{AppError, AppResult, ConfigError};
pub use kanttiinit::{KanttiinitClient, MenuItem, Restaurant};
pub use logging::init_logger;
pub use poll::{LunchPoll, PollTarget};
