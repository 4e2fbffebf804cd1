//! Telegram bot integration and handlers

pub mod bot;
pub mod callbacks;
pub mod handlers;
pub mod keyboards;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use callbacks::CallbackAction;
pub use handlers::{handle_canteen_callback, handle_canteens_command, schema, HandlerDeps, HandlerError};
