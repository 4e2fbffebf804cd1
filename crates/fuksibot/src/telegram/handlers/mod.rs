//! Telegram bot handler tree configuration
//!
//! The handler tree is built by [`schema`] so integration tests can drive the
//! same tree as production code.

mod callbacks;
mod commands;
mod schema;
mod types;

pub use callbacks::handle_canteen_callback;
pub use commands::handle_canteens_command;
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
