//! fuksibot - Telegram side of the Otaniemi lunch helpers
//!
//! # Module Structure
//!
//! - `telegram`: command bot handlers, keyboards and bot setup
//! - `poll`: sending the daily lunch poll
//! - `cli`: argument parsers of both binaries

pub mod cli;
pub mod poll;
pub mod telegram;

// Re-export commonly used types for convenience
pub use poll::{dispatch_lunch_poll, run_lunch_poll, send_lunch_poll};
pub use telegram::{schema, HandlerDeps, HandlerError};
