//! Client for the Kanttiinit kitchen API (https://github.com/Kanttiinit/kitchen)
//!
//! Only the two endpoints the bot needs are wrapped:
//! - `GET /areas` for the canteen listing of one area
//! - `GET /menus` for one canteen's menu on one day

mod client;
mod types;

pub use client::{restaurants_in_area, KanttiinitClient};
pub use types::{Area, MenuItem, MenusResponse, Restaurant};
