//! Response types for the Kanttiinit API
//!
//! Only the fields the bot renders are kept; everything else in the JSON is
//! ignored during deserialization.

use std::collections::HashMap;

use serde::Deserialize;

/// A named group of restaurants, e.g. "Otaniemi"
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Area {
    pub name: String,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}

/// A single canteen.
///
/// `opening_hours` has one entry per weekday starting on Monday; `None`
/// means closed that day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<Option<String>>,
}

/// One course on a menu
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub title: String,
    /// Diet tags such as "L", "G" or "VEG"
    #[serde(default)]
    pub properties: Vec<String>,
}

/// `/menus` response: restaurant id -> ISO date -> courses
pub type MenusResponse = HashMap<String, HashMap<String, Vec<MenuItem>>>;
