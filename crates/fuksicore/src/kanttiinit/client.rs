use chrono::NaiveDate;
use reqwest::{Client, Response};

use super::types::{Area, MenuItem, MenusResponse, Restaurant};
use crate::config::KanttiinitConfig;
use crate::error::{AppError, AppResult};

/// Thin async client over the Kanttiinit kitchen API.
///
/// Nothing is cached: every call performs exactly one HTTP request.
#[derive(Debug, Clone)]
pub struct KanttiinitClient {
    http: Client,
    config: KanttiinitConfig,
}

impl KanttiinitClient {
    pub fn new(config: KanttiinitConfig) -> AppResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Name of the area whose restaurants form the canteen listing
    pub fn area(&self) -> &str {
        &self.config.area
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Restaurants of the configured area, in API order.
    ///
    /// An unknown area yields an empty list rather than an error.
    pub async fn restaurants(&self) -> AppResult<Vec<Restaurant>> {
        let url = self.endpoint("areas");
        log::debug!("Fetching Kanttiinit areas from {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("lang", self.config.lang.as_str())])
            .send()
            .await?;
        let areas: Vec<Area> = ensure_success(response)?.json().await?;

        let restaurants = restaurants_in_area(areas, &self.config.area);
        log::debug!("Area {} has {} restaurants", self.config.area, restaurants.len());
        Ok(restaurants)
    }

    /// Looks up one restaurant of the configured area by id.
    pub async fn restaurant(&self, id: u32) -> AppResult<Option<Restaurant>> {
        Ok(self.restaurants().await?.into_iter().find(|r| r.id == id))
    }

    /// Menu of `restaurant_id` for `day`; empty when nothing is published.
    pub async fn menu(&self, restaurant_id: u32, day: NaiveDate) -> AppResult<Vec<MenuItem>> {
        let url = self.endpoint("menus");
        let day = day.format("%Y-%m-%d").to_string();
        let restaurant = restaurant_id.to_string();
        log::debug!("Fetching menu of restaurant {} for {}", restaurant, day);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("restaurants", restaurant.as_str()),
                ("days", day.as_str()),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await?;
        let mut menus: MenusResponse = ensure_success(response)?.json().await?;

        Ok(menus
            .remove(&restaurant)
            .and_then(|mut days| days.remove(&day))
            .unwrap_or_default())
    }
}

fn ensure_success(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(AppError::HttpStatus(status))
    }
}

/// Restaurants of the area named `name` (case-insensitive), or nothing.
pub fn restaurants_in_area(areas: Vec<Area>, name: &str) -> Vec<Restaurant> {
    areas
        .into_iter()
        .find(|area| area.name.eq_ignore_ascii_case(name))
        .map(|area| area.restaurants)
        .unwrap_or_default()
}
