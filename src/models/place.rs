//! Place reference data shown in the details panel.
//!
//! Places are immutable mock records; the persistence layer only ever
//! stores projections of them (see `SavedLocation`).

use serde::{Deserialize, Serialize};

use super::Point;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimingDay {
    pub day: String,
    pub hours: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_today: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    /// 0.0 to 5.0, one decimal.
    pub rating: f64,
    pub total_reviews: u32,
    pub price_level: String,
    pub address: String,
    pub neighborhood: String,
    pub phone: String,
    pub website: String,
    pub is_open: bool,
    pub opening_time: String,
    pub timings: Vec<TimingDay>,
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pin location on the map surface.
    pub position: Point,
}

impl Place {
    /// The timing row flagged as today, if the table has one.
    pub fn today(&self) -> Option<&TimingDay> {
        self.timings.iter().find(|timing| timing.is_today)
    }
}
