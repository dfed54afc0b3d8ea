use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Place;

/// Bookmark summary persisted when a user saves a place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedLocation {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedLocation {
    pub fn from_place(place: &Place, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            category: place.category.clone(),
            address: place.address.clone(),
            saved_at,
        }
    }
}
