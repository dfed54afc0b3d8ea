use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routing::RoutePath;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NavigationStatus {
    #[default]
    Idle,
    Navigating,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsState {
    pub status: NavigationStatus,
    pub destination_id: Option<String>,
    pub destination_name: Option<String>,
    pub route: Option<RoutePath>,
    pub started_at: Option<DateTime<Utc>>,
}

impl DirectionsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.status == NavigationStatus::Navigating
    }

    /// Banner text shown while navigating.
    pub fn banner(&self) -> Option<String> {
        match (self.status, self.destination_name.as_deref()) {
            (NavigationStatus::Navigating, Some(name)) => Some(format!("Navigation active to {name}")),
            _ => None,
        }
    }

    pub fn begin(
        &mut self,
        destination_id: String,
        destination_name: String,
        route: RoutePath,
        started_at: DateTime<Utc>,
    ) {
        *self = Self {
            status: NavigationStatus::Navigating,
            destination_id: Some(destination_id),
            destination_name: Some(destination_name),
            route: Some(route),
            started_at: Some(started_at),
        };
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }
}
