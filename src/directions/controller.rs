use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::{
    log_info,
    models::{Place, Point},
    routing::{route_path_with, RouteConfig},
};

use super::DirectionsState;

const ENABLE_LOGS: bool = true;

/// Tracks whether directions are showing and to where.
pub struct DirectionsController {
    state: Mutex<DirectionsState>,
    origin: Point,
    route_config: RouteConfig,
}

impl DirectionsController {
    pub fn new(origin: Point, route_config: RouteConfig) -> Self {
        Self {
            state: Mutex::new(DirectionsState::new()),
            origin,
            route_config,
        }
    }

    /// The traveler's position.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn current(&self) -> DirectionsState {
        self.lock().clone()
    }

    /// Start navigating to `place`. The route is recomputed from scratch on
    /// every call, replacing any route already showing.
    pub fn start(&self, place: &Place) -> DirectionsState {
        let route = route_path_with(self.origin, place.position, &self.route_config);
        log_info!(
            "Directions to {} ({} points)",
            place.id,
            route.len()
        );

        let mut state = self.lock();
        state.begin(place.id.clone(), place.name.clone(), route, Utc::now());
        state.clone()
    }

    /// Clear the route. Returns false if nothing was showing.
    pub fn stop(&self) -> bool {
        let mut state = self.lock();
        let was_active = state.is_active();
        state.stop();
        was_active
    }

    fn lock(&self) -> MutexGuard<'_, DirectionsState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
