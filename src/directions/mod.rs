pub mod controller;
pub mod state;

pub use controller::DirectionsController;
pub use state::{DirectionsState, NavigationStatus};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::Point,
        places::PlaceCatalog,
        routing::{route_path, RouteConfig},
    };

    fn controller() -> DirectionsController {
        DirectionsController::new(Point::new(30.0, 70.0), RouteConfig::default())
    }

    #[test]
    fn starts_idle() {
        let directions = controller();
        let state = directions.current();
        assert_eq!(state.status, NavigationStatus::Idle);
        assert!(state.route.is_none());
        assert!(state.banner().is_none());
    }

    #[test]
    fn start_routes_from_origin_to_place() {
        let catalog = PlaceCatalog::default();
        let blue_bottle = catalog.get("blue-bottle-coffee").unwrap();
        let directions = controller();

        let state = directions.start(blue_bottle);
        assert!(state.is_active());
        assert_eq!(state.destination_id.as_deref(), Some("blue-bottle-coffee"));
        assert_eq!(
            state.banner().as_deref(),
            Some("Navigation active to Blue Bottle Coffee")
        );

        let route = state.route.unwrap();
        assert_eq!(route, route_path(directions.origin(), blue_bottle.position));
        assert_eq!(route.start(), Point::new(30.0, 70.0));
        assert_eq!(route.end(), blue_bottle.position);
    }

    #[test]
    fn new_destination_replaces_route() {
        let catalog = PlaceCatalog::default();
        let directions = controller();
        directions.start(catalog.get("blue-bottle-coffee").unwrap());

        let ferry = catalog.get("ferry-building").unwrap();
        let state = directions.start(ferry);
        assert_eq!(state.destination_id.as_deref(), Some("ferry-building"));
        assert_eq!(state.route.unwrap().end(), ferry.position);
    }

    #[test]
    fn stop_clears_navigation() {
        let catalog = PlaceCatalog::default();
        let directions = controller();
        assert!(!directions.stop());

        directions.start(catalog.get("tartine-bakery").unwrap());
        assert!(directions.stop());
        assert_eq!(directions.current(), DirectionsState::default());
    }
}
