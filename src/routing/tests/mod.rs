mod determinism;
mod simple;

use super::{route_path, route_path_with, Axis, RouteConfig, RoutePath, MAX_STEPS_PER_LEG};
use crate::models::Point;

/// Helper to create a Point.
fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Assert two coordinates agree up to float noise.
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Assert the path begins at `start` and ends at `end` exactly.
fn assert_endpoints(path: &RoutePath, start: Point, end: Point) {
    assert_eq!(path.start(), start, "path should begin at the start point");
    assert_eq!(path.end(), end, "path should end at the destination");
    assert!(path.len() >= 2, "path too short: {:?}", path.points());
}

/// Assert every consecutive pair of points moves along one axis only.
fn assert_axis_aligned(path: &RoutePath) {
    for pair in path.points().windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.x == b.x || a.y == b.y,
            "diagonal segment from {a:?} to {b:?}"
        );
    }
}
