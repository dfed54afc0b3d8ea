//! Synthetic directions drawn as an L-shaped path over the street grid.
//!
//! The path travels the dominant axis first, turns once, then travels the
//! other axis. Each leg is broken into evenly spaced points so the polyline
//! animates smoothly on the map surface.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::{Axis, RouteConfig, RoutePath, DEFAULT_STEP, MAX_STEPS_PER_LEG};

use crate::models::Point;

/// Route from `start` to `end` with the default step length.
pub fn route_path(start: Point, end: Point) -> RoutePath {
    route_path_with(start, end, &RouteConfig::default())
}

/// Route from `start` to `end`.
///
/// Deterministic and total over finite coordinates. A zero-length request
/// yields exactly `[start, end]`; anything else yields at least
/// `[start, turn, end]`.
pub fn route_path_with(start: Point, end: Point, config: &RouteConfig) -> RoutePath {
    if start == end {
        return RoutePath::new(vec![start, end], None, None);
    }

    let step = config.effective_step();
    let primary = Axis::primary_for(end.x - start.x, end.y - start.y);
    let secondary = primary.other();

    let primary_from = primary.of(start);
    let primary_to = primary.of(end);
    let secondary_from = secondary.of(start);
    let secondary_to = secondary.of(end);

    let primary_steps = step_count(primary_to - primary_from, step);
    let secondary_steps = step_count(secondary_to - secondary_from, step);

    let capacity = primary_steps.saturating_add(secondary_steps).saturating_add(3);
    let mut points = Vec::with_capacity(capacity);
    points.push(start);

    // First leg: secondary axis pinned to the start.
    for i in 1..=primary_steps {
        let along = lerp(primary_from, primary_to, i, primary_steps);
        points.push(primary.compose(along, secondary_from));
    }

    let turn_index = points.len();
    points.push(primary.compose(primary_to, secondary_from));

    // Second leg: primary axis pinned to the destination.
    for i in 1..=secondary_steps {
        let across = lerp(secondary_from, secondary_to, i, secondary_steps);
        points.push(primary.compose(primary_to, across));
    }

    points.push(end);

    RoutePath::new(points, Some(turn_index), Some(primary))
}

/// Number of interpolation steps for a leg of length `delta`, capped at
/// [`MAX_STEPS_PER_LEG`].
fn step_count(delta: f64, step: f64) -> usize {
    let steps = (delta.abs() / step).ceil();
    if steps.is_nan() {
        return MAX_STEPS_PER_LEG;
    }
    steps.min(MAX_STEPS_PER_LEG as f64) as usize
}

/// Linear interpolation at `i / n`. The last step lands exactly on `to`.
fn lerp(from: f64, to: f64, i: usize, n: usize) -> f64 {
    if i >= n {
        to
    } else {
        from + (to - from) * (i as f64 / n as f64)
    }
}
