use serde::{Deserialize, Serialize};

use crate::models::Point;

/// Default distance, in viewport percent, covered by one interpolation step.
pub const DEFAULT_STEP: f64 = 10.0;

/// Upper bound on interpolation steps along a single leg. Longer legs, or
/// very small step lengths, get coarser spacing instead of more points.
pub const MAX_STEPS_PER_LEG: usize = 1_000;

/// Axis travelled along a leg of the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Primary axis for a displacement. Ties go vertical.
    pub fn primary_for(dx: f64, dy: f64) -> Self {
        if dx.abs() > dy.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Coordinate of `point` along this axis.
    pub fn of(self, point: Point) -> f64 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Build a point from a coordinate on this axis and one on the other axis.
    pub fn compose(self, along: f64, across: f64) -> Point {
        match self {
            Axis::Horizontal => Point::new(along, across),
            Axis::Vertical => Point::new(across, along),
        }
    }
}

/// Configuration for the route generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
    /// Length of one interpolation step. Non-positive or non-finite values
    /// fall back to [`DEFAULT_STEP`].
    pub step: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

impl RouteConfig {
    pub fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            DEFAULT_STEP
        }
    }
}

/// Ordered polyline from the traveler to a destination.
///
/// Never empty: the first point is the start and the last is the destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutePath {
    points: Vec<Point>,
    /// Index of the corner of the L. `None` only for the degenerate two-point path.
    turn_index: Option<usize>,
    /// Axis travelled first. `None` for the degenerate path.
    primary_axis: Option<Axis>,
}

impl RoutePath {
    pub(crate) fn new(points: Vec<Point>, turn_index: Option<usize>, primary_axis: Option<Axis>) -> Self {
        debug_assert!(points.len() >= 2);
        Self {
            points,
            turn_index,
            primary_axis,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn turn(&self) -> Option<Point> {
        self.turn_index.map(|idx| self.points[idx])
    }

    pub fn turn_index(&self) -> Option<usize> {
        self.turn_index
    }

    pub fn primary_axis(&self) -> Option<Axis> {
        self.primary_axis
    }
}
