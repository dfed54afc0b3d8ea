use serde::{Deserialize, Serialize};

/// Position on the map viewport as percentages of its width (`x`) and
/// height (`y`). Both axes nominally span `0.0..=100.0`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
