//! 2D geometry primitives shared by the visualizer and its consumers
//!
//! Coordinates are unitless design units with the y axis pointing down,
//! matching SVG and canvas surfaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by (dx, dy)
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Linear interpolation between `a` and `b` at parameter `t`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
