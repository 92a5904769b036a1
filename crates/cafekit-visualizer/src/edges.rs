//! Inner wall interpolation
//!
//! Every band and every ice cube is placed against the tapering inner
//! walls, so all horizontal extents come from these two functions.

use crate::outline::Outline;
use cafekit_core::{lerp, Point};

impl Outline {
    /// Parameter of `y` along the inner wall, clamped to the cup interior
    fn wall_t(&self, y: f64) -> f64 {
        let span = self.inner_bottom_left.y - self.inner_top_left.y;
        ((y - self.inner_top_left.y) / span).clamp(0.0, 1.0)
    }

    /// X coordinate of the inner left wall at height `y`
    pub fn edge_x_left(&self, y: f64) -> f64 {
        lerp(
            self.inner_top_left.x,
            self.inner_bottom_left.x,
            self.wall_t(y),
        )
    }

    /// X coordinate of the inner right wall at height `y`
    pub fn edge_x_right(&self, y: f64) -> f64 {
        lerp(
            self.inner_top_right.x,
            self.inner_bottom_right.x,
            self.wall_t(y),
        )
    }

    /// Quadrilateral spanning the interior between `y_top` and `y_bottom`
    ///
    /// Points run top-left, top-right, bottom-right, bottom-left. An inverted
    /// range yields an inverted polygon; callers draw it as-is.
    pub fn trapezoid_path(&self, y_top: f64, y_bottom: f64) -> Vec<Point> {
        vec![
            Point::new(self.edge_x_left(y_top), y_top),
            Point::new(self.edge_x_right(y_top), y_top),
            Point::new(self.edge_x_right(y_bottom), y_bottom),
            Point::new(self.edge_x_left(y_bottom), y_bottom),
        ]
    }
}
