//! Cup outline geometry
//!
//! The cup is a symmetric trapezoid, wider at the rim than at the base.
//! The inner outline sits `WALL_THICKNESS` inside the outer one at every
//! corner and bounds every liquid layer.

use cafekit_core::{DrinkSize, Point};
use serde::{Deserialize, Serialize};

/// Wall thickness between outer and inner outline
pub const WALL_THICKNESS: f64 = 8.0;

/// Extra height below the cup reserved in the viewport
pub const VIEWPORT_PADDING: f64 = 20.0;

/// Design width as a multiple of design height
pub const ASPECT_RATIO: f64 = 1.1;

/// Outer and inner corners of the cup for one size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub width: f64,
    pub height: f64,
    pub outer_top_left: Point,
    pub outer_top_right: Point,
    pub outer_bottom_right: Point,
    pub outer_bottom_left: Point,
    pub inner_top_left: Point,
    pub inner_top_right: Point,
    pub inner_bottom_right: Point,
    pub inner_bottom_left: Point,
}

impl Outline {
    /// Viewport a drawing surface should map the design coordinates to
    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height + VIEWPORT_PADDING)
    }

    /// Vertical extent of the cup interior
    pub fn inner_height(&self) -> f64 {
        self.inner_bottom_left.y - self.inner_top_left.y
    }

    /// Width of the outer rim
    pub fn cup_top_width(&self) -> f64 {
        self.outer_top_right.x - self.outer_top_left.x
    }

    /// Outer height from rim to base
    pub fn cup_height(&self) -> f64 {
        self.outer_bottom_left.y - self.outer_top_left.y
    }

    /// Outer corners clockwise from the top left
    pub fn outer_polygon(&self) -> Vec<Point> {
        vec![
            self.outer_top_left,
            self.outer_top_right,
            self.outer_bottom_right,
            self.outer_bottom_left,
        ]
    }

    /// Inner corners clockwise from the top left
    pub fn inner_polygon(&self) -> Vec<Point> {
        vec![
            self.inner_top_left,
            self.inner_top_right,
            self.inner_bottom_right,
            self.inner_bottom_left,
        ]
    }
}

/// Compute the cup outline for a size
pub fn compute_outline(size: DrinkSize) -> Outline {
    let h = size.cup_height();
    let w = h * ASPECT_RATIO;
    let wall = WALL_THICKNESS;

    let outer_top_left = Point::new(0.15 * w, 0.15 * h);
    let outer_top_right = Point::new(0.85 * w, 0.15 * h);
    let outer_bottom_right = Point::new(0.75 * w, h);
    let outer_bottom_left = Point::new(0.25 * w, h);

    Outline {
        width: w,
        height: h,
        outer_top_left,
        outer_top_right,
        outer_bottom_right,
        outer_bottom_left,
        inner_top_left: outer_top_left.offset(wall, wall),
        inner_top_right: outer_top_right.offset(-wall, wall),
        inner_bottom_right: outer_bottom_right.offset(-wall, -wall),
        inner_bottom_left: outer_bottom_left.offset(wall, -wall),
    }
}
