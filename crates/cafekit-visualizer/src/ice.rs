//! Ice cube scatter
//!
//! Cubes are scattered with a small linear congruential generator so the
//! same drink always shows the same ice. The recurrence runs in wrapping
//! `u32` arithmetic and must not change: saved screenshots and other
//! clients depend on the exact placement.
//!
//! Cubes may overlap each other and the layer bands.

use crate::outline::Outline;
use cafekit_core::{lerp, DrinkSize};
use serde::{Deserialize, Serialize};

/// Numerical Recipes LCG: `seed = seed * 1664525 + 1013904223 (mod 2^32)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const MULTIPLIER: u32 = 1_664_525;
    pub const INCREMENT: u32 = 1_013_904_223;
    const MODULUS: f64 = 4_294_967_296.0;

    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Starting seed for a cup size
    pub fn for_size(size: DrinkSize) -> Self {
        match size {
            DrinkSize::Large => Self::new(12345),
            DrinkSize::Medium => Self::new(6789),
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the new state
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Advance and return a value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::MODULUS
    }
}

/// An axis-aligned square ice cube; `(x, y)` is its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IceCube {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}

/// Scatter parameters derived from the cup height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceParams {
    pub count: usize,
    pub min_side: f64,
    pub max_side: f64,
    pub top_pad: f64,
    pub side_pad: f64,
    pub bottom_pad: f64,
}

impl IceParams {
    pub fn for_size(size: DrinkSize) -> Self {
        let h = size.cup_height();
        let count = match size {
            DrinkSize::Large => 16,
            DrinkSize::Medium => 11,
        };
        let min_side = (h * 0.022).floor().max(10.0);
        let max_side = (h * 0.045).floor().max(min_side + 2.0);

        Self {
            count,
            min_side,
            max_side,
            top_pad: (h * 0.04).max(8.0),
            side_pad: (h * 0.035).max(6.0),
            bottom_pad: (h * 0.08).max(20.0),
        }
    }
}

/// Scatter ice cubes inside the cup; empty when ice is off
pub fn generate_ice_cubes(size: DrinkSize, ice_enabled: bool, outline: &Outline) -> Vec<IceCube> {
    if !ice_enabled {
        return Vec::new();
    }

    let params = IceParams::for_size(size);
    let mut rng = Lcg::for_size(size);
    let y_min = outline.inner_top_left.y + params.top_pad;
    let y_max = outline.inner_bottom_left.y - params.bottom_pad;

    (0..params.count)
        .map(|_| {
            let y = lerp(y_min, y_max, rng.next_f64());
            let left_x = outline.edge_x_left(y) + params.side_pad;
            let right_x = outline.edge_x_right(y) - params.side_pad;
            let side = lerp(params.min_side, params.max_side, rng.next_f64());
            let max_x = left_x.max(right_x - side);
            let x = lerp(left_x, max_x, rng.next_f64());
            IceCube { x, y, side }
        })
        .collect()
}
