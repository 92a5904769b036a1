//! # CafeKit Core
//!
//! Core types shared by the CafeKit crates.
//! Provides the drink customization model, 2D geometry and color
//! primitives, and the workspace error types.

pub mod color;
pub mod drink;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use drink::{CustomizationState, DrinkSize, MAX_SUGAR_LEVEL, MAX_TOPPINGS};
pub use error::{DrinkError, Error, Result};
pub use geometry::{lerp, Point};
