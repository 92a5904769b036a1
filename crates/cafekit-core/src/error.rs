//! Error handling for CafeKit
//!
//! Provides the error types shared across the workspace:
//! - Drink errors (customization values rejected at the UI boundary)
//! - A unified `Error` used by public APIs
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drink customization error type
///
/// Raised when a value coming from the ordering UI cannot be turned into a
/// valid customization. The visualization engine itself never produces these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrinkError {
    /// Cup size name is not one of the supported sizes
    #[error("Unknown drink size: {name}")]
    InvalidSize {
        /// The rejected size name.
        name: String,
    },

    /// Manual sugar level outside the 0..=100 range
    #[error("Sugar level {value} out of range (expected 0-100)")]
    InvalidSugarLevel {
        /// The rejected sugar level.
        value: f64,
    },

    /// Too many toppings for a single drink
    #[error("Too many toppings: {count} (maximum {max})")]
    TooManyToppings {
        /// Number of toppings requested.
        count: usize,
        /// Maximum supported.
        max: usize,
    },
}

/// Main error type for CafeKit
///
/// A unified error type that can represent any error from the core layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Drink customization error
    #[error(transparent)]
    Drink(#[from] DrinkError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a drink customization error
    pub fn is_drink_error(&self) -> bool {
        matches!(self, Error::Drink(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
