//! Drink customization model
//!
//! The customization screen produces one `CustomizationState` per beverage.
//! It is a plain immutable record: every change in the UI builds a new value
//! and the visualizer recomputes its scene from scratch.

use crate::error::{DrinkError, Result as CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of toppings the ordering UI accepts for one drink
pub const MAX_TOPPINGS: usize = 12;

/// Upper bound of the manual sugar slider
pub const MAX_SUGAR_LEVEL: f64 = 100.0;

/// Cup size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkSize {
    /// Medium cup
    Medium,
    /// Large cup
    Large,
}

impl DrinkSize {
    /// Design height of the cup in visualizer units
    pub fn cup_height(self) -> f64 {
        match self {
            Self::Medium => 300.0,
            Self::Large => 500.0,
        }
    }
}

impl Default for DrinkSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medium => write!(f, "Medium"),
            Self::Large => write!(f, "Large"),
        }
    }
}

impl FromStr for DrinkSize {
    type Err = DrinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "medium" | "m" | "regular" => Ok(Self::Medium),
            "large" | "l" => Ok(Self::Large),
            _ => Err(DrinkError::InvalidSize {
                name: s.to_string(),
            }),
        }
    }
}

/// Beverage customization selected by the customer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomizationState {
    /// Base drink (espresso, matcha, ...)
    #[serde(default)]
    pub base: String,
    /// Milk selection, "No Milk" when none
    #[serde(default)]
    pub milk: String,
    /// Syrup selection, "No Sweetener" when none
    #[serde(default)]
    pub syrup: String,
    /// Free-text topping names in the order they were picked
    #[serde(default)]
    pub toppings: Vec<String>,
    #[serde(default)]
    pub ice: bool,
    #[serde(default)]
    pub size: DrinkSize,
    /// Manual sweetness, 0-100. Independent of `syrup`.
    #[serde(default)]
    pub sugar_level: f64,
}

impl CustomizationState {
    /// Create a plain drink of the given base and size
    pub fn new(base: impl Into<String>, size: DrinkSize) -> Self {
        Self {
            base: base.into(),
            size,
            ..Self::default()
        }
    }

    pub fn with_milk(mut self, milk: impl Into<String>) -> Self {
        self.milk = milk.into();
        self
    }

    pub fn with_syrup(mut self, syrup: impl Into<String>) -> Self {
        self.syrup = syrup.into();
        self
    }

    pub fn with_topping(mut self, topping: impl Into<String>) -> Self {
        self.toppings.push(topping.into());
        self
    }

    pub fn with_ice(mut self, ice: bool) -> Self {
        self.ice = ice;
        self
    }

    pub fn with_sugar_level(mut self, level: f64) -> Self {
        self.sugar_level = level;
        self
    }

    /// Check the ranges the ordering UI promises to the visualizer.
    ///
    /// The visualizer never calls this; it tolerates out-of-range values.
    pub fn validate(&self) -> Result<(), DrinkError> {
        if !self.sugar_level.is_finite()
            || !(0.0..=MAX_SUGAR_LEVEL).contains(&self.sugar_level)
        {
            return Err(DrinkError::InvalidSugarLevel {
                value: self.sugar_level,
            });
        }
        if self.toppings.len() > MAX_TOPPINGS {
            return Err(DrinkError::TooManyToppings {
                count: self.toppings.len(),
                max: MAX_TOPPINGS,
            });
        }
        Ok(())
    }

    /// Parse a customization payload sent by the ordering UI and validate it
    pub fn from_json(payload: &str) -> CoreResult<Self> {
        let state: Self = serde_json::from_str(payload)?;
        state.validate()?;
        Ok(state)
    }
}
