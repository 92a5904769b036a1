//! Topping classification
//!
//! Topping names are free text typed by staff into the menu, so they are
//! bucketed by substring. Rules are checked in a fixed priority order and
//! the first match wins: "Oat Milk Powder" is a milk topping.

use serde::{Deserialize, Serialize};

/// Bucket a topping is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToppingCategory {
    Milk,
    Syrup,
    Powder,
    Other,
}

const MILK_KEYWORDS: &[&str] = &["milk", "cream"];
const SYRUP_KEYWORDS: &[&str] = &["syrup", "sweetener", "sugar"];
const POWDER_KEYWORDS: &[&str] = &["powder", "cinnamon", "cocoa", "spice"];

/// Classify a single topping name
pub fn classify_topping(name: &str) -> ToppingCategory {
    let lower = name.to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if has_any(MILK_KEYWORDS) {
        ToppingCategory::Milk
    } else if has_any(SYRUP_KEYWORDS) {
        ToppingCategory::Syrup
    } else if has_any(POWDER_KEYWORDS) {
        ToppingCategory::Powder
    } else {
        ToppingCategory::Other
    }
}

/// Toppings split into disjoint buckets, each keeping the input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToppingBuckets {
    pub milk: Vec<String>,
    pub syrup: Vec<String>,
    pub powder: Vec<String>,
    pub other: Vec<String>,
}

impl ToppingBuckets {
    pub fn bucket(&self, category: ToppingCategory) -> &[String] {
        match category {
            ToppingCategory::Milk => &self.milk,
            ToppingCategory::Syrup => &self.syrup,
            ToppingCategory::Powder => &self.powder,
            ToppingCategory::Other => &self.other,
        }
    }

    pub fn len(&self) -> usize {
        self.milk.len() + self.syrup.len() + self.powder.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify every topping into exactly one bucket
pub fn classify<S: AsRef<str>>(toppings: &[S]) -> ToppingBuckets {
    let mut buckets = ToppingBuckets::default();
    for topping in toppings {
        let name = topping.as_ref();
        let target = match classify_topping(name) {
            ToppingCategory::Milk => &mut buckets.milk,
            ToppingCategory::Syrup => &mut buckets.syrup,
            ToppingCategory::Powder => &mut buckets.powder,
            ToppingCategory::Other => &mut buckets.other,
        };
        target.push(name.to_string());
    }
    buckets
}
