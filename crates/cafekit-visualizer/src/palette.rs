//! Ingredient color tables
//!
//! Lookups never fail. Unknown names fall back to a per-ingredient default,
//! except milk, where an unrecognised name without "milk" in it means no
//! milk layer at all.

use cafekit_core::Color;

pub const COFFEE: Color = Color::from_hex(0x6f4e37);
pub const MATCHA: Color = Color::from_hex(0x8db255);
pub const CHOCOLATE: Color = Color::from_hex(0x5c3a21);
pub const TEA: Color = Color::from_hex(0xb5651d);

pub const OAT_MILK: Color = Color::from_hex(0xe8d3b0);
pub const ALMOND_MILK: Color = Color::from_hex(0xefdfc8);
pub const SOY_MILK: Color = Color::from_hex(0xf2e8d5);
pub const COCONUT_MILK: Color = Color::from_hex(0xfaf7f0);
pub const CREAM: Color = Color::from_hex(0xfff3c4);
pub const DEFAULT_MILK: Color = Color::from_hex(0xd2b48c);
/// Milk band color whenever milk toppings were added
pub const ADDITIONAL_MILK_HIGHLIGHT: Color = Color::from_hex(0xfff8ec);

pub const CARAMEL_SYRUP: Color = Color::from_hex(0xc68e17);
pub const VANILLA_SYRUP: Color = Color::from_hex(0xf3e5ab);
pub const HAZELNUT_SYRUP: Color = Color::from_hex(0xa67b5b);
pub const CHOCOLATE_SYRUP: Color = Color::from_hex(0x4b2e1e);
pub const DEFAULT_SYRUP: Color = Color::from_hex(0xd4a017);

pub const CINNAMON_POWDER: Color = Color::from_hex(0xa0522d);
pub const COCOA_POWDER: Color = Color::from_hex(0x4e342e);
pub const MATCHA_POWDER: Color = Color::from_hex(0x7ba05b);
pub const DEFAULT_POWDER: Color = Color::from_hex(0xc8a27a);

pub const TAPIOCA: Color = Color::from_hex(0x2b1b17);
pub const JELLY: Color = Color::from_hex(0x7cb342);
pub const COOKIE: Color = Color::from_hex(0x3e2723);
pub const DEFAULT_TOPPING: Color = Color::from_hex(0x8d6e63);

pub const CUP_STROKE: Color = Color::from_hex(0x4a4a4a);
pub const ICE_FILL: Color = Color::from_hex(0xe6f7ff);
pub const ICE_STROKE: Color = Color::from_hex(0xb3e5fc);
pub const LID: Color = Color::from_hex(0xf5f5f5);
pub const LID_HIGHLIGHT: Color = Color::WHITE;
pub const LID_RIM: Color = Color::from_hex(0xd0d0d0);

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

/// Base (coffee) layer color
pub fn base_color(name: &str) -> Color {
    let lower = name.to_lowercase();
    if lower.contains("matcha") {
        MATCHA
    } else if contains_any(&lower, &["chocolate", "mocha", "cocoa"]) {
        CHOCOLATE
    } else if lower.contains("tea") {
        TEA
    } else {
        COFFEE
    }
}

/// Milk layer color, `None` for "no milk"
pub fn milk_color(name: &str) -> Option<Color> {
    let lower = name.trim().to_lowercase();
    match lower.as_str() {
        "" | "no milk" | "none" => None,
        "oat milk" => Some(OAT_MILK),
        "almond milk" => Some(ALMOND_MILK),
        "soy milk" => Some(SOY_MILK),
        "coconut milk" => Some(COCONUT_MILK),
        "cream" | "heavy cream" => Some(CREAM),
        other if other.contains("milk") => Some(DEFAULT_MILK),
        _ => None,
    }
}

/// Syrup layer color
pub fn syrup_color(name: &str) -> Color {
    let lower = name.to_lowercase();
    if lower.contains("caramel") {
        CARAMEL_SYRUP
    } else if lower.contains("vanilla") {
        VANILLA_SYRUP
    } else if lower.contains("hazelnut") {
        HAZELNUT_SYRUP
    } else if contains_any(&lower, &["chocolate", "mocha"]) {
        CHOCOLATE_SYRUP
    } else {
        DEFAULT_SYRUP
    }
}

/// Powder layer color
pub fn powder_color(name: &str) -> Color {
    let lower = name.to_lowercase();
    if lower.contains("cinnamon") {
        CINNAMON_POWDER
    } else if lower.contains("cocoa") {
        COCOA_POWDER
    } else if lower.contains("matcha") {
        MATCHA_POWDER
    } else {
        DEFAULT_POWDER
    }
}

/// Decorative dot color for toppings that are not layers
pub fn topping_color(name: &str) -> Color {
    let lower = name.to_lowercase();
    if contains_any(&lower, &["boba", "pearl", "tapioca"]) {
        TAPIOCA
    } else if lower.contains("jelly") {
        JELLY
    } else if contains_any(&lower, &["oreo", "cookie"]) {
        COOKIE
    } else {
        DEFAULT_TOPPING
    }
}
