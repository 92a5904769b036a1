//! Layer height allocation
//!
//! The cup interior is split into horizontal bands, top to bottom:
//! syrup, milk, powder and the base drink. Only the base band is
//! mandatory and it always reaches the inner bottom of the cup.
//!
//! The syrup band height follows the manual sugar slider, up to
//! `MAX_SYRUP_FRACTION` of the interior. Milk and powder bands share the
//! remaining height equally with the base band.

use crate::outline::Outline;
use crate::palette;
use crate::toppings::ToppingBuckets;
use cafekit_core::{Color, CustomizationState, MAX_SUGAR_LEVEL};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Largest share of the interior the syrup band can take
pub const MAX_SYRUP_FRACTION: f64 = 0.4;

/// Ingredient a band represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Syrup,
    Milk,
    Powder,
    Base,
}

impl LayerKind {
    /// Fill opacity the renderer uses for this band
    pub fn opacity(self) -> f64 {
        match self {
            Self::Syrup => 0.9,
            Self::Powder => 0.8,
            Self::Milk | Self::Base => 1.0,
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syrup => write!(f, "syrup"),
            Self::Milk => write!(f, "milk"),
            Self::Powder => write!(f, "powder"),
            Self::Base => write!(f, "base"),
        }
    }
}

/// How milk and powder bands divide the height left after syrup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationPolicy {
    /// Count the milk selection, milk toppings and powder separately.
    ///
    /// A drink with both a milk selection and milk toppings reserves two
    /// shares for its single milk band, leaving the extra share to the base.
    #[default]
    CountFlags,
    /// Count only the bands that are drawn.
    VisibleBands,
}

/// One horizontal slice of the cup interior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerBand {
    pub kind: LayerKind,
    pub top_y: f64,
    pub bottom_y: f64,
    pub color: Color,
}

impl LayerBand {
    /// Signed height; negative for an inverted base band
    pub fn height(&self) -> f64 {
        self.bottom_y - self.top_y
    }
}

/// Which optional layers a customization asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayerFlags {
    pub has_milk: bool,
    pub has_additional_milk: bool,
    pub has_syrup: bool,
    pub has_additional_syrup: bool,
    pub has_powder: bool,
    pub has_manual_sugar: bool,
}

impl LayerFlags {
    pub fn from_state(state: &CustomizationState, toppings: &ToppingBuckets) -> Self {
        let syrup = state.syrup.trim();
        Self {
            has_milk: palette::milk_color(&state.milk).is_some(),
            has_additional_milk: !toppings.milk.is_empty(),
            has_syrup: !syrup.is_empty() && !syrup.eq_ignore_ascii_case("no sweetener"),
            has_additional_syrup: !toppings.syrup.is_empty(),
            has_powder: !toppings.powder.is_empty(),
            has_manual_sugar: state.sugar_level > 0.0,
        }
    }

    pub fn wants_syrup_band(&self) -> bool {
        self.has_syrup || self.has_additional_syrup || self.has_manual_sugar
    }

    pub fn wants_milk_band(&self) -> bool {
        self.has_milk || self.has_additional_milk
    }

    /// Number of height shares milk and powder claim under `policy`
    pub fn share_count(&self, policy: AllocationPolicy) -> usize {
        match policy {
            AllocationPolicy::CountFlags => {
                usize::from(self.has_milk)
                    + usize::from(self.has_additional_milk)
                    + usize::from(self.has_powder)
            }
            AllocationPolicy::VisibleBands => {
                usize::from(self.wants_milk_band()) + usize::from(self.has_powder)
            }
        }
    }
}

/// Computed bands for one drink, ordered top to bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerLayout {
    pub bands: Vec<LayerBand>,
    pub flags: LayerFlags,
    pub total_height: f64,
}

impl LayerLayout {
    pub fn band(&self, kind: LayerKind) -> Option<&LayerBand> {
        self.bands.iter().find(|b| b.kind == kind)
    }

    /// Top of the syrup band, if the drink has one
    pub fn syrup_layer_y(&self) -> Option<f64> {
        self.band(LayerKind::Syrup).map(|b| b.top_y)
    }

    /// The base band; always present
    pub fn base(&self) -> &LayerBand {
        // allocate_layers always pushes the base band last
        &self.bands[self.bands.len() - 1]
    }
}

fn syrup_band_color(state: &CustomizationState, flags: &LayerFlags, toppings: &ToppingBuckets) -> Color {
    if flags.has_syrup {
        palette::syrup_color(&state.syrup)
    } else if let Some(first) = toppings.syrup.first() {
        palette::syrup_color(first)
    } else {
        palette::DEFAULT_SYRUP
    }
}

fn milk_band_color(state: &CustomizationState, flags: &LayerFlags) -> Color {
    if flags.has_additional_milk {
        palette::ADDITIONAL_MILK_HIGHLIGHT
    } else {
        palette::milk_color(&state.milk).unwrap_or(palette::DEFAULT_MILK)
    }
}

/// Allocate band heights inside the cup interior
///
/// The base band is not clamped: it always ends at the inner bottom, and if
/// the optional bands overran the interior its top lies below its bottom.
pub fn allocate_layers(
    state: &CustomizationState,
    toppings: &ToppingBuckets,
    outline: &Outline,
    policy: AllocationPolicy,
) -> LayerLayout {
    let flags = LayerFlags::from_state(state, toppings);

    let total_height = outline.inner_bottom_left.y - outline.inner_top_left.y;

    let syrup_intensity = (state.sugar_level / MAX_SUGAR_LEVEL).clamp(0.0, 1.0);
    let max_syrup_height = MAX_SYRUP_FRACTION * total_height;
    let actual_syrup_height = if flags.has_manual_sugar {
        max_syrup_height * syrup_intensity
    } else {
        0.0
    };

    let remaining_height = total_height - actual_syrup_height;
    let shares = flags.share_count(policy);
    let other_layer_height = if shares > 0 {
        remaining_height / (shares + 1) as f64
    } else {
        remaining_height
    };

    let mut bands = Vec::with_capacity(4);
    let mut current_y = outline.inner_top_left.y;

    if flags.wants_syrup_band() {
        bands.push(LayerBand {
            kind: LayerKind::Syrup,
            top_y: current_y,
            bottom_y: current_y + actual_syrup_height,
            color: syrup_band_color(state, &flags, toppings),
        });
        current_y += actual_syrup_height;
    }

    if flags.wants_milk_band() {
        bands.push(LayerBand {
            kind: LayerKind::Milk,
            top_y: current_y,
            bottom_y: current_y + other_layer_height,
            color: milk_band_color(state, &flags),
        });
        current_y += other_layer_height;
    }

    if flags.has_powder {
        let color = toppings
            .powder
            .first()
            .map(|name| palette::powder_color(name))
            .unwrap_or(palette::DEFAULT_POWDER);
        bands.push(LayerBand {
            kind: LayerKind::Powder,
            top_y: current_y,
            bottom_y: current_y + other_layer_height,
            color,
        });
        current_y += other_layer_height;
    }

    bands.push(LayerBand {
        kind: LayerKind::Base,
        top_y: current_y,
        bottom_y: outline.inner_bottom_left.y,
        color: palette::base_color(&state.base),
    });

    trace!(
        "Allocated {} bands (syrup {:.2}, share {:.2}, {} shares)",
        bands.len(),
        actual_syrup_height,
        other_layer_height,
        shares
    );

    LayerLayout {
        bands,
        flags,
        total_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::compute_outline;
    use crate::toppings::classify;
    use cafekit_core::DrinkSize;

    fn layout(state: &CustomizationState, policy: AllocationPolicy) -> LayerLayout {
        let outline = compute_outline(state.size);
        allocate_layers(state, &classify(&state.toppings), &outline, policy)
    }

    #[test]
    fn test_plain_drink_is_all_base() {
        let state = CustomizationState::new("Americano", DrinkSize::Medium);
        let layout = layout(&state, AllocationPolicy::CountFlags);
        assert_eq!(layout.bands.len(), 1);
        assert!(layout.syrup_layer_y().is_none());
        assert_eq!(layout.base().height(), layout.total_height);
    }

    #[test]
    fn test_no_sweetener_means_no_syrup_band() {
        let state = CustomizationState::new("Latte", DrinkSize::Medium).with_syrup("No Sweetener");
        let layout = layout(&state, AllocationPolicy::CountFlags);
        assert!(layout.band(LayerKind::Syrup).is_none());
    }

    #[test]
    fn test_full_sugar_takes_forty_percent() {
        let state = CustomizationState::new("Americano", DrinkSize::Large).with_sugar_level(100.0);
        let layout = layout(&state, AllocationPolicy::CountFlags);
        let syrup = layout.band(LayerKind::Syrup).unwrap();
        assert!((syrup.height() - 0.4 * layout.total_height).abs() < 1e-9);
        assert!((layout.base().height() - 0.6 * layout.total_height).abs() < 1e-9);
        assert_eq!(layout.base().top_y, syrup.bottom_y);
    }

    #[test]
    fn test_sugar_above_range_is_clamped() {
        let state = CustomizationState::new("Americano", DrinkSize::Medium).with_sugar_level(250.0);
        let layout = layout(&state, AllocationPolicy::CountFlags);
        let syrup = layout.band(LayerKind::Syrup).unwrap();
        assert!((syrup.height() - 0.4 * layout.total_height).abs() < 1e-9);
    }

    #[test]
    fn test_selected_syrup_without_sugar_is_zero_height() {
        let state = CustomizationState::new("Latte", DrinkSize::Medium).with_syrup("Vanilla");
        let layout = layout(&state, AllocationPolicy::CountFlags);
        let syrup = layout.band(LayerKind::Syrup).unwrap();
        assert_eq!(syrup.height(), 0.0);
        assert_eq!(syrup.color, palette::VANILLA_SYRUP);
    }

    #[test]
    fn test_milk_and_powder_split_evenly_with_base() {
        let state = CustomizationState::new("Latte", DrinkSize::Medium)
            .with_milk("Oat Milk")
            .with_topping("Cinnamon Powder");
        let layout = layout(&state, AllocationPolicy::CountFlags);
        let third = layout.total_height / 3.0;
        let milk = layout.band(LayerKind::Milk).unwrap();
        let powder = layout.band(LayerKind::Powder).unwrap();
        assert!((milk.height() - third).abs() < 1e-9);
        assert!((powder.height() - third).abs() < 1e-9);
        assert!((layout.base().height() - third).abs() < 1e-9);
        assert_eq!(milk.color, palette::OAT_MILK);
        assert_eq!(powder.color, palette::CINNAMON_POWDER);
    }

    #[test]
    fn test_milk_flags_counted_twice_by_default() {
        let state = CustomizationState::new("Latte", DrinkSize::Medium)
            .with_milk("Whole Milk")
            .with_topping("Whipped Cream");

        let counted = layout(&state, AllocationPolicy::CountFlags);
        let milk = counted.band(LayerKind::Milk).unwrap();
        assert!((milk.height() - counted.total_height / 3.0).abs() < 1e-9);
        assert_eq!(milk.color, palette::ADDITIONAL_MILK_HIGHLIGHT);
        assert_eq!(counted.bands.len(), 2);

        let visible = layout(&state, AllocationPolicy::VisibleBands);
        let milk = visible.band(LayerKind::Milk).unwrap();
        assert!((milk.height() - visible.total_height / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_syrup_topping_color_used_without_selection() {
        let state = CustomizationState::new("Latte", DrinkSize::Medium)
            .with_topping("Hazelnut Syrup")
            .with_sugar_level(50.0);
        let layout = layout(&state, AllocationPolicy::CountFlags);
        let syrup = layout.band(LayerKind::Syrup).unwrap();
        assert_eq!(syrup.color, palette::HAZELNUT_SYRUP);
        assert!((syrup.height() - 0.2 * layout.total_height).abs() < 1e-9);
    }

    #[test]
    fn test_bands_are_contiguous_and_ordered() {
        let state = CustomizationState::new("Mocha", DrinkSize::Large)
            .with_milk("Soy Milk")
            .with_syrup("Caramel")
            .with_topping("Cocoa Powder")
            .with_sugar_level(30.0);
        let layout = layout(&state, AllocationPolicy::CountFlags);
        let kinds: Vec<_> = layout.bands.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![LayerKind::Syrup, LayerKind::Milk, LayerKind::Powder, LayerKind::Base]
        );
        for pair in layout.bands.windows(2) {
            assert_eq!(pair[0].bottom_y, pair[1].top_y);
        }
        let outline = compute_outline(DrinkSize::Large);
        assert_eq!(layout.bands[0].top_y, outline.inner_top_left.y);
        assert_eq!(layout.base().bottom_y, outline.inner_bottom_left.y);
    }
}
