//! Property tests for layer allocation and ice scatter

use cafekit_core::{CustomizationState, DrinkSize};
use cafekit_visualizer::{
    allocate_layers, classify, compute_outline, generate_ice_cubes, AllocationPolicy, IceParams,
    LayerKind,
};
use proptest::prelude::*;

fn size_strategy() -> impl Strategy<Value = DrinkSize> {
    prop_oneof![Just(DrinkSize::Medium), Just(DrinkSize::Large)]
}

fn topping_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Whipped Cream".to_string()),
        Just("Milk Foam".to_string()),
        Just("Caramel Syrup".to_string()),
        Just("Brown Sugar".to_string()),
        Just("Cinnamon Powder".to_string()),
        Just("Cocoa Dust".to_string()),
        Just("Boba Pearls".to_string()),
        "[a-zA-Z ]{0,16}",
    ]
}

fn state_strategy() -> impl Strategy<Value = CustomizationState> {
    (
        size_strategy(),
        prop_oneof![
            Just("No Milk".to_string()),
            Just("Oat Milk".to_string()),
            Just("Cream".to_string()),
            Just("Whole Milk".to_string()),
            Just(String::new()),
        ],
        prop_oneof![
            Just("No Sweetener".to_string()),
            Just("Vanilla".to_string()),
            Just(String::new()),
        ],
        prop::collection::vec(topping_strategy(), 0..6),
        any::<bool>(),
        0.0f64..=100.0,
    )
        .prop_map(|(size, milk, syrup, toppings, ice, sugar_level)| CustomizationState {
            base: "Espresso".to_string(),
            milk,
            syrup,
            toppings,
            ice,
            size,
            sugar_level,
        })
}

proptest! {
    #[test]
    fn bands_are_contiguous_and_end_at_inner_bottom(
        state in state_strategy(),
        visible in any::<bool>(),
    ) {
        let policy = if visible { AllocationPolicy::VisibleBands } else { AllocationPolicy::CountFlags };
        let outline = compute_outline(state.size);
        let layout = allocate_layers(&state, &classify(&state.toppings), &outline, policy);

        prop_assert_eq!(layout.bands[0].top_y, outline.inner_top_left.y);
        prop_assert_eq!(layout.base().kind, LayerKind::Base);
        prop_assert_eq!(layout.base().bottom_y, outline.inner_bottom_left.y);
        for pair in layout.bands.windows(2) {
            prop_assert_eq!(pair[0].bottom_y, pair[1].top_y);
        }
        prop_assert!(layout.base().height() >= 0.0);
    }

    #[test]
    fn every_topping_lands_in_one_bucket(toppings in prop::collection::vec(topping_strategy(), 0..10)) {
        let buckets = classify(&toppings);
        prop_assert_eq!(buckets.len(), toppings.len());
    }

    #[test]
    fn ice_cubes_stay_inside_the_walls(size in size_strategy()) {
        let outline = compute_outline(size);
        let params = IceParams::for_size(size);
        let cubes = generate_ice_cubes(size, true, &outline);
        prop_assert_eq!(cubes.len(), params.count);
        for cube in cubes {
            prop_assert!(cube.y >= outline.inner_top_left.y);
            prop_assert!(cube.y + cube.side <= outline.inner_bottom_left.y);
            prop_assert!(cube.x >= outline.edge_x_left(cube.y));
            prop_assert!(cube.x <= outline.edge_x_right(cube.y));
        }
    }
}
