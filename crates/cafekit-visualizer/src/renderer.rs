//! Drink scene assembly
//!
//! Combines the outline, layer bands, ice and lid into one ordered list of
//! primitives, back to front:
//! outline, base, powder, milk, syrup, ice, topping dots, baseline, lid.

use crate::cache::IceCache;
use crate::ice::{generate_ice_cubes, IceCube};
use crate::layers::{allocate_layers, AllocationPolicy, LayerKind, LayerLayout};
use crate::outline::{compute_outline, Outline};
use crate::palette;
use crate::primitive::{Primitive, PrimitiveRole, Shape, Stroke};
use crate::toppings::{classify, ToppingBuckets};
use cafekit_core::{CustomizationState, DrinkSize, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// At most this many decorative dots are drawn for non-layer toppings
pub const MAX_TOPPING_DOTS: usize = 3;

pub const ICE_OPACITY: f64 = 0.35;

const LID_OVERHANG_FRACTION: f64 = 0.08;
const LID_HEIGHT_FRACTION: f64 = 0.12;

/// Rendering knobs coming from user settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub allocation_policy: AllocationPolicy,
    pub stroke: Stroke,
    pub show_lid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            allocation_policy: AllocationPolicy::default(),
            stroke: Stroke::new(palette::CUP_STROKE, 2.0),
            show_lid: true,
        }
    }
}

/// A fully laid out drink illustration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub size: DrinkSize,
    /// Viewport width
    pub width: f64,
    /// Viewport height, including the padding below the cup
    pub height: f64,
    pub outline: Outline,
    pub layout: LayerLayout,
    pub toppings: ToppingBuckets,
    pub ice_cubes: Vec<IceCube>,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn primitives_with_role(&self, role: PrimitiveRole) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.role == role)
    }
}

/// Render a drink without any caching
pub fn render_drink(state: &CustomizationState, options: &RenderOptions) -> Scene {
    let outline = compute_outline(state.size);
    let ice = generate_ice_cubes(state.size, state.ice, &outline);
    build_scene(state, options, outline, ice)
}

fn build_scene(
    state: &CustomizationState,
    options: &RenderOptions,
    outline: Outline,
    ice_cubes: Vec<IceCube>,
) -> Scene {
    let toppings = classify(&state.toppings);
    let layout = allocate_layers(state, &toppings, &outline, options.allocation_policy);

    let mut primitives = Vec::with_capacity(16 + ice_cubes.len());

    primitives.push(Primitive::stroked(
        PrimitiveRole::CupOutline,
        Shape::Polygon {
            points: outline.outer_polygon(),
        },
        options.stroke,
    ));

    for kind in [
        LayerKind::Base,
        LayerKind::Powder,
        LayerKind::Milk,
        LayerKind::Syrup,
    ] {
        if let Some(band) = layout.band(kind) {
            primitives.push(Primitive::filled(
                PrimitiveRole::Band(kind),
                Shape::Polygon {
                    points: outline.trapezoid_path(band.top_y, band.bottom_y),
                },
                band.color,
                kind.opacity(),
            ));
        }
    }

    primitives.extend(ice_cubes.iter().map(|cube| {
        Primitive::filled(
            PrimitiveRole::IceCube,
            Shape::rounded_rect(cube.x, cube.y, cube.side, cube.side, cube.side * 0.18),
            palette::ICE_FILL,
            ICE_OPACITY,
        )
        .with_stroke(Stroke::new(palette::ICE_STROKE, 1.0))
    }));

    push_topping_dots(&mut primitives, &outline, &toppings.other);

    primitives.push(Primitive::stroked(
        PrimitiveRole::Baseline,
        Shape::Line {
            from: outline.outer_bottom_left,
            to: outline.outer_bottom_right,
        },
        options.stroke,
    ));

    if options.show_lid {
        push_lid(&mut primitives, &outline, options.stroke);
    }

    let (width, height) = outline.viewport();
    debug!(
        "Rendered {} drink: {} bands, {} ice cubes, {} primitives",
        state.size,
        layout.bands.len(),
        ice_cubes.len(),
        primitives.len()
    );

    Scene {
        size: state.size,
        width,
        height,
        outline,
        layout,
        toppings,
        ice_cubes,
        primitives,
    }
}

fn push_topping_dots(primitives: &mut Vec<Primitive>, outline: &Outline, others: &[String]) {
    let count = others.len().min(MAX_TOPPING_DOTS);
    if count == 0 {
        return;
    }

    let radius = (outline.height * 0.012).max(3.0);
    let y = outline.inner_top_left.y + radius + 2.0;
    let left = outline.edge_x_left(y);
    let span = outline.edge_x_right(y) - left;

    for (i, name) in others.iter().take(count).enumerate() {
        let x = left + span * (i + 1) as f64 / (count + 1) as f64;
        primitives.push(Primitive::filled(
            PrimitiveRole::ToppingDot,
            Shape::Circle {
                center: Point::new(x, y),
                radius,
            },
            palette::topping_color(name),
            1.0,
        ));
    }
}

fn push_lid(primitives: &mut Vec<Primitive>, outline: &Outline, stroke: Stroke) {
    let top_width = outline.cup_top_width();
    let overhang = LID_OVERHANG_FRACTION * top_width;
    let lid_height = LID_HEIGHT_FRACTION * outline.cup_height();
    let lid_x = outline.outer_top_left.x - overhang;
    let lid_y = outline.outer_top_left.y - lid_height;
    let lid_width = top_width + 2.0 * overhang;

    primitives.push(
        Primitive::filled(
            PrimitiveRole::Lid,
            Shape::rounded_rect(lid_x, lid_y, lid_width, lid_height, lid_height / 2.0),
            palette::LID,
            1.0,
        )
        .with_stroke(stroke),
    );

    let gloss_height = lid_height * 0.18;
    primitives.push(Primitive::filled(
        PrimitiveRole::LidHighlight,
        Shape::rounded_rect(
            lid_x + lid_width * 0.12,
            lid_y + lid_height * 0.2,
            lid_width * 0.45,
            gloss_height,
            gloss_height / 2.0,
        ),
        palette::LID_HIGHLIGHT,
        0.6,
    ));

    let rim_height = lid_height * 0.14;
    primitives.push(Primitive::filled(
        PrimitiveRole::LidRim,
        Shape::rounded_rect(
            lid_x + overhang * 0.5,
            lid_y + lid_height * 0.78,
            lid_width - overhang,
            rim_height,
            rim_height / 2.0,
        ),
        palette::LID_RIM,
        1.0,
    ));
}

/// Stateful front end for the customization screen
///
/// Holds the render options and an ice cache, so repeated renders while the
/// customer edits milk or toppings skip the scatter.
#[derive(Debug, Default, Clone)]
pub struct DrinkVisualizer {
    options: RenderOptions,
    ice_cache: IceCache,
}

impl DrinkVisualizer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ice_cache: IceCache::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn ice_cache(&self) -> &IceCache {
        &self.ice_cache
    }

    pub fn render(&mut self, state: &CustomizationState) -> Scene {
        let outline = compute_outline(state.size);
        let ice = self.ice_cache.get_or_generate(state.size, state.ice).to_vec();
        build_scene(state, &self.options, outline, ice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(scene: &Scene) -> Vec<PrimitiveRole> {
        scene.primitives.iter().map(|p| p.role).collect()
    }

    #[test]
    fn test_plain_drink_order() {
        let state = CustomizationState::new("Americano", DrinkSize::Medium);
        let scene = render_drink(&state, &RenderOptions::default());
        assert_eq!(
            roles(&scene),
            vec![
                PrimitiveRole::CupOutline,
                PrimitiveRole::Band(LayerKind::Base),
                PrimitiveRole::Baseline,
                PrimitiveRole::Lid,
                PrimitiveRole::LidHighlight,
                PrimitiveRole::LidRim,
            ]
        );
        assert_eq!(scene.width, scene.outline.width);
        assert_eq!(scene.height, 320.0);
    }

    #[test]
    fn test_bands_drawn_back_to_front() {
        let state = CustomizationState::new("Latte", DrinkSize::Large)
            .with_milk("Oat Milk")
            .with_topping("Cocoa Powder")
            .with_sugar_level(50.0)
            .with_ice(true);
        let scene = render_drink(&state, &RenderOptions::default());
        let bands: Vec<_> = roles(&scene)
            .into_iter()
            .filter(|r| matches!(r, PrimitiveRole::Band(_)))
            .collect();
        assert_eq!(
            bands,
            vec![
                PrimitiveRole::Band(LayerKind::Base),
                PrimitiveRole::Band(LayerKind::Powder),
                PrimitiveRole::Band(LayerKind::Milk),
                PrimitiveRole::Band(LayerKind::Syrup),
            ]
        );

        let powder = scene
            .primitives_with_role(PrimitiveRole::Band(LayerKind::Powder))
            .next()
            .unwrap();
        assert_eq!(powder.opacity, 0.8);
        let syrup = scene
            .primitives_with_role(PrimitiveRole::Band(LayerKind::Syrup))
            .next()
            .unwrap();
        assert_eq!(syrup.opacity, 0.9);

        let ice: Vec<_> = scene.primitives_with_role(PrimitiveRole::IceCube).collect();
        assert_eq!(ice.len(), 16);
        assert!(ice.iter().all(|p| p.opacity == ICE_OPACITY && p.stroke.is_some()));
    }

    #[test]
    fn test_topping_dots_capped_at_three() {
        let state = CustomizationState::new("Milk Tea", DrinkSize::Medium)
            .with_topping("Boba Pearls")
            .with_topping("Grass Jelly")
            .with_topping("Pudding")
            .with_topping("Red Bean");
        let scene = render_drink(&state, &RenderOptions::default());
        let dots: Vec<_> = scene.primitives_with_role(PrimitiveRole::ToppingDot).collect();
        assert_eq!(dots.len(), 3);
        assert_eq!(dots[0].fill, Some(palette::TAPIOCA));
        assert_eq!(dots[1].fill, Some(palette::JELLY));
        assert_eq!(scene.toppings.other.len(), 4);
    }

    #[test]
    fn test_lid_geometry() {
        let scene = render_drink(
            &CustomizationState::new("Latte", DrinkSize::Medium),
            &RenderOptions::default(),
        );
        let lid = scene.primitives_with_role(PrimitiveRole::Lid).next().unwrap();
        let o = &scene.outline;
        let overhang = 0.08 * o.cup_top_width();
        match &lid.shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
                corner_radius,
            } => {
                assert!((x - (o.outer_top_left.x - overhang)).abs() < 1e-9);
                assert!((width - (o.cup_top_width() + 2.0 * overhang)).abs() < 1e-9);
                assert!((height - 0.12 * o.cup_height()).abs() < 1e-9);
                assert!((y + height - o.outer_top_left.y).abs() < 1e-9);
                assert!((corner_radius - height / 2.0).abs() < 1e-9);
            }
            other => panic!("lid should be a rect, got {:?}", other),
        }
    }

    #[test]
    fn test_lid_can_be_hidden() {
        let options = RenderOptions {
            show_lid: false,
            ..RenderOptions::default()
        };
        let scene = render_drink(&CustomizationState::default(), &options);
        assert_eq!(scene.primitives_with_role(PrimitiveRole::Lid).count(), 0);
        assert_eq!(scene.primitives.last().map(|p| p.role), Some(PrimitiveRole::Baseline));
    }

    #[test]
    fn test_visualizer_matches_pure_render() {
        let state = CustomizationState::new("Mocha", DrinkSize::Large)
            .with_milk("Almond Milk")
            .with_ice(true);
        let mut viz = DrinkVisualizer::default();
        let cached = viz.render(&state);
        let again = viz.render(&state.clone().with_milk("Soy Milk"));
        assert_eq!(cached, render_drink(&state, &RenderOptions::default()));
        assert_eq!(cached.ice_cubes, again.ice_cubes);
        assert_eq!(viz.ice_cache().hits(), 1);
        assert_eq!(viz.ice_cache().misses(), 1);
    }
}
