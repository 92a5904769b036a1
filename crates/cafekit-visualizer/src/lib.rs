//! # CafeKit Visualizer
//!
//! Deterministic layered-drink illustration for the customization screen.
//! Turns a `CustomizationState` into a back-to-front list of drawing
//! primitives: a tapering cup, stacked ingredient bands, floating ice and
//! a lid. No I/O and no randomness beyond a fixed-seed generator.
//!
//! ## Pipeline
//!
//! ```text
//! CustomizationState
//!   ├── toppings   (classify names into milk/syrup/powder/other)
//!   ├── layers     (band heights, using outline + edges)
//!   ├── ice        (seeded scatter, memoized by cache)
//!   └── renderer   (Scene of Primitives)
//!         └── svg  (optional standalone SVG export)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cafekit_core::{CustomizationState, DrinkSize};
//! use cafekit_visualizer::{render_drink, to_svg, RenderOptions};
//!
//! let state = CustomizationState::new("Latte", DrinkSize::Large)
//!     .with_milk("Oat Milk")
//!     .with_ice(true)
//!     .with_sugar_level(40.0);
//!
//! let scene = render_drink(&state, &RenderOptions::default());
//! let svg = to_svg(&scene, 2);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod cache;
pub mod edges;
pub mod ice;
pub mod layers;
pub mod outline;
pub mod palette;
pub mod primitive;
pub mod renderer;
pub mod svg;
pub mod toppings;

pub use cache::IceCache;
pub use ice::{generate_ice_cubes, IceCube, IceParams, Lcg};
pub use layers::{
    allocate_layers, AllocationPolicy, LayerBand, LayerFlags, LayerKind, LayerLayout,
    MAX_SYRUP_FRACTION,
};
pub use outline::{compute_outline, Outline, WALL_THICKNESS};
pub use primitive::{Primitive, PrimitiveRole, Shape, Stroke};
pub use renderer::{render_drink, DrinkVisualizer, RenderOptions, Scene, MAX_TOPPING_DOTS};
pub use svg::{shape_to_path_data, to_svg};
pub use toppings::{classify, classify_topping, ToppingBuckets, ToppingCategory};
