//! # CafeKit
//!
//! Café ordering toolkit built around a deterministic layered-drink
//! visualizer. The customization screen feeds the current drink choices in
//! and gets back a cup illustration whose bands, ice and lid track every
//! change.
//!
//! ## Architecture
//!
//! CafeKit is organized as a workspace with multiple crates:
//!
//! 1. **cafekit-core** - Drink customization model, geometry and color types, errors
//! 2. **cafekit-visualizer** - Cup outline, layer allocation, ice scatter, scene and SVG output
//! 3. **cafekit-settings** - JSON/TOML configuration for the visualizer and ordering
//! 4. **cafekit-ordering** - Session, cart, order and payment interfaces plus status polling
//! 5. **cafekit** - Re-exports, logging setup and the `cafekit` command line tool

pub use cafekit_core::{
    Color, CustomizationState, DrinkError, DrinkSize, Error, Point, Result, MAX_SUGAR_LEVEL,
    MAX_TOPPINGS,
};

pub use cafekit_visualizer::{
    allocate_layers, classify, classify_topping, compute_outline, generate_ice_cubes,
    render_drink, to_svg, AllocationPolicy, DrinkVisualizer, IceCache, IceCube, LayerBand,
    LayerKind, LayerLayout, Outline, Primitive, PrimitiveRole, RenderOptions, Scene, Shape,
    Stroke, ToppingBuckets, ToppingCategory,
};

pub use cafekit_settings::{
    Config, ConfigError, ConfigFormat, OrderingSettings, SettingsError, SettingsResult,
    VisualizerSettings,
};

pub use cafekit_ordering::{
    require_session, CartItem, CartStore, MemoryCart, OrderApi, OrderReceipt, OrderRequest,
    OrderStatus, OrderingError, OrderingResult, PaymentGateway, PaymentMethod, PaymentStatus,
    ReceiptUpload, Session, SessionGate, StatusPoller,
};

use std::fmt;
use std::str::FromStr;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Output document produced by `render_document`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Validate a drink and render it as an SVG document or a JSON scene
pub fn render_document(
    state: &CustomizationState,
    settings: &VisualizerSettings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    state.validate()?;
    let mut visualizer = DrinkVisualizer::new(settings.render_options());
    let scene = visualizer.render(state);
    tracing::debug!(
        "Rendered {} {} with {} primitives",
        state.size,
        state.base,
        scene.primitives.len()
    );

    Ok(match format {
        OutputFormat::Svg => to_svg(&scene, settings.svg_precision),
        OutputFormat::Json => serde_json::to_string_pretty(&scene)?,
    })
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output, so documents written to stdout stay clean
/// - RUST_LOG environment variable support (INFO when unset)
/// - JSON lines instead of pretty output when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
