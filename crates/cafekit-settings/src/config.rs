//! Configuration and settings management for CafeKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Visualizer settings (layer sizing, stroke, lid, SVG precision)
//! - Ordering settings (backend URL, status polling cadence)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use cafekit_core::Color;
use cafekit_visualizer::{palette, AllocationPolicy, RenderOptions, Stroke};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Name of the configuration directory under the platform config dir
pub const APP_DIR_NAME: &str = "cafekit";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Highest SVG coordinate precision accepted
pub const MAX_SVG_PRECISION: usize = 6;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

/// Drink visualizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// How milk and powder bands share the cup height
    pub allocation_policy: AllocationPolicy,
    /// Cup outline color
    pub stroke_color: Color,
    /// Cup outline width in design units
    pub stroke_width: f64,
    /// Draw the lid above the cup
    pub show_lid: bool,
    /// Decimals written for SVG coordinates
    pub svg_precision: usize,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            allocation_policy: AllocationPolicy::CountFlags,
            stroke_color: palette::CUP_STROKE,
            stroke_width: 2.0,
            show_lid: true,
            svg_precision: 2,
        }
    }
}

impl VisualizerSettings {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            allocation_policy: self.allocation_policy,
            stroke: Stroke::new(self.stroke_color, self.stroke_width),
            show_lid: self.show_lid,
        }
    }
}

/// Ordering backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingSettings {
    /// Base URL of the café API
    pub api_base_url: String,
    /// Delay between payment/order status polls in milliseconds
    pub poll_interval_ms: u64,
    /// Give up polling after this many milliseconds
    pub poll_timeout_ms: u64,
}

impl Default for OrderingSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            poll_interval_ms: 3000,
            poll_timeout_ms: 300_000,
        }
    }
}

impl OrderingSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Visualizer preferences
    pub visualizer: VisualizerSettings,
    /// Ordering backend preferences
    pub ordering: OrderingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform default location of the config file
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => self.to_toml_string()?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());

        Ok(())
    }

    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.visualizer.stroke_width > 0.0 && self.visualizer.stroke_width.is_finite()) {
            return Err(SettingsError::invalid(
                "visualizer.stroke_width",
                "must be > 0",
            ));
        }

        if self.visualizer.svg_precision > MAX_SVG_PRECISION {
            return Err(SettingsError::invalid(
                "visualizer.svg_precision",
                format!("must be <= {}", MAX_SVG_PRECISION),
            ));
        }

        if self.ordering.poll_interval_ms == 0 {
            return Err(SettingsError::invalid(
                "ordering.poll_interval_ms",
                "must be > 0",
            ));
        }

        if self.ordering.poll_timeout_ms < self.ordering.poll_interval_ms {
            return Err(SettingsError::invalid(
                "ordering.poll_timeout_ms",
                "must be >= poll_interval_ms",
            ));
        }

        if self.ordering.api_base_url.trim().is_empty() {
            return Err(SettingsError::invalid(
                "ordering.api_base_url",
                "must not be empty",
            ));
        }

        Ok(())
    }
}
