//! CafeKit Settings Crate
//!
//! Handles application configuration: loading, saving and validating the
//! visualizer and ordering sections.

pub mod config;
pub mod error;

pub use config::{
    Config, ConfigFormat, OrderingSettings, VisualizerSettings, APP_DIR_NAME, CONFIG_FILE_NAME,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
