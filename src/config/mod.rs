//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/suggest-map/config.toml

pub mod defaults;

use crate::constants::map::{EAST, NORTH, SOUTH, WEST};
use crate::error::{Error, Result};
use crate::projection::{MapBounds, Projector, Viewport};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Suggestion service location
    #[serde(default)]
    pub service: ServiceConfig,

    /// Geographic bounds of the map image
    #[serde(default)]
    pub map: MapConfig,

    /// On-page rectangle of the map image
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,
}

/// Suggestion service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Endpoint path
    #[serde(default = "default_path")]
    pub path: String,
}

/// Map bounds in degrees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_west")]
    pub west: f64,
    #[serde(default = "default_east")]
    pub east: f64,
    #[serde(default = "default_north")]
    pub north: f64,
    #[serde(default = "default_south")]
    pub south: f64,
}

/// Map viewport in pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_left")]
    pub left: f64,
    #[serde(default = "default_top")]
    pub top: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

/// Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before typed input triggers a search
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Default output format for rendered pages
    #[serde(default = "default_format")]
    pub format: String,
}

// Default value functions for serde
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_path() -> String {
    DEFAULT_PATH.to_string()
}
fn default_west() -> f64 {
    WEST
}
fn default_east() -> f64 {
    EAST
}
fn default_north() -> f64 {
    NORTH
}
fn default_south() -> f64 {
    SOUTH
}
fn default_left() -> f64 {
    DEFAULT_VIEWPORT_LEFT
}
fn default_top() -> f64 {
    DEFAULT_VIEWPORT_TOP
}
fn default_width() -> f64 {
    DEFAULT_VIEWPORT_WIDTH
}
fn default_height() -> f64 {
    DEFAULT_VIEWPORT_HEIGHT
}
fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            west: default_west(),
            east: default_east(),
            north: default_north(),
            south: default_south(),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            left: default_left(),
            top: default_top(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["service", "base_url"] => Some(self.service.base_url.clone()),
            ["service", "path"] => Some(self.service.path.clone()),

            ["map", "west"] => Some(self.map.west.to_string()),
            ["map", "east"] => Some(self.map.east.to_string()),
            ["map", "north"] => Some(self.map.north.to_string()),
            ["map", "south"] => Some(self.map.south.to_string()),

            ["viewport", "left"] => Some(self.viewport.left.to_string()),
            ["viewport", "top"] => Some(self.viewport.top.to_string()),
            ["viewport", "width"] => Some(self.viewport.width.to_string()),
            ["viewport", "height"] => Some(self.viewport.height.to_string()),

            ["search", "debounce_ms"] => Some(self.search.debounce_ms.to_string()),
            ["search", "format"] => Some(self.search.format.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["service", "base_url"] => {
                self.service.base_url = value.trim_end_matches('/').to_string();
            }
            ["service", "path"] => {
                self.service.path = value.to_string();
            }

            ["map", "west"] => self.map.west = parse_finite(value, "degrees")?,
            ["map", "east"] => self.map.east = parse_finite(value, "degrees")?,
            ["map", "north"] => self.map.north = parse_finite(value, "degrees")?,
            ["map", "south"] => self.map.south = parse_finite(value, "degrees")?,

            ["viewport", "left"] => self.viewport.left = parse_finite(value, "pixel")?,
            ["viewport", "top"] => self.viewport.top = parse_finite(value, "pixel")?,
            ["viewport", "width"] => self.viewport.width = parse_finite(value, "pixel")?,
            ["viewport", "height"] => self.viewport.height = parse_finite(value, "pixel")?,

            ["search", "debounce_ms"] => {
                self.search.debounce_ms = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid debounce value: {}", value))
                })?;
            }
            ["search", "format"] => {
                self.search.format = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "service.base_url",
            "service.path",
            "map.west",
            "map.east",
            "map.north",
            "map.south",
            "viewport.left",
            "viewport.top",
            "viewport.width",
            "viewport.height",
            "search.debounce_ms",
            "search.format",
        ]
    }

    /// Geographic bounds of the map image
    pub fn bounds(&self) -> MapBounds {
        MapBounds::new(self.map.west, self.map.east, self.map.north, self.map.south)
    }

    /// On-page rectangle of the map image
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.viewport.left,
            self.viewport.top,
            self.viewport.width,
            self.viewport.height,
        )
    }

    /// Projector for the configured map
    pub fn projector(&self) -> Projector {
        Projector::new(self.bounds(), self.viewport())
    }

    /// Debounce delay
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}

fn parse_finite(value: &str, unit: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::Config(format!("Invalid {} value: {}", unit, value)))
}
