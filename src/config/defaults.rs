//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants;

/// Default suggestion service base URL
pub const DEFAULT_BASE_URL: &str = constants::api::BASE_URL;

/// Default suggestion endpoint path
pub const DEFAULT_PATH: &str = constants::api::SUGGESTIONS_PATH;

/// Default debounce delay in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = constants::search::DEBOUNCE_MS;

/// Default map viewport position and size, in pixels
pub const DEFAULT_VIEWPORT_LEFT: f64 = 0.0;
pub const DEFAULT_VIEWPORT_TOP: f64 = 0.0;
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 400.0;

/// Default page format
pub const DEFAULT_FORMAT: &str = "text";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "suggest-map";
