//! Centralized constants for the suggest-map crate
//!
//! Values shared by the scheduler, the renderer and the configuration
//! defaults live here so they agree with each other.

/// Search timing
pub mod search {
    /// Quiet period before a burst of input fires a search, in milliseconds
    pub const DEBOUNCE_MS: u64 = 90;
}

/// Reference map bounds (North America image), in degrees
pub mod map {
    pub const WEST: f64 = -171.0;
    pub const EAST: f64 = -48.0;
    pub const NORTH: f64 = 83.0;
    pub const SOUTH: f64 = 25.0;

    /// Decimal places used when a coordinate is written into an input field
    pub const COORD_DECIMALS: usize = 6;
}

/// Suggestion service endpoint
pub mod api {
    /// Default base URL of the suggestion service
    pub const BASE_URL: &str = "http://127.0.0.1:80";

    /// Suggestion endpoint path
    pub const SUGGESTIONS_PATH: &str = "/suggestions";
}

/// User-facing text
pub mod text {
    /// Shown in the message area when the service returns zero suggestions
    pub const NO_RESULTS: &str = "No results found";

    /// Prefix of the message shown when the request itself failed
    pub const SEARCH_FAILED: &str = "Search failed";

    /// Results table header cells
    pub const TABLE_HEADER: [&str; 4] = ["Name", "Latitude", "Longitude", "Score"];
}

/// Highlight styling for hovered row/marker pairs
pub mod style {
    pub const ROW_HIGHLIGHT: &str = "#ff8";
    pub const MARKER_COLOR: &str = "#000";
    pub const MARKER_HIGHLIGHT: &str = "#f00";
}
