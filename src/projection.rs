//! Geographic <-> pixel projection for the fixed map image
//!
//! The map image is a linear (equirectangular) view of a fixed geographic
//! box. Its corners are pinned to `MapBounds`; the on-page rectangle it
//! occupies is the `Viewport`. Both directions extrapolate linearly outside
//! the box, nothing is clamped.

use crate::constants::map::{COORD_DECIMALS, EAST, NORTH, SOUTH, WEST};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude as shown in an editable input field
    pub fn lat_text(&self) -> String {
        format_coord(self.lat)
    }

    /// Longitude as shown in an editable input field
    pub fn lng_text(&self) -> String {
        format_coord(self.lng)
    }
}

/// A position on the page, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geographic box bound to the corners of the map image
///
/// `west`/`east` are used literally: the mapping divides by `east - west`
/// and `north - south` as configured, with no reordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

impl MapBounds {
    pub fn new(west: f64, east: f64, north: f64, south: f64) -> Self {
        Self {
            west,
            east,
            north,
            south,
        }
    }

    /// True when either span is zero, which makes every projection non-finite
    pub fn is_degenerate(&self) -> bool {
        self.east == self.west || self.north == self.south
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::new(WEST, EAST, NORTH, SOUTH)
    }
}

/// On-page rectangle occupied by the map image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether a page position falls on the map image (edges inclusive)
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

/// Project a geographic coordinate onto the page
///
/// North maps to the top edge of the viewport, west to the left edge.
pub fn geo_to_pixel(coords: Coordinates, bounds: &MapBounds, viewport: &Viewport) -> PixelPoint {
    let x = viewport.left + viewport.width * (coords.lng - bounds.west) / (bounds.east - bounds.west);
    let y = viewport.top + viewport.height * (bounds.north - coords.lat) / (bounds.north - bounds.south);
    PixelPoint::new(x, y)
}

/// Exact inverse of [`geo_to_pixel`] for a page position
pub fn pixel_to_geo(point: PixelPoint, bounds: &MapBounds, viewport: &Viewport) -> Coordinates {
    let lat = bounds.north - (bounds.north - bounds.south) * (point.y - viewport.top) / viewport.height;
    let lng = bounds.west + (bounds.east - bounds.west) * (point.x - viewport.left) / viewport.width;
    Coordinates::new(lat, lng)
}

/// Format a coordinate the way it is written into an input field
pub fn format_coord(value: f64) -> String {
    format!("{:.*}", COORD_DECIMALS, value)
}

/// Bounds and viewport bundled together, injected into the renderer and
/// the widget controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    bounds: MapBounds,
    viewport: Viewport,
}

impl Projector {
    pub fn new(bounds: MapBounds, viewport: Viewport) -> Self {
        Self { bounds, viewport }
    }

    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn to_pixel(&self, coords: Coordinates) -> PixelPoint {
        geo_to_pixel(coords, &self.bounds, &self.viewport)
    }

    pub fn to_geo(&self, point: PixelPoint) -> Coordinates {
        pixel_to_geo(point, &self.bounds, &self.viewport)
    }
}
