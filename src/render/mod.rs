//! Result rendering
//!
//! The renderer owns a retained model of the widget's visible surface: the
//! message area, the results table and the marker layer on the map image.
//! Every rendered outcome replaces the previous surface wholesale; row and
//! marker pairs are rebuilt from scratch, never diffed.

pub mod json;
pub mod text;

use crate::constants::style::{MARKER_COLOR, MARKER_HIGHLIGHT, ROW_HIGHLIGHT};
use crate::constants::text::{NO_RESULTS, SEARCH_FAILED};
use crate::error::Result;
use crate::fetch::{Outcome, Suggestion};
use crate::projection::{Coordinates, PixelPoint, Projector};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Identity of a rendered row or marker
///
/// Ids are never reused, so an event naming an element from an earlier
/// render simply finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status/message area
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageArea {
    pub text: String,
    pub visible: bool,
}

/// One results table row: name, latitude, longitude, score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: ElementId,
    pub cells: [String; 4],
    pub highlighted: bool,
}

impl TableRow {
    /// Background colour, if any
    pub fn background(&self) -> Option<&'static str> {
        self.highlighted.then_some(ROW_HIGHLIGHT)
    }
}

/// Results table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub visible: bool,
    pub rows: Vec<TableRow>,
}

/// A result marker positioned over the map image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: ElementId,
    pub position: PixelPoint,
    pub coords: Coordinates,
    pub highlighted: bool,
}

impl MapMarker {
    pub fn color(&self) -> &'static str {
        if self.highlighted {
            MARKER_HIGHLIGHT
        } else {
            MARKER_COLOR
        }
    }

    pub fn z_index(&self) -> u8 {
        u8::from(self.highlighted)
    }
}

/// Everything the widget currently shows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub message: MessageArea,
    pub table: ResultTable,
    pub markers: Vec<MapMarker>,
}

impl Page {
    pub fn row(&self, id: ElementId) -> Option<&TableRow> {
        self.table.rows.iter().find(|r| r.id == id)
    }

    pub fn marker(&self, id: ElementId) -> Option<&MapMarker> {
        self.markers.iter().find(|m| m.id == id)
    }
}

/// Per-result context linking a suggestion to its row and marker
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPair {
    pub result: Suggestion,
    pub row: ElementId,
    pub marker: ElementId,
}

impl ResultPair {
    fn owns(&self, id: ElementId) -> bool {
        self.row == id || self.marker == id
    }
}

/// Reducer from outcomes to page state
#[derive(Debug)]
pub struct Renderer {
    projector: Projector,
    page: Page,
    pairs: Vec<ResultPair>,
    next_id: u64,
}

impl Renderer {
    pub fn new(projector: Projector) -> Self {
        Self {
            projector,
            page: Page::default(),
            pairs: Vec::new(),
            next_id: 1,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Row/marker pairs currently on the page, in ranking order
    pub fn pairs(&self) -> &[ResultPair] {
        &self.pairs
    }

    /// Show the in-flight status line; table visibility is left alone
    pub fn show_searching(&mut self, term: &str) {
        self.page.message.text = format!("Searching for '{}'", term);
        self.page.message.visible = true;
    }

    /// Replace the page with a terminal outcome
    pub fn render(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Error(message) => self.show_message(message.clone()),
            Outcome::Empty => self.show_message(NO_RESULTS.to_string()),
            Outcome::TransportFailure(detail) => {
                self.show_message(format!("{}: {}", SEARCH_FAILED, detail))
            }
            Outcome::Success(suggestions) => self.show_results(suggestions),
        }
        debug!(
            "rendered {} outcome ({} rows, {} markers)",
            outcome.kind(),
            self.page.table.rows.len(),
            self.page.markers.len()
        );
    }

    fn show_message(&mut self, text: String) {
        self.page.message.text = text;
        self.page.message.visible = true;
        self.page.table.visible = false;
    }

    fn show_results(&mut self, suggestions: &[Suggestion]) {
        self.page.message.visible = false;
        self.page.table.visible = true;
        self.page.table.rows.clear();
        self.page.markers.clear();
        self.pairs.clear();

        for suggestion in suggestions {
            let row = self.allocate_id();
            let marker = self.allocate_id();
            let coords = Coordinates::new(suggestion.latitude, suggestion.longitude);

            self.page.table.rows.push(TableRow {
                id: row,
                cells: [
                    suggestion.name.clone(),
                    suggestion.latitude.to_string(),
                    suggestion.longitude.to_string(),
                    suggestion.score.to_string(),
                ],
                highlighted: false,
            });
            self.page.markers.push(MapMarker {
                id: marker,
                position: self.projector.to_pixel(coords),
                coords,
                highlighted: false,
            });
            self.pairs.push(ResultPair {
                result: suggestion.clone(),
                row,
                marker,
            });
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Pair owning a row or marker id
    pub fn pair_for(&self, id: ElementId) -> Option<&ResultPair> {
        self.pairs.iter().find(|p| p.owns(id))
    }

    /// Pointer entered a row or marker: highlight both halves of its pair
    ///
    /// Returns false when the id is not on the page.
    pub fn hover(&mut self, id: ElementId) -> bool {
        self.set_highlight(id, true)
    }

    /// Pointer left a row or marker: revert both halves of its pair
    pub fn unhover(&mut self, id: ElementId) -> bool {
        self.set_highlight(id, false)
    }

    fn set_highlight(&mut self, id: ElementId, on: bool) -> bool {
        let Some(pair) = self.pairs.iter().find(|p| p.owns(id)) else {
            return false;
        };
        let (row_id, marker_id) = (pair.row, pair.marker);

        if let Some(row) = self.page.table.rows.iter_mut().find(|r| r.id == row_id) {
            row.highlighted = on;
        }
        if let Some(marker) = self.page.markers.iter_mut().find(|m| m.id == marker_id) {
            marker.highlighted = on;
        }
        true
    }

    /// Coordinates a marker click should write back into the query
    pub fn marker_target(&self, id: ElementId) -> Option<Coordinates> {
        self.pairs
            .iter()
            .find(|p| p.marker == id)
            .map(|p| Coordinates::new(p.result.latitude, p.result.longitude))
    }
}

/// Trait for page formatters
pub trait PageFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the page
    fn format(&self, page: &Page) -> Result<String>;
}

/// Information about a page format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    pub name: String,
    pub description: String,
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn PageFormatter>> {
    match name.to_lowercase().as_str() {
        "text" => Some(Box::new(text::TextFormatter)),
        "json" => Some(Box::new(json::JsonFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    ["text", "json"]
        .into_iter()
        .filter_map(|name| {
            get_formatter(name).map(|f| FormatInfo {
                name: f.name().to_string(),
                description: f.description().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{MapBounds, Viewport};
    use approx::assert_relative_eq;

    fn renderer() -> Renderer {
        Renderer::new(Projector::new(
            MapBounds::default(),
            Viewport::new(0.0, 0.0, 1230.0, 580.0),
        ))
    }

    fn suggestion(name: &str, latitude: f64, longitude: f64, score: f64) -> Suggestion {
        Suggestion {
            name: name.to_string(),
            latitude,
            longitude,
            score,
        }
    }

    fn three() -> Outcome {
        Outcome::Success(vec![
            suggestion("Alpha", 30.0, -100.0, 1.0),
            suggestion("Beta", 40.0, -90.0, 0.5),
            suggestion("Gamma", 50.0, -80.0, 0.25),
        ])
    }

    #[test]
    fn test_initial_page_is_blank() {
        let page = renderer().page().clone();
        assert!(!page.message.visible);
        assert!(!page.table.visible);
        assert!(page.table.rows.is_empty());
        assert!(page.markers.is_empty());
    }

    #[test]
    fn test_success_builds_rows_and_markers() {
        let mut r = renderer();
        r.render(&Outcome::Success(vec![suggestion("Park A", 40.01, -73.9, 0.9)]));

        let page = r.page();
        assert!(!page.message.visible);
        assert!(page.table.visible);
        assert_eq!(page.table.rows.len(), 1);
        assert_eq!(page.table.rows[0].cells, ["Park A", "40.01", "-73.9", "0.9"]);

        assert_eq!(page.markers.len(), 1);
        let expected = r.projector().to_pixel(Coordinates::new(40.01, -73.9));
        assert_relative_eq!(page.markers[0].position.x, expected.x);
        assert_relative_eq!(page.markers[0].position.y, expected.y);
        // 10 px per degree on this viewport
        assert_relative_eq!(page.markers[0].position.x, 971.0, epsilon = 1e-9);
        assert_relative_eq!(page.markers[0].position.y, 429.9, epsilon = 1e-9);
    }

    #[test]
    fn test_render_replaces_never_accumulates() {
        let mut r = renderer();
        r.render(&three());
        assert_eq!(r.page().table.rows.len(), 3);

        r.render(&Outcome::Success(vec![suggestion("Delta", 45.0, -75.0, 0.1)]));
        assert_eq!(r.page().table.rows.len(), 1);
        assert_eq!(r.page().markers.len(), 1);
        assert_eq!(r.pairs().len(), 1);
        assert_eq!(r.page().table.rows[0].cells[0], "Delta");
    }

    #[test]
    fn test_rows_keep_ranking_order() {
        let mut r = renderer();
        r.render(&three());
        let names: Vec<_> = r.page().table.rows.iter().map(|row| row.cells[0].as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_error_and_empty_hide_table() {
        let mut r = renderer();
        r.render(&three());

        r.render(&Outcome::Error("Missing parameter: q".to_string()));
        assert!(r.page().message.visible);
        assert_eq!(r.page().message.text, "Missing parameter: q");
        assert!(!r.page().table.visible);

        r.render(&Outcome::Empty);
        assert_eq!(r.page().message.text, "No results found");
        assert!(!r.page().table.visible);

        r.render(&Outcome::TransportFailure("timed out".to_string()));
        assert_eq!(r.page().message.text, "Search failed: timed out");
        assert!(!r.page().table.visible);
    }

    #[test]
    fn test_searching_status() {
        let mut r = renderer();
        r.render(&three());
        r.show_searching("park");

        assert!(r.page().message.visible);
        assert_eq!(r.page().message.text, "Searching for 'park'");
        // Previous results stay up until the outcome arrives
        assert!(r.page().table.visible);
        assert_eq!(r.page().table.rows.len(), 3);
    }

    #[test]
    fn test_hover_is_symmetric() {
        let mut r = renderer();
        r.render(&three());
        let pair = r.pairs()[1].clone();

        assert!(r.hover(pair.row));
        assert!(r.page().row(pair.row).unwrap().highlighted);
        let marker = r.page().marker(pair.marker).unwrap();
        assert!(marker.highlighted);
        assert_eq!(marker.color(), "#f00");
        assert_eq!(marker.z_index(), 1);

        assert!(r.unhover(pair.marker));
        assert!(!r.page().row(pair.row).unwrap().highlighted);
        let marker = r.page().marker(pair.marker).unwrap();
        assert_eq!(marker.color(), "#000");
        assert_eq!(marker.z_index(), 0);

        // Other pairs untouched
        assert!(r.page().table.rows.iter().all(|row| !row.highlighted));
    }

    #[test]
    fn test_row_background() {
        let mut r = renderer();
        r.render(&three());
        let row = r.pairs()[0].row;
        assert_eq!(r.page().row(row).unwrap().background(), None);
        r.hover(row);
        assert_eq!(r.page().row(row).unwrap().background(), Some("#ff8"));
    }

    #[test]
    fn test_stale_ids_are_ignored() {
        let mut r = renderer();
        r.render(&three());
        let old = r.pairs()[0].clone();

        r.render(&three());
        assert!(!r.hover(old.row));
        assert!(r.marker_target(old.marker).is_none());
        assert!(r.page().table.rows.iter().all(|row| row.id != old.row));
    }

    #[test]
    fn test_marker_target() {
        let mut r = renderer();
        r.render(&three());
        let pair = r.pairs()[2].clone();

        assert_eq!(r.marker_target(pair.marker), Some(Coordinates::new(50.0, -80.0)));
        // Rows are not click targets
        assert_eq!(r.marker_target(pair.row), None);
        assert_eq!(r.pair_for(pair.row).unwrap().result.name, "Gamma");
    }

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("gpx").is_none());

        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        assert!(formats.iter().any(|f| f.name == "json"));
    }
}
