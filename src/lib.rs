//! suggest-map: location suggestion search with a projected result map
//!
//! A headless model of an interactive location-search widget. Typed input
//! is debounced into searches against a remote suggestion service, each
//! search is tagged so only the newest response is rendered, and results
//! are shown both as table rows and as markers projected onto a fixed map
//! image.
//!
//! ## Components
//!
//! - [`projection`]: geographic <-> pixel conversion for the map image
//! - [`scheduler`]: single-timer debounce with immediate override
//! - [`fetch`]: request/response model and the HTTP backend
//! - [`render`]: page model, row/marker pairs and hover highlighting
//! - [`widget`]: the controller tying them together
//!
//! ## Quick Start
//!
//! ```no_run
//! use suggest_map::fetch::http::HttpSuggestionService;
//! use suggest_map::projection::{MapBounds, Projector, Viewport};
//! use suggest_map::query::QueryField;
//! use suggest_map::scheduler::Scheduler;
//! use suggest_map::widget::{Controller, Event};
//!
//! # async fn demo() -> suggest_map::Result<()> {
//! let service = HttpSuggestionService::new("http://127.0.0.1:8080")?;
//! let projector = Projector::new(MapBounds::default(), Viewport::new(0.0, 0.0, 800.0, 400.0));
//! let mut widget = Controller::new(service, Scheduler::default(), projector);
//!
//! widget.handle(Event::Input(QueryField::Term, "park".to_string()));
//! widget.handle(Event::Confirm);
//! widget.settle().await;
//!
//! for row in &widget.page().table.rows {
//!     println!("{}", row.cells.join(" | "));
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod projection;
pub mod query;
pub mod render;
pub mod scheduler;
pub mod widget;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use fetch::{Outcome, Suggestion, SuggestionService};
pub use projection::{Coordinates, MapBounds, PixelPoint, Projector, Viewport};
pub use query::{QueryField, QueryState};
pub use widget::{Controller, Event, RequestToken};
