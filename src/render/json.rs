//! JSON page formatter

use crate::error::Result;
use crate::render::{Page, PageFormatter};

/// JSON formatter - outputs the full page model as pretty-printed JSON
pub struct JsonFormatter;

impl PageFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full page model as JSON"
    }

    fn format(&self, page: &Page) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{Outcome, Suggestion};
    use crate::projection::Projector;
    use crate::projection::{MapBounds, Viewport};
    use crate::render::Renderer;

    #[test]
    fn test_json_format() {
        let mut renderer = Renderer::new(Projector::new(
            MapBounds::default(),
            Viewport::new(0.0, 0.0, 800.0, 400.0),
        ));
        renderer.render(&Outcome::Success(vec![Suggestion {
            name: "Park A".to_string(),
            latitude: 40.01,
            longitude: -73.9,
            score: 0.9,
        }]));

        let output = JsonFormatter.format(renderer.page()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["message"]["visible"], false);
        assert_eq!(parsed["table"]["visible"], true);
        assert_eq!(parsed["table"]["rows"][0]["cells"][0], "Park A");
        assert_eq!(parsed["markers"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_json_formatter_info() {
        assert_eq!(JsonFormatter.name(), "json");
        assert!(!JsonFormatter.description().is_empty());
    }
}
