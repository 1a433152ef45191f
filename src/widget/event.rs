//! User events the widget reacts to
//!
//! Events also have a one-line text form used by the interactive CLI:
//!
//! ```text
//! term <text>      lat <text>      lng <text>      radius <text>
//! enter            click <x> <y>   marker <id>
//! hover <id>       unhover <id>
//! ```

use crate::error::{Error, Result};
use crate::query::QueryField;
use crate::render::ElementId;
use std::str::FromStr;

/// A user interaction with the widget
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Keystroke in a query field; carries the field's new contents
    Input(QueryField, String),
    /// Confirm key pressed in any query field
    Confirm,
    /// Press on the map image at a page position
    MapClick(f64, f64),
    /// Press on a result marker
    MarkerClick(ElementId),
    /// Pointer entered a row or marker
    HoverIn(ElementId),
    /// Pointer left a row or marker
    HoverOut(ElementId),
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (line.trim_end(), ""),
        };

        match command.to_lowercase().as_str() {
            "enter" => Ok(Event::Confirm),
            "click" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(x), Some(y), None) => Ok(Event::MapClick(parse_num(x)?, parse_num(y)?)),
                    _ => Err(Error::InvalidInput(format!(
                        "click needs two coordinates: {}",
                        line
                    ))),
                }
            }
            "marker" => Ok(Event::MarkerClick(parse_id(rest)?)),
            "hover" => Ok(Event::HoverIn(parse_id(rest)?)),
            "unhover" => Ok(Event::HoverOut(parse_id(rest)?)),
            field => {
                let field: QueryField = field
                    .parse()
                    .map_err(|_| Error::InvalidInput(format!("Unknown event: {}", line)))?;
                Ok(Event::Input(field, rest.to_string()))
            }
        }
    }
}

fn parse_num(text: &str) -> Result<f64> {
    text.parse()
        .map_err(|_| Error::InvalidInput(format!("Not a number: {}", text)))
}

fn parse_id(text: &str) -> Result<ElementId> {
    let text = text.trim().trim_start_matches('#');
    text.parse()
        .map(ElementId)
        .map_err(|_| Error::InvalidInput(format!("Not an element id: {}", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inputs() {
        assert_eq!(
            "term san jose".parse::<Event>().unwrap(),
            Event::Input(QueryField::Term, "san jose".to_string())
        );
        assert_eq!(
            "lat 40.0".parse::<Event>().unwrap(),
            Event::Input(QueryField::Latitude, "40.0".to_string())
        );
        // Clearing a field
        assert_eq!(
            "radius".parse::<Event>().unwrap(),
            Event::Input(QueryField::Radius, String::new())
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("enter".parse::<Event>().unwrap(), Event::Confirm);
        assert_eq!("click 120 80.5".parse::<Event>().unwrap(), Event::MapClick(120.0, 80.5));
        assert_eq!("marker #4".parse::<Event>().unwrap(), Event::MarkerClick(ElementId(4)));
        assert_eq!("hover 3".parse::<Event>().unwrap(), Event::HoverIn(ElementId(3)));
        assert_eq!("unhover 3".parse::<Event>().unwrap(), Event::HoverOut(ElementId(3)));
    }

    #[test]
    fn test_parse_errors() {
        assert!("click 1".parse::<Event>().is_err());
        assert!("click a b".parse::<Event>().is_err());
        assert!("hover x".parse::<Event>().is_err());
        assert!("jump".parse::<Event>().is_err());
    }
}
