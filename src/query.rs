//! Query state and suggestion request construction
//!
//! The four input fields are kept as raw text. Nothing is parsed or
//! validated here: an empty field is omitted from the request, anything
//! else is forwarded as typed.

use crate::constants::api::SUGGESTIONS_PATH;
use crate::error::{Error, Result};
use crate::projection::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four query input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryField {
    Term,
    Latitude,
    Longitude,
    Radius,
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryField::Term => write!(f, "term"),
            QueryField::Latitude => write!(f, "lat"),
            QueryField::Longitude => write!(f, "lng"),
            QueryField::Radius => write!(f, "radius"),
        }
    }
}

impl FromStr for QueryField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "term" | "q" => Ok(QueryField::Term),
            "lat" | "latitude" => Ok(QueryField::Latitude),
            "lng" | "lon" | "longitude" => Ok(QueryField::Longitude),
            "radius" => Ok(QueryField::Radius),
            _ => Err(Error::InvalidInput(format!("Unknown query field: {}", s))),
        }
    }
}

/// Current contents of the query input fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub term: String,
    pub latitude: String,
    pub longitude: String,
    pub radius: String,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field
    pub fn get(&self, field: QueryField) -> &str {
        match field {
            QueryField::Term => &self.term,
            QueryField::Latitude => &self.latitude,
            QueryField::Longitude => &self.longitude,
            QueryField::Radius => &self.radius,
        }
    }

    /// Overwrite a field with new text
    pub fn set(&mut self, field: QueryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            QueryField::Term => self.term = value,
            QueryField::Latitude => self.latitude = value,
            QueryField::Longitude => self.longitude = value,
            QueryField::Radius => self.radius = value,
        }
    }

    /// Write a coordinate pair into the latitude/longitude fields
    pub fn set_coordinates(&mut self, coords: Coordinates) {
        self.latitude = coords.lat_text();
        self.longitude = coords.lng_text();
    }

    /// Snapshot the fields into a request
    pub fn to_request(&self) -> SuggestionRequest {
        SuggestionRequest {
            term: self.term.clone(),
            latitude: non_empty(&self.latitude),
            longitude: non_empty(&self.longitude),
            radius: non_empty(&self.radius),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A single suggestion query, frozen at dispatch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Free-text term, always sent (possibly empty)
    pub term: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
}

impl SuggestionRequest {
    /// Query string, without the leading `?`
    ///
    /// Only the term is percent-encoded; the optional values go out as typed.
    pub fn query_string(&self) -> String {
        let mut query = format!("q={}", urlencoding::encode(&self.term));
        if let Some(latitude) = &self.latitude {
            query.push_str(&format!("&latitude={}", latitude));
        }
        if let Some(longitude) = &self.longitude {
            query.push_str(&format!("&longitude={}", longitude));
        }
        if let Some(radius) = &self.radius {
            query.push_str(&format!("&radius={}", radius));
        }
        query
    }

    /// Path and query against the default endpoint, e.g. `/suggestions?q=park`
    pub fn path_and_query(&self) -> String {
        self.path_and_query_at(SUGGESTIONS_PATH)
    }

    /// Path and query against a custom endpoint path
    pub fn path_and_query_at(&self, path: &str) -> String {
        format!("{}?{}", path, self.query_string())
    }
}
