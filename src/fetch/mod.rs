//! Suggestion fetching
//!
//! Defines the wire payload of the suggestion service, the four terminal
//! outcomes a search can end in, and the backend trait the widget talks to.

pub mod http;

use crate::error::{Error, Result};
use crate::query::SuggestionRequest;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::warn;

/// One ranked location suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: f64,
}

/// Raw response body of the suggestion service
///
/// Either `{"err": "..."}` or `{"suggestions": [...]}`. Both fields are
/// optional here so classification happens in [`Outcome::from_payload`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

impl SuggestionPayload {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            err: Some(message.into()),
            suggestions: None,
        }
    }

    pub fn suggestions(suggestions: Vec<Suggestion>) -> Self {
        Self {
            err: None,
            suggestions: Some(suggestions),
        }
    }
}

/// Terminal result of one search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    /// The service reported an error; shown verbatim
    Error(String),
    /// The service answered with zero suggestions
    Empty,
    /// Non-empty suggestions, in service ranking order
    Success(Vec<Suggestion>),
    /// The request never produced a usable payload
    TransportFailure(String),
}

impl Outcome {
    /// Classify a decoded payload; `err` wins over `suggestions`
    pub fn from_payload(payload: SuggestionPayload) -> Result<Self> {
        if let Some(message) = payload.err {
            return Ok(Outcome::Error(message));
        }
        match payload.suggestions {
            Some(suggestions) if suggestions.is_empty() => Ok(Outcome::Empty),
            Some(suggestions) => Ok(Outcome::Success(suggestions)),
            None => Err(Error::Payload(
                "response has neither 'err' nor 'suggestions'".to_string(),
            )),
        }
    }

    /// Collapse any fetch result into an outcome
    ///
    /// This is the error boundary of the fetcher: every failure becomes
    /// [`Outcome::TransportFailure`].
    pub fn from_response(response: Result<SuggestionPayload>) -> Self {
        match response.and_then(Outcome::from_payload) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("suggestion request failed: {}", e);
                Outcome::TransportFailure(e.to_string())
            }
        }
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Error(_) => "error",
            Outcome::Empty => "empty",
            Outcome::Success(_) => "success",
            Outcome::TransportFailure(_) => "transport_failure",
        }
    }
}

/// Trait for suggestion service backends
pub trait SuggestionService: Send + Sync + 'static {
    /// Issue one request; single attempt, no retry
    fn fetch(
        &self,
        request: &SuggestionRequest,
    ) -> impl Future<Output = Result<SuggestionPayload>> + Send;
}

/// Run one search against a backend and classify the result
pub async fn search<S: SuggestionService>(
    service: &S,
    request: &SuggestionRequest,
) -> Outcome {
    Outcome::from_response(service.fetch(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park() -> Suggestion {
        Suggestion {
            name: "Park A".to_string(),
            latitude: 40.01,
            longitude: -73.9,
            score: 0.9,
        }
    }

    fn parse(json: &str) -> Result<Outcome> {
        Outcome::from_payload(serde_json::from_str(json)?)
    }

    #[test]
    fn test_error_wins_over_suggestions() {
        let outcome = parse(r#"{"err": "boom", "suggestions": [{"name": "x", "latitude": 1, "longitude": 2, "score": 3}]}"#).unwrap();
        assert_eq!(outcome, Outcome::Error("boom".to_string()));
    }

    #[test]
    fn test_empty_suggestions() {
        assert_eq!(parse(r#"{"suggestions": []}"#).unwrap(), Outcome::Empty);
    }

    #[test]
    fn test_success_preserves_order() {
        let outcome = parse(
            r#"{"suggestions": [
                {"name": "B", "latitude": 1.0, "longitude": 2.0, "score": 0.5},
                {"name": "A", "latitude": 3.0, "longitude": 4.0, "score": 0.5}
            ]}"#,
        )
        .unwrap();
        match outcome {
            Outcome::Success(list) => {
                let names: Vec<_> = list.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(names, ["B", "A"]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_missing_both_fields_is_payload_error() {
        assert!(matches!(parse("{}"), Err(Error::Payload(_))));
    }

    #[test]
    fn test_from_response_maps_failures() {
        let outcome = Outcome::from_response(Err(Error::Fetch("connection refused".to_string())));
        assert!(matches!(outcome, Outcome::TransportFailure(ref m) if m.contains("connection refused")));

        let outcome = Outcome::from_response(Ok(SuggestionPayload::default()));
        assert_eq!(outcome.kind(), "transport_failure");

        let outcome = Outcome::from_response(Ok(SuggestionPayload::suggestions(vec![park()])));
        assert_eq!(outcome, Outcome::Success(vec![park()]));
    }

    #[test]
    fn test_payload_serialization() {
        let json = serde_json::to_string(&SuggestionPayload::error("nope")).unwrap();
        assert_eq!(json, r#"{"err":"nope"}"#);

        let json = serde_json::to_string(&SuggestionPayload::suggestions(vec![park()])).unwrap();
        let parsed: SuggestionPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.suggestions.unwrap()[0], park());
    }
}
