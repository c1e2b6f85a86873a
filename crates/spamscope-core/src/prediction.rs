//! Wire contract for the prediction service
//!
//! The classifier is an opaque external collaborator reached via
//! `POST /predict`. These types pin the request/response JSON shape; any
//! body that fails to deserialize as [`Prediction`] is treated as a
//! transport-level failure by the caller.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Sentinel value the service uses in `prediction` to report that it could
/// not produce a classification.
pub const ERROR_SENTINEL: &str = "Error";

/// JSON body for `POST /predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    /// The trimmed email text to classify.
    pub text: &'a str,
}

/// JSON response from the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Classification label, or the literal `"Error"` sentinel.
    pub prediction: String,
    pub is_spam: bool,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// ISO-8601 datetime produced by the service.
    pub timestamp: String,
}

impl Prediction {
    /// True when the service explicitly reported it could not classify.
    pub fn is_error(&self) -> bool {
        self.prediction == ERROR_SENTINEL
    }

    /// Confidence as a percentage in `[0, 100]`.
    pub fn confidence_pct(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Render the service timestamp in local time for display.
    ///
    /// Falls back to the raw string when the timestamp does not parse as
    /// RFC 3339 (the service contract says ISO-8601, but a lenient display
    /// path beats dropping the value).
    pub fn display_timestamp(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(dt) => dt
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spam_response() -> Prediction {
        serde_json::from_str(
            r#"{"prediction":"Spam","is_spam":true,"confidence":0.97,"timestamp":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_response_deserializes() {
        let p = spam_response();
        assert_eq!(p.prediction, "Spam");
        assert!(p.is_spam);
        assert!((p.confidence - 0.97).abs() < f64::EPSILON);
        assert_eq!(p.timestamp, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_error_sentinel_detection() {
        let mut p = spam_response();
        assert!(!p.is_error());
        p.prediction = ERROR_SENTINEL.to_string();
        assert!(p.is_error());
        // Sentinel comparison is exact
        p.prediction = "error".to_string();
        assert!(!p.is_error());
    }

    #[test]
    fn test_confidence_pct() {
        let p = spam_response();
        assert!((p.confidence_pct() - 97.0).abs() < 1e-9);
    }

    #[test]
    fn test_request_serializes() {
        let req = PredictRequest { text: "hello spam" };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"text":"hello spam"}"#);
    }

    #[test]
    fn test_missing_field_fails_to_parse() {
        let result = serde_json::from_str::<Prediction>(
            r#"{"prediction":"Spam","confidence":0.97,"timestamp":"2024-01-01T00:00:00Z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_display_timestamp_falls_back_to_raw() {
        let mut p = spam_response();
        p.timestamp = "not a timestamp".to_string();
        assert_eq!(p.display_timestamp(), "not a timestamp");
    }

    #[test]
    fn test_display_timestamp_parses_rfc3339() {
        let p = spam_response();
        let rendered = p.display_timestamp();
        // Local-time formatted, so only assert the shape
        assert_eq!(rendered.len(), "2024-01-01 00:00:00".len());
        assert!(rendered.contains(':'));
    }
}
