//! Transport-agnostic request handlers
//!
//! Each handler takes a raw request body and returns a status code plus a
//! JSON body, so any HTTP stack can mount them directly.

use crate::dto::{ConversionRequest, ErrorResponse};
use crate::error::{ApiError, Result};
use crate::info::braille_info;
use crate::Transcriber;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

/// Status code plus JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

impl ApiResponse {
    /// Serialize `value` with `status`, degrading to a 500 if serialization fails
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(e) => Self::from_error(&ApiError::Serde(e)),
        }
    }

    /// Error body for `err`
    pub fn from_error(err: &ApiError) -> Self {
        let body = serde_json::json!(ErrorResponse::from(err)).to_string();
        Self {
            status: err.status_code(),
            body,
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Handle a conversion request body
pub fn handle_convert(transcriber: &Transcriber, body: &str) -> ApiResponse {
    match convert_body(transcriber, body) {
        Ok(response) => response,
        Err(err) => {
            match &err {
                ApiError::Validation(msg) => log::warn!("Rejected conversion request: {msg}"),
                other => log::error!("Braille conversion error: {other}"),
            }
            ApiResponse::from_error(&err)
        }
    }
}

fn convert_body(transcriber: &Transcriber, body: &str) -> Result<ApiResponse> {
    let request = ConversionRequest::from_json(body)?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| transcriber.convert(&request)));
    let response = match outcome {
        Ok(result) => result?,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            return Err(ApiError::Internal(detail));
        }
    };

    Ok(ApiResponse::json(200, &response))
}

/// Handle a request for the static grade/format descriptors
pub fn handle_info() -> ApiResponse {
    ApiResponse::json(200, &braille_info())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tactile_core::FixedClock;

    fn transcriber() -> Transcriber {
        Transcriber::new()
            .unwrap()
            .with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()))
    }

    fn body(response: &ApiResponse) -> serde_json::Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_success_response() {
        let response = handle_convert(&transcriber(), r#"{"text": "cat", "grade": "grade1"}"#);
        assert_eq!(response.status, 200);
        assert!(response.is_success());

        let json = body(&response);
        assert_eq!(json["braille"], "⠉⠁⠞");
        assert_eq!(json["success"], true);
        assert_eq!(json["stats"]["originalLength"], 3);
        assert_eq!(json["stats"]["wordCount"], 1);
        assert_eq!(json["stats"]["compressionRatio"], "1.00");
        assert!(json["brailleWithMetadata"]
            .as_str()
            .unwrap()
            .contains("2024-06-01"));
    }

    #[test]
    fn test_empty_text_is_400() {
        let response = handle_convert(&transcriber(), r#"{"text": "", "grade": "grade1"}"#);
        assert_eq!(response.status, 400);
        assert_eq!(
            body(&response)["error"],
            "Text is required and must be a string"
        );
    }

    #[test]
    fn test_too_long_is_400() {
        let text = "a".repeat(50_001);
        let request = serde_json::json!({ "text": text }).to_string();
        let response = handle_convert(&transcriber(), &request);
        assert_eq!(response.status, 400);
        assert_eq!(
            body(&response)["error"],
            "Text is too long. Maximum 50,000 characters allowed."
        );
    }

    #[test]
    fn test_error_response_shape() {
        let response = ApiResponse::from_error(&ApiError::Internal("boom".to_string()));
        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        assert_eq!(
            body(&response),
            serde_json::json!({ "error": "Failed to convert text to Braille" })
        );
    }

    #[test]
    fn test_info() {
        let response = handle_info();
        assert_eq!(response.status, 200);
        let json = body(&response);
        assert_eq!(json["supportedGrades"].as_array().unwrap().len(), 2);
        assert_eq!(json["fileFormats"][1]["extension"], ".txt");
    }
}
