//! Data Transfer Objects for the conversion boundary
//!
//! Field names follow the JSON contract (camelCase).

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use tactile_core::{Grade, Statistics, Transcription};

/// Message for a missing, empty or non-string `text`
pub const TEXT_REQUIRED_MESSAGE: &str = "Text is required and must be a string";

/// Validated conversion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Text to transcribe
    pub text: String,
    /// Braille grade
    pub grade: Grade,
    /// Apply display formatting
    pub include_visual: bool,
}

/// Wire shape before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConversionRequest {
    #[serde(default)]
    text: Option<serde_json::Value>,
    #[serde(default)]
    grade: Option<String>,
    #[serde(default)]
    include_visual: Option<bool>,
}

impl ConversionRequest {
    /// Grade 1 request with visual formatting on
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            grade: Grade::default(),
            include_visual: true,
        }
    }

    /// Set the grade
    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    /// Toggle display formatting
    pub fn with_visual(mut self, include_visual: bool) -> Self {
        self.include_visual = include_visual;
        self
    }

    /// Parse a JSON body, applying defaults and type checks
    ///
    /// Length is checked separately by [`ConversionRequest::validate`].
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: RawConversionRequest = serde_json::from_str(body)
            .map_err(|e| ApiError::Validation(format!("Invalid request body: {e}")))?;

        let text = match raw.text {
            Some(serde_json::Value::String(text)) if !text.is_empty() => text,
            _ => return Err(ApiError::Validation(TEXT_REQUIRED_MESSAGE.to_string())),
        };

        let grade = match raw.grade {
            Some(grade) => grade
                .parse::<Grade>()
                .map_err(|e| ApiError::Validation(format!("Invalid grade: {e}")))?,
            None => Grade::default(),
        };

        Ok(Self {
            text,
            grade,
            include_visual: raw.include_visual.unwrap_or(true),
        })
    }

    /// Reject empty text and text longer than `max_length` UTF-16 units
    pub fn validate(&self, max_length: usize) -> Result<()> {
        if self.text.is_empty() {
            return Err(ApiError::Validation(TEXT_REQUIRED_MESSAGE.to_string()));
        }

        if tactile_core::stats::utf16_len(&self.text) > max_length {
            return Err(ApiError::Validation(format!(
                "Text is too long. Maximum {} characters allowed.",
                group_thousands(max_length)
            )));
        }

        Ok(())
    }
}

/// Statistics as sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDTO {
    /// Input length
    pub original_length: usize,
    /// Output length before formatting
    pub braille_length: usize,
    /// Words in the input
    pub word_count: usize,
    /// Lines in the input
    pub line_count: usize,
    /// Grade used
    pub grade: Grade,
    /// Two-decimal compression ratio
    pub compression_ratio: String,
}

impl From<Statistics> for StatsDTO {
    fn from(stats: Statistics) -> Self {
        Self {
            original_length: stats.original_length,
            braille_length: stats.braille_length,
            word_count: stats.word_count,
            line_count: stats.line_count,
            grade: stats.grade,
            compression_ratio: stats.compression_ratio,
        }
    }
}

/// Successful conversion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Display variant
    pub braille: String,
    /// File variant with header
    pub braille_with_metadata: String,
    /// Conversion statistics
    pub stats: StatsDTO,
    /// Always `true`
    pub success: bool,
}

impl From<Transcription> for ConversionResponse {
    fn from(transcription: Transcription) -> Self {
        Self {
            braille: transcription.braille,
            braille_with_metadata: transcription.braille_with_metadata,
            stats: transcription.stats.into(),
            success: true,
        }
    }
}

/// Failure response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Client-facing message
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.public_message(),
        }
    }
}

/// `50000` -> `50,000`
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
