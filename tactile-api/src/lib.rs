//! Public API for Tactile Braille transcription
//!
//! This crate provides the request/response boundary around the
//! transcription engine: validation, DTOs, error mapping and static
//! service descriptors.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod handler;
pub mod info;

use error::Result;
use std::sync::Arc;
use tactile_core::{
    tables, BrailleEngine, BrailleTables, Clock, DisplayFormatter, Grade, SystemClock,
};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{ConversionRequest, ConversionResponse, ErrorResponse, StatsDTO};
pub use error::ApiError;
pub use handler::{handle_convert, handle_info, ApiResponse};
pub use info::{braille_info, BrailleInfo, FileFormat, GradeDescriptor};

/// Main entry point for Braille conversion
///
/// Validates requests against the configured limits, then runs the engine
/// with the date taken from the configured clock.
pub struct Transcriber {
    engine: BrailleEngine,
    config: Config,
    clock: Arc<dyn Clock>,
}

impl Transcriber {
    /// Create a transcriber with default configuration (built-in tables, 50,000 limit)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a transcriber with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let tables = match config.table_file() {
            Some(path) => {
                log::debug!("Loading Braille tables from {}", path.display());
                Arc::new(BrailleTables::from_file(path)?)
            }
            None => tables::embedded()?,
        };

        let engine = BrailleEngine::with_tables(tables).with_formatter(
            DisplayFormatter::with_cell_separator(config.cell_separator()),
        );

        Ok(Self {
            engine,
            config,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used for file headers
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Validate and convert a request
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResponse> {
        request.validate(self.config.max_text_length())?;

        log::debug!(
            "Converting {} characters with {} (visual: {})",
            request.text.chars().count(),
            request.grade,
            request.include_visual
        );

        let transcription = self.engine.transcribe(
            &request.text,
            request.grade,
            request.include_visual,
            self.clock.today(),
        );

        Ok(transcription.into())
    }

    /// Convert text directly (convenience method)
    pub fn convert_text(&self, text: &str, grade: Grade) -> Result<ConversionResponse> {
        self.convert(&ConversionRequest::new(text).with_grade(grade))
    }

    /// Get the underlying engine
    pub fn engine(&self) -> &BrailleEngine {
        &self.engine
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Convert text with default configuration
pub fn convert_text(text: &str, grade: Grade) -> Result<ConversionResponse> {
    Transcriber::new()?.convert_text(text, grade)
}
