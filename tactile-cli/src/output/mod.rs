//! Output formatting module

use anyhow::Result;
use tactile_api::ConversionResponse;

/// One converted input, named by where it came from
#[derive(Debug, Clone)]
pub struct Document {
    /// File path, or `inline` for `--text`
    pub source: String,
    /// Conversion result
    pub response: ConversionResponse,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single converted document
    fn write_document(&mut self, document: &Document) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod brf;
pub mod json;
pub mod text;

pub use brf::BrfFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
