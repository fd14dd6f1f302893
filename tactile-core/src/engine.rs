//! Transcription engine tying tables, conversion, formatting and statistics together

use crate::convert;
use crate::error::Result;
use crate::format::DisplayFormatter;
use crate::grade::Grade;
use crate::metadata;
use crate::stats::Statistics;
use crate::tables::{self, BrailleTables};
use chrono::NaiveDate;
use std::sync::Arc;

/// Result of a full transcription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    /// Display variant
    pub braille: String,
    /// File variant: header followed by the display variant
    pub braille_with_metadata: String,
    /// Conversion statistics
    pub stats: Statistics,
}

/// Stateless transcription engine over a shared, read-only table set
#[derive(Debug, Clone)]
pub struct BrailleEngine {
    tables: Arc<BrailleTables>,
    formatter: DisplayFormatter,
}

impl BrailleEngine {
    /// Engine over the built-in English tables
    pub fn new() -> Result<Self> {
        Ok(Self::with_tables(tables::embedded()?))
    }

    /// Engine over custom tables
    pub fn with_tables(tables: Arc<BrailleTables>) -> Self {
        Self {
            tables,
            formatter: DisplayFormatter::default(),
        }
    }

    /// Replace the display formatter
    pub fn with_formatter(mut self, formatter: DisplayFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Tables in use
    pub fn tables(&self) -> &BrailleTables {
        &self.tables
    }

    /// Display formatter in use
    pub fn formatter(&self) -> &DisplayFormatter {
        &self.formatter
    }

    /// Bare conversion, no formatting
    pub fn convert(&self, text: &str, grade: Grade) -> String {
        convert::convert(text, grade, &self.tables)
    }

    /// Convert, format, attach the dated header and compute statistics
    pub fn transcribe(
        &self,
        text: &str,
        grade: Grade,
        include_visual: bool,
        date: NaiveDate,
    ) -> Transcription {
        let converted = self.convert(text, grade);
        let braille = self.formatter.format(&converted, include_visual);
        let braille_with_metadata = metadata::with_header(&braille, grade, date);
        let stats = Statistics::compute(text, &converted, grade);

        Transcription {
            braille,
            braille_with_metadata,
            stats,
        }
    }
}
