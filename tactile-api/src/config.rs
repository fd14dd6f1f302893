//! High-level configuration API

use crate::error::{ApiError, Result};
use std::path::PathBuf;

/// Default configuration constants
pub mod defaults {
    /// Maximum accepted text length in UTF-16 units
    pub const MAX_TEXT_LENGTH: usize = 50_000;
}

/// Configuration for a [`crate::Transcriber`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) max_text_length: usize,
    pub(crate) cell_separator: String,
    pub(crate) table_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_text_length: defaults::MAX_TEXT_LENGTH,
            cell_separator: String::new(),
            table_file: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Maximum accepted text length
    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    /// Separator inserted between cells by visual formatting
    pub fn cell_separator(&self) -> &str {
        &self.cell_separator
    }

    /// Custom table file, if any
    pub fn table_file(&self) -> Option<&PathBuf> {
        self.table_file.as_ref()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum accepted text length
    pub fn max_text_length(mut self, length: usize) -> Self {
        self.config.max_text_length = length;
        self
    }

    /// Set the separator inserted between cells
    pub fn cell_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.cell_separator = separator.into();
        self
    }

    /// Use a custom table file instead of the built-in tables
    pub fn table_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.table_file = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.max_text_length == 0 {
            return Err(ApiError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }

        if self.config.cell_separator.contains('\n') {
            return Err(ApiError::Config(
                "cell_separator must not contain a newline".to_string(),
            ));
        }

        Ok(self.config)
    }
}
