//! Braille lookup tables
//!
//! Tables are read from TOML, validated once and then shared read-only.

pub mod character_map;
pub mod config;
pub mod contraction;
pub(crate) mod loader;

pub use character_map::CharacterMap;
pub use config::TableConfig;
pub use contraction::{Contraction, ContractionTable};
pub use loader::embedded;

use crate::braille::is_braille_cell;
use crate::error::{Result, TableError};
use std::collections::HashSet;
use std::path::Path;

/// Validated Grade 1 character map and Grade 2 contraction table
#[derive(Debug, Clone)]
pub struct BrailleTables {
    code: String,
    name: String,
    characters: CharacterMap,
    contractions: ContractionTable,
}

impl BrailleTables {
    /// Parse and validate a table from TOML text
    pub fn from_toml_str(source_name: &str, toml_str: &str) -> Result<Self> {
        let config: TableConfig = toml::from_str(toml_str).map_err(|e| TableError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        Self::from_config(&config)
    }

    /// Load a table file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&path.display().to_string(), &content)
    }

    /// Validate a parsed configuration
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        if config.metadata.code.trim().is_empty() {
            return Err(TableError::Metadata("code must not be empty".to_string()));
        }
        if config.metadata.name.trim().is_empty() {
            return Err(TableError::Metadata("name must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        let mut characters = Vec::with_capacity(config.grade1.characters.len());
        for entry in &config.grade1.characters {
            let mut chars = entry.ch.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(TableError::InvalidCharacterKey {
                        key: entry.ch.clone(),
                    })
                }
            };
            if entry.braille.is_empty() {
                return Err(TableError::EmptyOutput {
                    key: entry.ch.clone(),
                });
            }
            if !seen.insert(ch) {
                return Err(TableError::Duplicate {
                    key: entry.ch.clone(),
                });
            }
            characters.push((ch, entry.braille.as_str()));
        }

        let mut seen = HashSet::new();
        let mut contractions = Vec::with_capacity(config.grade2.contractions.len());
        for entry in &config.grade2.contractions {
            let pattern = &entry.pattern;
            let valid_pattern = !pattern.is_empty()
                && pattern
                    .chars()
                    .all(|c| c.is_ascii_graphic() && !c.is_ascii_uppercase());
            if !valid_pattern {
                return Err(TableError::InvalidPattern {
                    pattern: pattern.clone(),
                });
            }
            if entry.braille.is_empty() {
                return Err(TableError::EmptyOutput {
                    key: pattern.clone(),
                });
            }
            if !entry.braille.chars().all(is_braille_cell) {
                return Err(TableError::NonBrailleContraction {
                    pattern: pattern.clone(),
                });
            }
            if !seen.insert(pattern.as_str()) {
                return Err(TableError::Duplicate {
                    key: pattern.clone(),
                });
            }
            let contraction = Contraction::new(pattern.as_str(), entry.braille.as_str())
                .map_err(|_| TableError::InvalidPattern {
                    pattern: pattern.clone(),
                })?;
            contractions.push(contraction);
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            characters: CharacterMap::new(characters),
            contractions: ContractionTable::new(contractions),
        })
    }

    /// Table code, e.g. `en`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grade 1 character map
    pub fn characters(&self) -> &CharacterMap {
        &self.characters
    }

    /// Grade 2 contraction table
    pub fn contractions(&self) -> &ContractionTable {
        &self.contractions
    }
}
