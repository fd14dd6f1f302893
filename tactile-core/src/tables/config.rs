//! TOML schema for Braille table files

use serde::{Deserialize, Serialize};

/// Complete table file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableConfig {
    /// Table identification
    pub metadata: MetadataConfig,
    /// Character-level table used by Grade 1
    pub grade1: Grade1Config,
    /// Contraction table used by Grade 2
    #[serde(default)]
    pub grade2: Grade2Config,
}

/// Table identification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataConfig {
    /// Short table code, e.g. `en`
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// Grade 1 section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Grade1Config {
    /// One entry per source character
    pub characters: Vec<CharacterEntry>,
}

/// Grade 2 section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Grade2Config {
    /// Contractions, in application order
    #[serde(default)]
    pub contractions: Vec<ContractionEntry>,
}

/// Single character mapping
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterEntry {
    /// Source character (must be exactly one code point)
    #[serde(rename = "char")]
    pub ch: String,
    /// Braille output
    pub braille: String,
}

/// Single contraction
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContractionEntry {
    /// Lowercase source pattern
    pub pattern: String,
    /// Braille cells replacing the pattern
    pub braille: String,
}
