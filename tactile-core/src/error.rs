//! Core error types
//!
//! Conversion itself is total over any string input; only table loading and
//! grade parsing can fail.

use thiserror::Error;

/// Errors raised while loading or validating Braille tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table file is not valid TOML or does not match the table schema
    #[error("failed to parse {source_name} table: {message}")]
    Parse {
        /// Name of the table source (embedded code or file path)
        source_name: String,
        /// Parser message
        message: String,
    },

    /// The table file could not be read
    #[error("failed to read table file {path}: {message}")]
    Io {
        /// Path of the file
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// A character key is not exactly one code point
    #[error("character key {key:?} must be exactly one character")]
    InvalidCharacterKey {
        /// The offending key
        key: String,
    },

    /// A character or contraction maps to an empty output
    #[error("entry {key:?} has an empty Braille output")]
    EmptyOutput {
        /// The offending key or pattern
        key: String,
    },

    /// A contraction pattern is empty or not lowercase ASCII
    #[error("contraction pattern {pattern:?} must be non-empty lowercase ASCII without whitespace")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
    },

    /// A contraction output contains characters outside the Braille block
    #[error("contraction {pattern:?} must map to Braille cells only")]
    NonBrailleContraction {
        /// The offending pattern
        pattern: String,
    },

    /// A key or pattern is declared twice
    #[error("duplicate entry {key:?}")]
    Duplicate {
        /// The duplicated key or pattern
        key: String,
    },

    /// Table metadata is incomplete
    #[error("table metadata is invalid: {0}")]
    Metadata(String),
}

/// Grade selector that is neither `grade1` nor `grade2`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported Braille grade '{0}'")]
pub struct UnknownGrade(pub String);

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        let err = TableError::InvalidCharacterKey {
            key: "ab".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "character key \"ab\" must be exactly one character"
        );

        let err = TableError::Parse {
            source_name: "en".to_string(),
            message: "expected `=`".to_string(),
        };
        assert!(err.to_string().starts_with("failed to parse en table"));
    }

    #[test]
    fn test_unknown_grade_display() {
        let err = UnknownGrade("grade3".to_string());
        assert_eq!(err.to_string(), "unsupported Braille grade 'grade3'");
    }
}
