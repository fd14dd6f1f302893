//! Table-driven text-to-Braille transcription
//!
//! Converts text into Unicode Braille cells using either uncontracted
//! Grade 1 (letter for letter) or contracted Grade 2 (whole-word and
//! letter-group contractions applied before letter-for-letter conversion).
//!
//! # Architecture
//!
//! - **Tables**: character map and ordered contraction table, loaded from
//!   TOML and shared read-only
//! - **Conversion**: one pass for Grade 1, three explicit stages for Grade 2
//! - **Presentation**: display formatting, dated file header and statistics
//!
//! # Example
//!
//! ```rust
//! use tactile_core::{BrailleEngine, Grade};
//!
//! let engine = BrailleEngine::new().unwrap();
//!
//! assert_eq!(engine.convert("cat", Grade::Grade1), "⠉⠁⠞");
//! assert_eq!(engine.convert("the cat", Grade::Grade2), "⠮ ⠉⠁⠞");
//! ```

pub mod braille;
pub mod convert;
pub mod engine;
pub mod error;
pub mod format;
pub mod grade;
pub mod metadata;
pub mod stats;
pub mod tables;

pub use braille::is_braille_cell;
pub use engine::{BrailleEngine, Transcription};
pub use error::{Result, TableError, UnknownGrade};
pub use format::DisplayFormatter;
pub use grade::Grade;
pub use metadata::{Clock, FixedClock, SystemClock};
pub use stats::Statistics;
pub use tables::BrailleTables;
