//! Ordered Grade 2 contraction table
//!
//! Entries keep their declaration order. Whether an entry is a whole-word
//! contraction or a free letter-group substitution depends only on the
//! pattern length.

use regex::{NoExpand, Regex};

/// Patterns longer than this are whole-word contractions
pub const WHOLE_WORD_MIN_EXCLUSIVE: usize = 2;

/// A single contraction rule
///
/// Whole-word entries carry a matcher compiled once at load time. Word
/// boundaries are ASCII-only: `[A-Za-z0-9_]` are word characters, everything
/// else (Braille cells and all non-ASCII text included) is not.
#[derive(Debug, Clone)]
pub struct Contraction {
    /// Lowercase source pattern
    pub pattern: String,
    /// Replacement Braille cells
    pub braille: String,
    word_matcher: Option<Regex>,
}

impl Contraction {
    /// Create a contraction, compiling the word matcher for long patterns
    pub fn new(
        pattern: impl Into<String>,
        braille: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let word_matcher = if pattern.chars().count() > WHOLE_WORD_MIN_EXCLUSIVE {
            Some(Regex::new(&format!(
                r"(?-u:\b){}(?-u:\b)",
                regex::escape(&pattern)
            ))?)
        } else {
            None
        };

        Ok(Self {
            pattern,
            braille: braille.into(),
            word_matcher,
        })
    }

    /// Whether this entry is matched only between word boundaries
    #[inline]
    pub fn is_whole_word(&self) -> bool {
        self.word_matcher.is_some()
    }

    /// Apply this entry to `text`
    ///
    /// Whole-word entries replace every boundary-delimited occurrence, left
    /// to right and non-overlapping; letter groups replace every occurrence.
    pub fn apply(&self, text: &str) -> String {
        match &self.word_matcher {
            Some(matcher) => matcher
                .replace_all(text, NoExpand(&self.braille))
                .into_owned(),
            None => text.replace(&self.pattern, &self.braille),
        }
    }
}

impl PartialEq for Contraction {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.braille == other.braille
    }
}

impl Eq for Contraction {}

/// Contractions in declaration order
#[derive(Debug, Clone, Default)]
pub struct ContractionTable {
    entries: Vec<Contraction>,
}

impl ContractionTable {
    /// Build from contractions in application order
    pub fn new(entries: Vec<Contraction>) -> Self {
        Self { entries }
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &[Contraction] {
        &self.entries
    }

    /// Whole-word entries (pattern length > 2), declaration order
    pub fn whole_words(&self) -> impl Iterator<Item = &Contraction> {
        self.entries.iter().filter(|c| c.is_whole_word())
    }

    /// Letter-group entries (pattern length <= 2), declaration order
    pub fn letter_groups(&self) -> impl Iterator<Item = &Contraction> {
        self.entries.iter().filter(|c| !c.is_whole_word())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
