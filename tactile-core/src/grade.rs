//! Braille grade selector

use crate::error::UnknownGrade;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Braille grade used for transcription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Uncontracted, letter-for-letter transcription
    #[default]
    Grade1,
    /// Contracted transcription using whole-word and letter-group contractions
    Grade2,
}

impl Grade {
    /// All supported grades, in presentation order
    pub const ALL: [Grade; 2] = [Grade::Grade1, Grade::Grade2];

    /// Wire identifier (`grade1` / `grade2`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Grade1 => "grade1",
            Grade::Grade2 => "grade2",
        }
    }

    /// Braille number sign plus digit used in file headers
    pub fn indicator(&self) -> &'static str {
        match self {
            Grade::Grade1 => "⠼⠁",
            Grade::Grade2 => "⠼⠃",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grade1" => Ok(Grade::Grade1),
            "grade2" => Ok(Grade::Grade2),
            other => Err(UnknownGrade(other.to_string())),
        }
    }
}
