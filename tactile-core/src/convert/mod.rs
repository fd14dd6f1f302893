//! Text-to-Braille conversion for both grades

pub mod grade1;
pub mod grade2;

use crate::grade::Grade;
use crate::tables::BrailleTables;

/// Convert `text` with the algorithm selected by `grade`
pub fn convert(text: &str, grade: Grade, tables: &BrailleTables) -> String {
    match grade {
        Grade::Grade1 => grade1::convert(text, tables.characters()),
        Grade::Grade2 => grade2::convert(text, tables),
    }
}
