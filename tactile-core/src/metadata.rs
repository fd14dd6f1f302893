//! File header for downloadable Braille output

use crate::grade::Grade;
use chrono::{NaiveDate, Utc};

/// "brl file generated" in Grade 1 cells
pub const TITLE: &str = "⠃⠗⠇ ⠋⠊⠇⠑ ⠛⠑⠝⠑⠗⠁⠞⠫";

/// "grade" in Grade 1 cells
pub const GRADE_LABEL: &str = "⠛⠗⠁⠙⠑";

/// Braille dash cell used for the divider line
pub const DIVIDER_CELL: char = '⠤';

/// Number of cells in the divider line
pub const DIVIDER_WIDTH: usize = 20;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock frozen on a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Header block: title with date, grade indicator, divider and a blank line
pub fn header(grade: Grade, date: NaiveDate) -> String {
    let divider: String = std::iter::repeat(DIVIDER_CELL)
        .take(DIVIDER_WIDTH)
        .collect();
    format!(
        "{TITLE} {}\n{GRADE_LABEL} {}\n{divider}\n\n",
        date.format("%Y-%m-%d"),
        grade.indicator()
    )
}

/// Prepend the header to formatted Braille
pub fn with_header(formatted: &str, grade: Grade, date: NaiveDate) -> String {
    let mut out = header(grade, date);
    out.push_str(formatted);
    out
}
