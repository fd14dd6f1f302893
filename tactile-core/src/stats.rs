//! Conversion statistics

use crate::grade::Grade;

/// Ratio reported for Grade 1, which never compresses
pub const GRADE1_RATIO: &str = "1.00";

/// Summary of a single conversion
///
/// Lengths are counted in UTF-16 code units so they agree with what web
/// clients see for the same strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Length of the input text
    pub original_length: usize,
    /// Length of the converted output, before formatting and header
    pub braille_length: usize,
    /// Whitespace-separated words in the input
    pub word_count: usize,
    /// Newline-separated lines in the input
    pub line_count: usize,
    /// Grade used
    pub grade: Grade,
    /// `braille_length / original_length` with two decimals
    pub compression_ratio: String,
}

impl Statistics {
    /// Compute statistics for `original` converted to `braille`
    pub fn compute(original: &str, braille: &str, grade: Grade) -> Self {
        let original_length = utf16_len(original);
        let braille_length = utf16_len(braille);

        Self {
            original_length,
            braille_length,
            word_count: word_count(original),
            line_count: line_count(original),
            grade,
            compression_ratio: compression_ratio(grade, original_length, braille_length),
        }
    }
}

/// Length in UTF-16 code units
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Number of whitespace-separated words; blank input has none
///
/// Whitespace follows the web definition: Unicode `White_Space` plus the
/// byte-order mark, minus U+0085.
pub fn word_count(text: &str) -> usize {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

fn is_word_separator(ch: char) -> bool {
    ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{0085}')
}

/// Number of `\n`-separated segments; empty input is one line
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Compression ratio string for `grade`
pub fn compression_ratio(grade: Grade, original_length: usize, braille_length: usize) -> String {
    match grade {
        Grade::Grade1 => GRADE1_RATIO.to_string(),
        Grade::Grade2 if original_length == 0 => "0.00".to_string(),
        Grade::Grade2 => fixed_two(braille_length as f64 / original_length as f64),
    }
}

/// Format a non-negative value with two decimals
///
/// Rounds the exact binary value of `value`, ties going up, so `0.075`
/// (stored just below) gives `"0.07"` while `0.125` gives `"0.13"`.
fn fixed_two(value: f64) -> String {
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    if exponent >= 0 {
        // an integer, nothing to round
        return format!("{value:.2}");
    }

    let shift = exponent.unsigned_abs();
    let hundredths = if shift > 120 {
        0
    } else {
        // floor(mantissa * 100 / 2^shift + 1/2)
        ((u128::from(mantissa) * 200 + (1u128 << shift)) >> (shift + 1)) as u64
    };
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
