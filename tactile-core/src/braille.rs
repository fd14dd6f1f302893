//! Unicode Braille Patterns block helpers

/// First code point of the Braille Patterns block (blank cell)
pub const BRAILLE_BLOCK_START: char = '\u{2800}';

/// Last code point of the Braille Patterns block
pub const BRAILLE_BLOCK_END: char = '\u{28FF}';

/// Whether `ch` is a Braille cell (U+2800..=U+28FF)
#[inline]
pub fn is_braille_cell(ch: char) -> bool {
    (BRAILLE_BLOCK_START..=BRAILLE_BLOCK_END).contains(&ch)
}
