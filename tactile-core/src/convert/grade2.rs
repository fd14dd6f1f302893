//! Contracted (Grade 2) transcription
//!
//! Three stages, each consuming the previous stage's output:
//!
//! 1. [`whole_word_stage`]: lower-case, then replace boundary-delimited
//!    occurrences of every contraction longer than two characters.
//! 2. [`letter_group_stage`]: replace every occurrence of the remaining
//!    one- and two-character patterns anywhere in the buffer.
//! 3. [`residual_stage`]: transcribe whatever is not yet a Braille cell.
//!
//! Both contraction stages walk the table in declaration order and rewrite
//! the whole buffer per entry, so earlier entries shape what later ones see.
//! The letter-group stage runs over text already partly turned into cells;
//! patterns are plain ASCII, so they only ever match leftover plain text.

use crate::braille::is_braille_cell;
use crate::tables::{BrailleTables, CharacterMap, ContractionTable};

/// Run all three stages
pub fn convert(text: &str, tables: &BrailleTables) -> String {
    let words = whole_word_stage(text, tables.contractions());
    let groups = letter_group_stage(&words, tables.contractions());
    residual_stage(&groups, tables.characters())
}

/// Stage 1: lower-case and apply whole-word contractions
pub fn whole_word_stage(text: &str, contractions: &ContractionTable) -> String {
    contractions
        .whole_words()
        .fold(text.to_lowercase(), |buffer, entry| entry.apply(&buffer))
}

/// Stage 2: apply short contractions as unrestricted substrings
pub fn letter_group_stage(text: &str, contractions: &ContractionTable) -> String {
    contractions
        .letter_groups()
        .fold(text.to_string(), |buffer, entry| entry.apply(&buffer))
}

/// Stage 3: map every non-Braille character through the Grade 1 table
pub fn residual_stage(text: &str, characters: &CharacterMap) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        if is_braille_cell(ch) {
            out.push(ch);
        } else {
            characters.push_transcribed(ch, &mut out);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{embedded, Contraction};

    fn grade2(text: &str) -> String {
        convert(text, &embedded().unwrap())
    }

    #[test]
    fn test_whole_word_contraction() {
        assert_eq!(grade2("and"), "⠯");
        assert_eq!(grade2("AND"), "⠯");
        assert_eq!(grade2("the cat"), "⠮ ⠉⠁⠞");
    }

    #[test]
    fn test_whole_word_respects_boundaries() {
        let tables = embedded().unwrap();
        assert_eq!(
            whole_word_stage("theory", tables.contractions()),
            "theory"
        );
        // "th" still contracts in the letter-group stage
        assert_eq!(grade2("theory"), "⠹⠑⠕⠗⠽");
    }

    #[test]
    fn test_two_letter_words_match_inside_words() {
        // "so" is a letter group by length, so it also fires inside "also"
        assert_eq!(grade2("also"), "⠁⠇⠎");
        assert_eq!(grade2("so"), "⠎");
    }

    #[test]
    fn test_three_letter_group_only_matches_whole_words() {
        assert_eq!(grade2("ing"), "⠬");
        // "ing" is whole-word only; "in" still applies inside the word
        assert_eq!(grade2("reading"), "⠗⠑⠁⠙⠔⠛");
    }

    #[test]
    fn test_earlier_whole_word_entries_feed_later_ones() {
        let table = ContractionTable::new(vec![Contraction::new("xyz xyz", "⠿").unwrap()]);
        assert_eq!(whole_word_stage("xyz xyz", &table), "⠿");

        let table = ContractionTable::new(vec![
            Contraction::new("xyz", "⠭").unwrap(),
            Contraction::new("xyz xyz", "⠿").unwrap(),
        ]);
        // the first entry consumes both words before the second is tried
        assert_eq!(whole_word_stage("xyz xyz", &table), "⠭ ⠭");
    }

    #[test]
    fn test_letter_group_declaration_order() {
        let table = ContractionTable::new(vec![
            Contraction::new("th", "⠹").unwrap(),
            Contraction::new("he", "⠓").unwrap(),
        ]);
        assert_eq!(letter_group_stage("the", &table), "⠹e");

        let table = ContractionTable::new(vec![
            Contraction::new("he", "⠓").unwrap(),
            Contraction::new("th", "⠹").unwrap(),
        ]);
        assert_eq!(letter_group_stage("the", &table), "t⠓");
    }

    #[test]
    fn test_residual_stage_keeps_cells() {
        let tables = embedded().unwrap();
        assert_eq!(residual_stage("⠮ cat", tables.characters()), "⠮ ⠉⠁⠞");
        assert_eq!(residual_stage("⠼⠁", tables.characters()), "⠼⠁");
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            grade2("The knowledge of people."),
            "⠮ ⠅ ⠷ ⠏⠲"
        );
    }

    #[test]
    fn test_digits_and_unmapped() {
        assert_eq!(grade2("go 2"), "⠛ ⠼⠃");
        assert_eq!(grade2("ж"), "ж");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(grade2(""), "");
        assert_eq!(grade2(" \n\t"), " \n  ");
    }
}
