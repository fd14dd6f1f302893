//! Uncontracted (Grade 1) transcription

use crate::tables::CharacterMap;

/// Lower-case `text` and transcribe it character by character
///
/// Characters missing from the map are copied unchanged. Capitalisation is
/// not marked.
pub fn convert(text: &str, characters: &CharacterMap) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len() * 3);
    for ch in lowered.chars() {
        characters.push_transcribed(ch, &mut out);
    }
    out
}
