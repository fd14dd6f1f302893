//! Character-level Braille lookup with an ASCII fast path

use std::collections::HashMap;

/// Maps single lowercase characters to their Braille output
///
/// ASCII keys live in a direct-indexed array; anything else falls back to a
/// hash lookup. Characters without an entry pass through unchanged.
#[derive(Debug, Clone)]
pub struct CharacterMap {
    ascii: [Option<Box<str>>; 128],
    non_ascii: HashMap<char, Box<str>>,
    len: usize,
}

impl CharacterMap {
    /// Build from `(character, braille)` pairs; later pairs win
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<Box<str>>,
    {
        let mut ascii: [Option<Box<str>>; 128] = std::array::from_fn(|_| None);
        let mut non_ascii = HashMap::new();

        for (ch, braille) in entries {
            if ch.is_ascii() {
                ascii[ch as usize] = Some(braille.into());
            } else {
                non_ascii.insert(ch, braille.into());
            }
        }

        let len = ascii.iter().filter(|slot| slot.is_some()).count() + non_ascii.len();

        Self {
            ascii,
            non_ascii,
            len,
        }
    }

    /// Braille output for `ch`, if the table has one
    #[inline]
    pub fn get(&self, ch: char) -> Option<&str> {
        if ch.is_ascii() {
            self.ascii[ch as usize].as_deref()
        } else {
            self.non_ascii.get(&ch).map(|s| &**s)
        }
    }

    /// Append the output for `ch` to `out`, passing unmapped characters through
    #[inline]
    pub fn push_transcribed(&self, ch: char, out: &mut String) {
        match self.get(ch) {
            Some(braille) => out.push_str(braille),
            None => out.push(ch),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
