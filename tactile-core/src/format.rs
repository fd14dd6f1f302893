//! Display formatting of Braille output

/// Line-preserving display formatter
///
/// With the default empty separator visual formatting leaves the text as it
/// is; a non-empty separator is inserted between the characters of each line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFormatter {
    cell_separator: String,
}

impl DisplayFormatter {
    /// Formatter with no separator between cells
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter inserting `separator` between cells of each line
    pub fn with_cell_separator(separator: impl Into<String>) -> Self {
        Self {
            cell_separator: separator.into(),
        }
    }

    /// Separator placed between cells
    pub fn cell_separator(&self) -> &str {
        &self.cell_separator
    }

    /// Format `braille` for display; returns it unchanged when `include_visual` is off
    pub fn format(&self, braille: &str, include_visual: bool) -> String {
        if !include_visual || self.cell_separator.is_empty() {
            return braille.to_string();
        }

        braille
            .split('\n')
            .map(|line| self.space_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn space_line(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() * 2);
        for (i, ch) in line.chars().enumerate() {
            if i > 0 {
                out.push_str(&self.cell_separator);
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_visual_format_is_identity() {
        let formatter = DisplayFormatter::new();
        assert_eq!(formatter.format("⠉⠁⠞\n⠙⠕⠛", true), "⠉⠁⠞\n⠙⠕⠛");
        assert_eq!(formatter.format("", true), "");
    }

    #[test]
    fn test_visual_off_returns_input() {
        let formatter = DisplayFormatter::with_cell_separator(" ");
        assert_eq!(formatter.format("⠉⠁⠞", false), "⠉⠁⠞");
    }

    #[test]
    fn test_separator_preserves_lines() {
        let formatter = DisplayFormatter::with_cell_separator(" ");
        assert_eq!(formatter.format("⠉⠁⠞\n⠙⠕", true), "⠉ ⠁ ⠞\n⠙ ⠕");
        assert_eq!(formatter.format("⠁\n\n⠃", true), "⠁\n\n⠃");
    }
}
