//! Plain text output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the display Braille of each document
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_document(&mut self, document: &Document) -> Result<()> {
        writeln!(self.writer, "{}", document.response.braille)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
