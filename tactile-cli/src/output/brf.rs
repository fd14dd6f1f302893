//! Braille file output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Page break between documents
const FORM_FEED: char = '\u{000C}';

/// BRF formatter - outputs the dated metadata variant of each document,
/// separated by form feeds
pub struct BrfFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> BrfFormatter<W> {
    /// Create a new BRF formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for BrfFormatter<W> {
    fn write_document(&mut self, document: &Document) -> Result<()> {
        if self.written > 0 {
            write!(self.writer, "{FORM_FEED}")?;
        }
        writeln!(self.writer, "{}", document.response.braille_with_metadata)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
