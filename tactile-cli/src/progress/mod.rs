//! Progress reporting for batch conversion

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Tracks converted documents and the source characters they held
///
/// Shared by reference across worker threads; documents may complete in any
/// order.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    characters: AtomicUsize,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            characters: AtomicUsize::new(0),
            quiet,
        }
    }

    /// Start a bar over `total_documents`
    pub fn init_documents(&mut self, total_documents: u64) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("⣿⡇⠀");

        let pb = ProgressBar::new(total_documents);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record a converted document and its source length
    pub fn document_converted(&self, source: &str, characters: usize) {
        let total = self.characters.fetch_add(characters, Ordering::Relaxed) + characters;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{source} ({total} characters)"));
            pb.inc(1);
        }
    }

    /// Source characters converted so far
    pub fn characters(&self) -> usize {
        self.characters.load(Ordering::Relaxed)
    }

    /// Finish the bar with the character total
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} characters transcribed", self.characters()));
        }
    }

    /// Whether a bar is active
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
