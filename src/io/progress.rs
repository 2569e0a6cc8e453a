//! Batch progress tracking for multi-file solving

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch runs
///
/// A single puzzle solves too quickly to be worth a bar, so the display only
/// appears for multi-file targets. Result lines are routed through the
/// display so they never tear an active bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Initialize the batch bar for the given number of files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(bar));
        }
    }

    /// Show the file currently being solved
    pub fn start_file(&mut self, index: usize, path: &Path) {
        if let Some(ref bar) = self.batch_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_position(index as u64);
            bar.set_message(display_name);
        }
    }

    /// Mark a file as completed
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref bar) = self.batch_bar {
            bar.set_position((index + 1) as u64);
        }
    }

    /// Print a line above the progress display
    pub fn println(&self, message: &str) {
        let _ = self.multi_progress.println(message);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All puzzles solved");
        }
        let _ = self.multi_progress.clear();
    }
}
