//! Terminal progress display for batches of generated artworks

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the numbered runs of one invocation
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no runs scheduled
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: 0,
        }
    }

    /// Show a bar for `run_count` runs of the named strategy
    pub fn initialize(&mut self, run_count: usize, strategy: &str) {
        let bar = ProgressBar::new(run_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_prefix(strategy.to_string());
        self.bar = bar;
        self.completed = 0;
    }

    /// Show the output file currently being generated
    pub fn start_run(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
    }

    /// Mark a run as completed
    pub fn complete_run(&mut self, elapsed: Duration) {
        self.completed += 1;
        self.bar.set_message(format!("last run {elapsed:.2?}"));
        self.bar.inc(1);
    }

    /// Number of runs completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
