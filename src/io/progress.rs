//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Processing step of one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Decoding the input image
    Load,
    /// Running the selected scan
    Scan,
    /// Writing the output image
    Export,
}

impl Stage {
    /// Number of stages a file passes through
    pub const COUNT: usize = 3;

    const fn position(self) -> usize {
        match self {
            Self::Load => 1,
            Self::Scan => 2,
            Self::Export => 3,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Scan => "scan",
            Self::Export => "export",
        }
    }
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per file for small batches and adds a single batch bar
/// once the file count exceeds what the rolling window can show
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// (`filename`, `stages_done`, `status`) for the rolling window display
    file_states: Vec<(String, usize, &'static str)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>8} [{bar:20.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.batch_bar = None;
        self.file_bars.clear();
        self.file_states.clear();

        // Batch bar only when files would scroll out of the rolling window
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(Stage::COUNT as u64);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Whether a batch bar summarizes the run
    pub const fn is_batch_mode(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Number of per-file bars on screen
    pub fn bar_count(&self) -> usize {
        self.file_bars.len()
    }

    /// Register a file that is about to be processed
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), 0, ""));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, 0, "queued");
        }
        self.update_bars();
    }

    /// Record that a file entered a stage
    pub fn advance(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = stage.position() - 1;
            state.2 = stage.label();
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = Stage::COUNT;
            state.2 = "done";
        }
        self.update_bars();
    }

    /// Stages finished for a file, if it was started
    pub fn stages_done(&self, index: usize) -> Option<usize> {
        self.file_states
            .get(index)
            .filter(|(name, _, _)| !name.is_empty())
            .map(|(_, done, _)| *done)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recently started files in the available bars
    fn update_bars(&self) {
        let active: Vec<&(String, usize, &'static str)> = self
            .file_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();
        let start_idx = active.len().saturating_sub(self.file_bars.len());
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, bar) in self.file_bars.iter().enumerate() {
            if let Some((name, done, status)) = visible.get(bar_idx) {
                bar.set_position(*done as u64);
                bar.set_message(*status);
                bar.set_prefix(name.clone());
            } else {
                bar.set_position(0);
                bar.set_message("");
                bar.set_prefix(String::new());
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/progress.rs"]
mod unit_tests;
