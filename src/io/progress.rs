//! Per-stage progress bars for extraction and export

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one progress bar per pipeline stage
///
/// A stage bar is replaced when the next stage starts and cleared on finish.
#[derive(Default)]
pub struct ProgressManager {
    stage_bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no active stage
    pub const fn new() -> Self {
        Self { stage_bar: None }
    }

    /// Begin a stage of `length` steps, finishing any previous stage
    pub fn start_stage(&mut self, name: &'static str, length: usize) {
        self.finish();
        let bar = ProgressBar::new(length as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(name);
        self.stage_bar = Some(bar);
    }

    /// Advance the current stage by one step, labelled with `message`
    pub fn advance(&self, message: String) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_message(message);
            bar.inc(1);
        }
    }

    /// Position of the current stage, if any
    pub fn position(&self) -> Option<u64> {
        self.stage_bar.as_ref().map(ProgressBar::position)
    }

    /// Clear the current stage bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.stage_bar.take() {
            bar.finish_and_clear();
        }
    }
}
