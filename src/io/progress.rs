//! Progress reporting for candidate fingerprint scans

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static SCAN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Candidates: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks progress through the candidate fingerprint scan
///
/// One bar over the whole corpus; the message shows the candidate currently
/// being fingerprinted so long stalls are attributable to a specific file.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the candidate count
    pub fn new(candidate_count: usize) -> Self {
        let bar = ProgressBar::new(candidate_count as u64);
        bar.set_style(SCAN_STYLE.clone());

        Self { bar }
    }

    /// Show the candidate currently being processed
    pub fn start_candidate(&self, path: &Path) {
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar.set_message(display_name);
    }

    /// Mark one candidate as finished, cached or computed
    pub fn candidate_done(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar once the scan completes
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
