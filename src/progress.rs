//! Progress feedback for the scan, built on `indicatif`.
//!
//! Bars are hidden in quiet mode and whenever stderr is not a terminal, so
//! piped output and CI logs stay clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

pub const TEMPLATE_FILE_SCAN: &str = "📁 {msg} {pos}/{len} files ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn new(quiet: bool) -> Self {
        Self { quiet_mode: quiet }
    }

    /// Determine if progress bars should be displayed
    pub fn should_show_progress(&self) -> bool {
        !self.quiet_mode && std::io::stderr().is_terminal()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressManager {
    config: ProgressConfig,
}

impl ProgressManager {
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// A manager whose bars are always hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressConfig::new(true))
    }

    /// Create a progress bar with the given length and template
    ///
    /// Returns a hidden progress bar if progress should not be shown
    pub fn create_bar(&self, len: u64, template: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
        let pb = ProgressBar::new(len);
        pb.set_style(style);
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_quiet_flag() {
        let config = ProgressConfig::new(true);
        assert!(!config.should_show_progress());
    }

    #[test]
    fn test_hidden_manager_creates_hidden_bars() {
        let pb = ProgressManager::hidden().create_bar(10, TEMPLATE_FILE_SCAN);
        assert!(pb.is_hidden());
    }
}
