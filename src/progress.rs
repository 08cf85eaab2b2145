//! Progress bar display for archive builds

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for bundle generation
///
/// Hidden when stderr is not a terminal so logs and test output stay clean.
pub struct ProgressDisplay {
    archive_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total archive count
    pub fn new(total_archives: u64) -> Self {
        if !console::Term::stderr().is_term() {
            return Self {
                archive_pb: ProgressBar::hidden(),
            };
        }

        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let archive_pb = ProgressBar::new(total_archives);
        archive_pb.set_style(style);
        Self { archive_pb }
    }

    /// Show the archive currently being built
    pub fn update(&self, archive_name: &str) {
        // Truncate long names for display
        let display_name = if archive_name.len() > 50 {
            let start = archive_name
                .char_indices()
                .map(|(i, _)| i)
                .find(|&i| archive_name.len() - i <= 47)
                .unwrap_or(0);
            format!("...{}", &archive_name[start..])
        } else {
            archive_name.to_string()
        };
        self.archive_pb.set_message(display_name);
    }

    /// Count one archive as processed
    pub fn inc(&self) {
        self.archive_pb.inc(1);
    }

    pub fn finish(&self) {
        self.archive_pb.finish_and_clear();
    }
}
