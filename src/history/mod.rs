//! Recent version-control history
//!
//! Reads the last few commits and pulls out the files they touched, so the
//! operator doesn't have to type the file list by hand.

mod extract;
mod git;

pub use extract::extract_changed_files;
pub use git::GitHistory;

use tracing::warn;
use crate::error::Result;

/// Anything that can produce raw `log --name-status` text.
pub trait HistorySource {
    fn recent_log(&self) -> Result<String>;
}

/// Read recent history, or `None` if it isn't available for any reason.
pub fn read_recent(source: &dyn HistorySource) -> Option<String> {
    match source.recent_log() {
        Ok(output) => Some(output),
        Err(e) => {
            warn!("Git not available or not a git repository ({}). Using manual input instead.", e);
            None
        }
    }
}

/// Files changed in recent history, in first-seen order. Empty when history
/// is unavailable.
pub fn detect_changed_files(source: &dyn HistorySource) -> Vec<String> {
    read_recent(source)
        .map(|log| extract_changed_files(&log))
        .unwrap_or_default()
}
