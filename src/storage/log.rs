use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDate};
use tracing::debug;
use crate::error::{Result, UpdateLogError};
use crate::format::{self, ChangeRecord};
use crate::storage::config::Config;

/// Splice `entry` directly after the line holding the first `marker`.
/// Without a marker the entry goes at the end.
pub fn insert_entry(content: &str, marker: &str, entry: &str) -> String {
    let Some(marker_pos) = content.find(marker) else {
        debug!(marker, "marker not found, appending entry");
        return format!("{}{}", content, entry);
    };

    match content[marker_pos..].find('\n') {
        Some(offset) => {
            let insert_at = marker_pos + offset + 1;
            format!("{}{}{}", &content[..insert_at], entry, &content[insert_at..])
        }
        // Marker is the last line and has no newline.
        None => format!("{}\n{}", content, entry),
    }
}

/// Writes entries into one markdown log file.
#[derive(Debug, Clone)]
pub struct LogWriter {
    path: PathBuf,
    marker: String,
    default_document: String,
}

impl LogWriter {
    pub fn new(path: PathBuf, config: &Config) -> Self {
        Self {
            path,
            marker: config.marker.clone(),
            default_document: config.default_document(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record an entry dated today (local time).
    pub fn write(&self, record: &ChangeRecord) -> Result<()> {
        self.write_on(Local::now().date_naive(), record)
    }

    /// Record an entry with an explicit date.
    /// The file is read once and replaced once via tmp+rename.
    pub fn write_on(&self, date: NaiveDate, record: &ChangeRecord) -> Result<()> {
        let content = self.read_or_default()?;
        let entry = format::render_entry(date, record);
        let new_content = insert_entry(&content, &self.marker, &entry);
        self.replace(&new_content)
    }

    fn read_or_default(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "log file missing, starting from default document");
                Ok(self.default_document.clone())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn replace(&self, content: &str) -> Result<()> {
        let write_err = |source| UpdateLogError::Write {
            path: self.path.display().to_string(),
            source,
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "update-log".to_string());
        let tmp = self.path.with_file_name(format!(".tmp.{}", file_name));
        let discard_tmp = |e| {
            let _ = fs::remove_file(&tmp);
            write_err(e)
        };
        fs::write(&tmp, content).map_err(discard_tmp)?;
        fs::rename(&tmp, &self.path).map_err(discard_tmp)?;
        Ok(())
    }
}
