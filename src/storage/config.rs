use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = ".update-log.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Log file, relative to the working directory unless absolute.
    pub log_file: PathBuf,
    /// Heading that new entries are inserted under.
    pub marker: String,
    pub heading: String,
    pub intro: String,
    pub history_depth: u32,
    pub vcs_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: PathBuf::from("cursor-updates.md"),
            marker: "## Updates".to_string(),
            heading: "Cursor Updates Log".to_string(),
            intro: "This file tracks significant changes to the project.".to_string(),
            history_depth: 10,
            vcs_command: "git".to_string(),
        }
    }
}

impl Config {
    /// Document written when the log file doesn't exist yet.
    pub fn default_document(&self) -> String {
        format!("# {}\n\n{}\n\n{}\n\n", self.heading, self.intro, self.marker)
    }

    pub fn log_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.log_file)
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
