use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

use super::HistorySource;
use crate::error::{Result, UpdateLogError};

const LOG_FORMAT: &str = "--pretty=format:%h - %an, %ar : %s";
const NOT_A_REPO: &str = "not a git repository";

/// Runs `git log` for the most recent commits.
#[derive(Debug, Clone)]
pub struct GitHistory {
    program: String,
    /// Repository to query (None = current directory)
    repo_path: Option<PathBuf>,
    depth: u32,
}

impl GitHistory {
    pub fn new(program: impl Into<String>, depth: u32) -> Self {
        Self {
            program: program.into(),
            repo_path: None,
            depth,
        }
    }

    pub fn with_repo_path(mut self, path: PathBuf) -> Self {
        self.repo_path = Some(path);
        self
    }

    fn args(&self) -> Vec<String> {
        vec![
            "log".to_string(),
            "-n".to_string(),
            self.depth.to_string(),
            LOG_FORMAT.to_string(),
            "--name-status".to_string(),
        ]
    }
}

impl HistorySource for GitHistory {
    fn recent_log(&self) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        if let Some(ref path) = self.repo_path {
            cmd.current_dir(path);
        }
        cmd.args(self.args());
        debug!(program = %self.program, args = ?self.args(), "reading recent history");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UpdateLogError::VcsNotFound(self.program.clone())
            } else {
                UpdateLogError::Io(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if stderr.contains(NOT_A_REPO) {
                return Err(UpdateLogError::NotARepository);
            }
            Err(UpdateLogError::CommandFailed {
                stderr: stderr.trim().to_string(),
                exit_code: output.status.code().unwrap_or(-1),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git_available() -> bool {
        Command::new("git").arg("--version").output().is_ok()
    }

    #[test]
    fn args_request_depth_and_name_status() {
        let git = GitHistory::new("git", 10);
        assert_eq!(
            git.args(),
            vec![
                "log",
                "-n",
                "10",
                "--pretty=format:%h - %an, %ar : %s",
                "--name-status"
            ]
        );
    }

    #[test]
    fn missing_program_is_not_found() {
        let git = GitHistory::new("definitely-not-a-vcs-binary", 10);
        let err = git.recent_log().unwrap_err();
        assert!(matches!(err, UpdateLogError::VcsNotFound(ref p) if p == "definitely-not-a-vcs-binary"));
    }

    #[test]
    fn outside_a_repository_fails() {
        if !git_available() {
            return;
        }
        let tmp = TempDir::new().unwrap();
        let git = GitHistory::new("git", 10).with_repo_path(tmp.path().to_path_buf());
        let result = Command::new("git")
            .args(["rev-parse", "--git-dir"])
            .current_dir(tmp.path())
            .output()
            .unwrap();
        if result.status.success() {
            // Temp dir happens to live inside a repository.
            return;
        }
        assert!(git.recent_log().is_err());
    }
}
