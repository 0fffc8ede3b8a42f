use std::io;

#[derive(Debug, thiserror::Error)]
pub enum UpdateLogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("'{0}' not found on PATH")]
    VcsNotFound(String),

    #[error("Not a git repository")]
    NotARepository,

    #[error("History command failed (exit {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, UpdateLogError>;
