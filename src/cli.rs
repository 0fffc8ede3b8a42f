use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "update-log",
    about = "Record a dated change entry in the project's updates log"
)]
pub struct Cli {
    /// Log file to update (default: cursor-updates.md in the current directory)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file (default: .update-log.toml in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Don't look at git history; always ask for the file list
    #[arg(long)]
    pub no_history: bool,

    /// Number of recent commits to scan for changed files
    #[arg(long, value_name = "N")]
    pub depth: Option<u32>,
}
