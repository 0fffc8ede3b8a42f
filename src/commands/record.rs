use std::io;
use std::path::Path;
use tracing::debug;
use crate::cli::Cli;
use crate::error::{Result, UpdateLogError};
use crate::history::{self, GitHistory, HistorySource};
use crate::session::{self, LineSource, Terminal};
use crate::storage::config::{self, Config};
use crate::storage::log::LogWriter;
use crate::ui;

/// Resolve configuration: config file first, then command-line overrides.
fn load_config(cwd: &Path, cli: &Cli) -> Result<Config> {
    let path = match &cli.config {
        Some(p) => cwd.join(p),
        None => cwd.join(config::DEFAULT_CONFIG_FILE),
    };
    let mut config = config::read_config(&path)?;
    if let Some(ref file) = cli.file {
        config.log_file = file.clone();
    }
    if let Some(depth) = cli.depth {
        config.history_depth = depth;
    }
    Ok(config)
}

pub fn run(cwd: &Path, cli: &Cli) -> Result<()> {
    let config = load_config(cwd, cli)?;
    debug!(?config, "configuration loaded");

    let git = GitHistory::new(config.vcs_command.clone(), config.history_depth)
        .with_repo_path(cwd.to_path_buf());
    let vcs: Option<&dyn HistorySource> = if cli.no_history { None } else { Some(&git) };

    let writer = LogWriter::new(config.log_path(cwd), &config);
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    if let Outcome::WriteFailed(e) = record_update(&mut terminal, vcs, &writer, &config.heading)? {
        let path = writer.path().display().to_string();
        eprintln!("{}", ui::error_line("Error updating", &format!("{}: {}", path, e)));
    }
    Ok(())
}

/// How a session ended.
#[derive(Debug)]
pub enum Outcome {
    Written,
    /// The entry could not be recorded; the session still ends normally.
    WriteFailed(UpdateLogError),
}

/// One full session: detect files, ask the operator, write the entry.
/// Only input/output failures on the session itself are errors.
pub fn record_update(
    source: &mut dyn LineSource,
    vcs: Option<&dyn HistorySource>,
    writer: &LogWriter,
    heading: &str,
) -> Result<Outcome> {
    let detected = vcs
        .map(|h| history::detect_changed_files(h))
        .unwrap_or_default();
    debug!(count = detected.len(), "detected changed files");

    source.show(&ui::banner(&format!("Updating {}", heading)))?;
    let record = session::collect(source, detected)?;

    match writer.write(&record) {
        Ok(()) => {
            let path = writer.path().display().to_string();
            source.show(&ui::success_line("Updated", &path))?;
            Ok(Outcome::Written)
        }
        Err(e) => Ok(Outcome::WriteFailed(e)),
    }
}
