mod cli;
mod commands;
mod error;
mod format;
mod history;
mod session;
mod storage;
mod ui;

use clap::Parser;
use cli::Cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("Cannot determine current directory: {}", e);
        process::exit(1);
    });

    if let Err(e) = commands::record::run(&cwd, &cli) {
        // The session is interactive and advisory; report and end normally.
        eprintln!("{}", ui::error_line("Error:", &e.to_string()));
    }
}
