mod app;
mod config;
mod error;
mod paths;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dropselect::Terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::DemoConfig;
use crate::error::DemoError;

/// Environment variable selecting the log level.
const LOG_ENV: &str = "DROPSELECT_LOG";

fn main() -> ExitCode {
    // The demo still runs when the log cannot be opened
    if let Err(e) = init_logging() {
        eprintln!("Warning: running without a log: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Demo failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> Result<(), DemoError> {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("dropselect-demo.log"));
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Debug);

    init_logging_at(&path, level)
}

fn init_logging_at(path: &Path, level: LevelFilter) -> Result<(), DemoError> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    log::info!("Logging to {} at {}", path.display(), level);
    Ok(())
}

fn run() -> Result<(), DemoError> {
    let config = DemoConfig::load()?;
    // Restored on drop, including when the app returns an error
    let mut terminal = Terminal::new()?;
    App::new(config).run(&mut terminal)
}
