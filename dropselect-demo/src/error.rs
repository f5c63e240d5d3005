use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Terminal(#[from] dropselect::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
