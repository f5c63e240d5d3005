use thiserror::Error;

/// Errors raised by the terminal backend and theme parsing.
///
/// Widget input handling never fails; this only covers I/O and
/// configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: &'static str },
}
