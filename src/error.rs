//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by the terminal client.
///
/// Terminal and input failures arrive as [`std::io::Error`]; the only other
/// failure mode is configuration parsing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
