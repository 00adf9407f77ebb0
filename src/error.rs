//! Error types for the arcade binaries.
//!
//! The simulation itself is infallible; only terminal I/O and startup
//! configuration can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("logger initialisation failed: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, Error>;
