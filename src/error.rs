//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while CLI/main
//! uses `anyhow` for convenient error propagation. Per-item resolution
//! failures never surface here - they live in `Outcome::Error` rows; this
//! type covers the failures that stop a run outright.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid credential/configuration - fatal at startup,
    /// before any batch begins.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable input to work on
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
