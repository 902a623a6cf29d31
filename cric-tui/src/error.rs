//! Error types for cric-tui
//!
//! Wraps domain layer errors and terminal/IO errors for unified
//! error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Domain layer error
    #[error("Domain error: {0}")]
    Domain(#[from] libcricconnect::CricError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
