//! Error types for CricConnect

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CricError>;

#[derive(Error, Debug)]
pub enum CricError {
    #[error("Preferences I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preferences format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CricError::InvalidInput("ground name is required".to_string());
        assert_eq!(error.to_string(), "Invalid input: ground name is required");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no prefs");
        let error: CricError = io.into();
        assert!(matches!(error, CricError::Io(_)));
    }
}
