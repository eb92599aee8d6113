//! Deckhand Error Types
//!
//! Centralized error handling using thiserror for type-safe errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for deckhand
#[derive(Error, Debug)]
pub enum DeckhandError {
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),

    #[error("Fullscreen error: {0}")]
    Fullscreen(#[from] FullscreenError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Deck loading and validation errors
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Deck contains no slides")]
    EmptyDeck,

    #[error("Failed to read deck file '{path}': {reason}")]
    FileRead { path: PathBuf, reason: String },

    #[error("Failed to parse deck file: {0}")]
    Parse(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Config library error: {0}")]
    ConfigLib(#[from] config::ConfigError),
}

/// Terminal setup and rendering errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal initialization failed: {0}")]
    InitFailed(String),

    #[error("Terminal restoration failed: {0}")]
    RestoreFailed(String),
}

/// Fullscreen request errors (non-fatal, observed asynchronously)
#[derive(Error, Debug)]
pub enum FullscreenError {
    #[error("Fullscreen is not supported on this terminal")]
    NotSupported,

    #[error("Fullscreen I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for deckhand operations
pub type Result<T> = std::result::Result<T, DeckhandError>;

/// Result type alias for deck operations
pub type DeckResult<T> = std::result::Result<T, DeckError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for terminal operations
pub type TuiResult<T> = std::result::Result<T, TuiError>;

/// Result type alias for fullscreen operations
pub type FullscreenResult<T> = std::result::Result<T, FullscreenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeckError::EmptyDeck;
        assert_eq!(err.to_string(), "Deck contains no slides");
    }

    #[test]
    fn test_error_conversion() {
        let deck_err = DeckError::Parse("unexpected key".to_string());
        let top: DeckhandError = deck_err.into();
        assert!(matches!(top, DeckhandError::Deck(_)));
    }
}
