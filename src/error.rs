/// Error types for the portfolio

use thiserror::Error;

/// Main error type for the portfolio
#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid profile link {link:?}: {reason}")]
    InvalidProfileLink { link: String, reason: String },
}

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;
