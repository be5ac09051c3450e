use thiserror::Error;

/// Custom error types for tripq
#[derive(Debug, Error)]
pub enum TripqError {
    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
