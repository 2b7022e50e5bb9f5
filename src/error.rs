use thiserror::Error;

/// Errors raised while loading configuration or appointment data.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("DOM unavailable: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
