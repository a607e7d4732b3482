//! # Application Errors
//!
//! Everything that can stop the `till` binary. Core errors pass through
//! unchanged so their messages (conflicting codes, unknown remainders) reach
//! the user as-is.

use std::path::PathBuf;

use thiserror::Error;
use till_core::CoreError;

use crate::config::ConfigError;

/// CLI application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog file: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// A deal in the catalog file names a code missing from its product list.
    #[error("Deal refers to unknown product \"{code}\"")]
    UnknownDealProduct { code: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Checkout task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_are_transparent() {
        let err: AppError = CoreError::UnknownItem {
            remaining: "DBAB".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "No product found for \"DBAB\"");
    }

    #[test]
    fn test_catalog_read_names_path() {
        let err = AppError::CatalogRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read catalog missing.json: not found");
    }
}
