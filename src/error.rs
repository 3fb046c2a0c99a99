use crate::config::ConfigError;
use crate::datasource::DataSourceError;
use crate::domain::{UpdateError, ValidationError};
use crate::orchestration::RefreshError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid portfolio: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid update: {0}")]
    Update(#[from] UpdateError),
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),
    #[error("Quote refresh failed: {0}")]
    Refresh(#[from] RefreshError),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed portfolio JSON: {0}")]
    Json(#[from] serde_json::Error),
}
