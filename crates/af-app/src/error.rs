//! Error types for the af-app service layer.

use std::path::PathBuf;

use af_graph::GraphError;

/// Application error type that wraps errors from the backend crates
/// and gives frontends a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Design error: {0}")]
    Graph(#[from] GraphError),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid options: {0}")]
    Options(String),
}

/// Result type for af-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<af_document::DocumentError> for AppError {
    fn from(err: af_document::DocumentError) -> Self {
        AppError::Document(err.to_string())
    }
}

impl From<af_catalog::CatalogError> for AppError {
    fn from(err: af_catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}
