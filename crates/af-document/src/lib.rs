//! af-document: export/import document format for designs.

pub mod convert;
pub mod schema;
pub mod validate;

use tracing::info;

pub use convert::{export_design, import_design};
pub use schema::*;
pub use validate::{MalformedDocument, validate_document};

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("Malformed document: {0}")]
    Malformed(#[from] MalformedDocument),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn to_json_string(document: &DesignDocument) -> DocumentResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

pub fn from_json_str(content: &str) -> DocumentResult<DesignDocument> {
    Ok(serde_json::from_str(content)?)
}

pub fn to_yaml_string(document: &DesignDocument) -> DocumentResult<String> {
    Ok(serde_yaml::to_string(document)?)
}

pub fn from_yaml_str(content: &str) -> DocumentResult<DesignDocument> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn load_json(path: &std::path::Path) -> DocumentResult<DesignDocument> {
    let content = std::fs::read_to_string(path)?;
    let document = from_json_str(&content)?;
    info!(path = %path.display(), "loaded design document");
    Ok(document)
}

pub fn save_json(path: &std::path::Path, document: &DesignDocument) -> DocumentResult<()> {
    let content = to_json_string(document)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "saved design document");
    Ok(())
}

pub fn load_yaml(path: &std::path::Path) -> DocumentResult<DesignDocument> {
    let content = std::fs::read_to_string(path)?;
    let document = from_yaml_str(&content)?;
    info!(path = %path.display(), "loaded design document");
    Ok(document)
}

pub fn save_yaml(path: &std::path::Path, document: &DesignDocument) -> DocumentResult<()> {
    let content = to_yaml_string(document)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "saved design document");
    Ok(())
}
