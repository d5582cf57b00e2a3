//! Error types for catalog loading and lookup.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown component type: {type_id}")]
    UnknownType { type_id: String },

    #[error("Duplicate component type in catalog: {type_id}")]
    DuplicateType { type_id: String },

    #[error("Invalid catalog entry '{type_id}': {reason}")]
    InvalidEntry { type_id: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::UnknownType {
            type_id: "mainframe".into(),
        };
        assert!(err.to_string().contains("mainframe"));
    }
}
