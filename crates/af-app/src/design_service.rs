//! Design file loading and saving, catalog loading, and export naming.

use std::path::Path;

use af_catalog::{Catalog, CatalogEntry};
use af_document::DesignDocument;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{AppError, AppResult};

/// On-disk encoding of a design document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignFormat {
    Json,
    Yaml,
}

impl DesignFormat {
    /// `.yaml`/`.yml` select YAML; anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DesignFormat::Yaml
            }
            _ => DesignFormat::Json,
        }
    }
}

/// Load a design document from a JSON or YAML file.
pub fn load_design(path: &Path) -> AppResult<DesignDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document = match DesignFormat::from_path(path) {
        DesignFormat::Json => af_document::from_json_str(&content)?,
        DesignFormat::Yaml => af_document::from_yaml_str(&content)?,
    };
    info!(
        path = %path.display(),
        components = document.components.len(),
        connections = document.connections.len(),
        "loaded design"
    );
    Ok(document)
}

/// Save a design document, encoding by file extension.
pub fn save_design(path: &Path, document: &DesignDocument) -> AppResult<()> {
    let content = match DesignFormat::from_path(path) {
        DesignFormat::Json => af_document::to_json_string(document)?,
        DesignFormat::Yaml => af_document::to_yaml_string(document)?,
    };

    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "saved design");
    Ok(())
}

/// Load a catalog from a YAML list of entries.
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let entries: Vec<CatalogEntry> = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Catalog(format!("Failed to parse catalog YAML: {}", e)))?;
    let catalog = Catalog::from_entries(entries)?;
    info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Suggested download name for an export made at `now`.
pub fn default_export_file_name(now: DateTime<Utc>) -> String {
    format!("system-design-{}.json", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_by_extension() {
        assert_eq!(DesignFormat::from_path(Path::new("a.yaml")), DesignFormat::Yaml);
        assert_eq!(DesignFormat::from_path(Path::new("a.YML")), DesignFormat::Yaml);
        assert_eq!(DesignFormat::from_path(Path::new("a.json")), DesignFormat::Json);
        assert_eq!(DesignFormat::from_path(Path::new("design")), DesignFormat::Json);
    }

    #[test]
    fn export_name_uses_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(
            default_export_file_name(now),
            "system-design-1700000000123.json"
        );
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_design(Path::new("/nonexistent/af/design.json")).unwrap_err();
        assert!(matches!(err, AppError::FileRead { .. }));
    }

    #[test]
    fn catalog_yaml_duplicate_rejected() {
        let path = std::env::temp_dir().join("af_app_dup_catalog.yaml");
        std::fs::write(
            &path,
            "- {type_id: a, display_name: A, monthly_cost: 1}\n- {type_id: a, display_name: A2, monthly_cost: 2}\n",
        )
        .unwrap();
        let err = load_catalog(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, AppError::Catalog(msg) if msg.contains("Duplicate")));
    }
}
