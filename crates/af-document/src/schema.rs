//! Export document schema.
//!
//! Field names are a compatibility contract with previously exported files:
//! `id`, `type`, `position.x`, `position.y`, `properties`,
//! `connections[].source` and `connections[].target` must not change.

use af_catalog::Properties;
use af_core::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignDocument {
    #[serde(default)]
    pub components: Vec<ComponentDef>,
    #[serde(default)]
    pub connections: Vec<ConnectionDef>,
    /// Validation snapshot taken at export time. Informational only: it is
    /// ignored on import and kept untyped so older snapshots still load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub id: String,
    #[serde(rename = "type")]
    pub type_id: String,
    pub position: Position,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionDef {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl DesignDocument {
    /// The embedded validation snapshot, if present and in the current shape.
    pub fn validation_report(&self) -> Option<af_analysis::ValidationReport> {
        self.validation
            .as_ref()
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
