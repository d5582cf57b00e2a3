//! Structural checks run on a document before it is replayed into a graph.

use std::collections::HashSet;

use af_catalog::{Catalog, first_non_finite};
use af_core::Position;

use crate::schema::DesignDocument;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MalformedDocument {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Unknown component type '{type_id}' for component {id}")]
    UnknownType { id: String, type_id: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn invalid_connection(id: &str, reason: &str) -> MalformedDocument {
    MalformedDocument::InvalidValue {
        field: format!("connection '{}'", id),
        value: id.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_document(
    document: &DesignDocument,
    catalog: &Catalog,
) -> Result<(), MalformedDocument> {
    let mut component_ids = HashSet::new();
    for component in &document.components {
        if !component_ids.insert(component.id.as_str()) {
            return Err(MalformedDocument::DuplicateId {
                id: component.id.clone(),
                context: "components".to_string(),
            });
        }
        if !catalog.contains(&component.type_id) {
            return Err(MalformedDocument::UnknownType {
                id: component.id.clone(),
                type_id: component.type_id.clone(),
            });
        }
        let Position { x, y } = component.position;
        if !x.is_finite() || !y.is_finite() {
            return Err(MalformedDocument::InvalidValue {
                field: format!("component '{}' position", component.id),
                value: format!("({}, {})", x, y),
                reason: "must be finite".to_string(),
            });
        }
        if let Some(key) = first_non_finite(&component.properties) {
            return Err(MalformedDocument::InvalidValue {
                field: format!("component '{}' property '{}'", component.id, key),
                value: component.properties[key].to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    let mut connection_ids = HashSet::new();
    let mut pairs = HashSet::new();
    for connection in &document.connections {
        if !connection_ids.insert(connection.id.as_str()) {
            return Err(MalformedDocument::DuplicateId {
                id: connection.id.clone(),
                context: "connections".to_string(),
            });
        }
        for (endpoint, field) in [(&connection.source, "source"), (&connection.target, "target")] {
            if !component_ids.contains(endpoint.as_str()) {
                return Err(MalformedDocument::MissingReference {
                    id: endpoint.clone(),
                    context: format!("connection '{}' {}", connection.id, field),
                });
            }
        }
        if connection.source == connection.target {
            return Err(invalid_connection(
                &connection.id,
                "source and target must differ",
            ));
        }
        if !pairs.insert((connection.source.as_str(), connection.target.as_str())) {
            return Err(invalid_connection(
                &connection.id,
                "duplicates an earlier connection between the same components",
            ));
        }
    }

    Ok(())
}
