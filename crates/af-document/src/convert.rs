//! Conversion between a live `DesignGraph` and its export document.

use af_analysis::validate_design;
use af_catalog::Catalog;
use af_graph::{DesignGraph, GraphBuilder, GraphError};
use tracing::info;

use crate::schema::{ComponentDef, ConnectionDef, DesignDocument};
use crate::validate::{MalformedDocument, validate_document};
use crate::DocumentResult;

/// Snapshot the graph, embedding a fresh validation report.
pub fn export_design(graph: &DesignGraph, catalog: &Catalog) -> DocumentResult<DesignDocument> {
    let components = graph
        .components()
        .iter()
        .map(|c| ComponentDef {
            id: c.id.to_string(),
            type_id: c.type_id.clone(),
            position: c.position,
            properties: c.properties.clone(),
        })
        .collect();

    let connections = graph
        .connections()
        .iter()
        .map(|e| ConnectionDef {
            id: e.id.to_string(),
            source: e.source.to_string(),
            target: e.target.to_string(),
        })
        .collect();

    let report = validate_design(graph, catalog);
    Ok(DesignDocument {
        components,
        connections,
        validation: Some(serde_json::to_value(&report)?),
    })
}

/// Rebuild a graph from a document, replaying components then connections in
/// order and keeping every id as written.
pub fn import_design(document: &DesignDocument, catalog: &Catalog) -> DocumentResult<DesignGraph> {
    validate_document(document, catalog)?;

    let mut builder = GraphBuilder::new(catalog);
    for c in &document.components {
        builder
            .add_component(c.id.as_str(), &c.type_id, c.position, c.properties.clone())
            .map_err(|e| replay_error(&c.id, e))?;
    }
    for e in &document.connections {
        builder
            .add_connection(e.id.as_str(), e.source.as_str(), e.target.as_str())
            .map_err(|err| replay_error(&e.id, err))?;
    }
    let graph = builder.build().map_err(|e| replay_error("graph", e))?;

    info!(
        components = graph.component_count(),
        connections = graph.connection_count(),
        "imported design"
    );
    Ok(graph)
}

fn replay_error(entry: &str, err: GraphError) -> MalformedDocument {
    MalformedDocument::InvalidValue {
        field: format!("entry '{}'", entry),
        value: entry.to_string(),
        reason: err.to_string(),
    }
}
