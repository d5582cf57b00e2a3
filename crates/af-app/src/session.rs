//! A live editing session: one design graph, its catalog, and session options.

use std::sync::Arc;

use af_analysis::{DesignMetrics, ValidationReport, compute_metrics, validate_design};
use af_catalog::{Catalog, PropertyValue};
use af_core::{ComponentId, ConnectionId, Position, Real};
use af_document::{DesignDocument, export_design, import_design};
use af_graph::DesignGraph;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::options::SessionOptions;

/// Id created by a mutation, if it created anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    Nothing,
    Component(ComponentId),
    Connection(ConnectionId),
}

/// Result of a successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub created: Created,
    /// Present iff real-time validation is enabled.
    pub report: Option<ValidationReport>,
}

/// Counts and metrics for a metrics panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSummary {
    pub component_count: usize,
    pub connection_count: usize,
    pub metrics: DesignMetrics,
}

/// Owns a single design graph. All mutation goes through `&mut self`, so a
/// session has exactly one writer at a time.
#[derive(Debug, Clone)]
pub struct DesignSession {
    catalog: Arc<Catalog>,
    graph: DesignGraph,
    options: SessionOptions,
}

impl DesignSession {
    pub fn new(catalog: Arc<Catalog>, options: SessionOptions) -> AppResult<Self> {
        options.check()?;
        Ok(Self {
            catalog,
            graph: DesignGraph::new(),
            options,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &DesignGraph {
        &self.graph
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn add_component(&mut self, type_id: &str, x: Real, y: Real) -> AppResult<MutationOutcome> {
        let position = self.place(x, y)?;
        let id = self.graph.add_component(&self.catalog, type_id, position)?;
        Ok(self.outcome(Created::Component(id)))
    }

    pub fn move_component(&mut self, id: &ComponentId, x: Real, y: Real) -> AppResult<MutationOutcome> {
        let position = self.place(x, y)?;
        self.graph.move_component(id, position)?;
        Ok(self.outcome(Created::Nothing))
    }

    pub fn remove_component(&mut self, id: &ComponentId) -> AppResult<MutationOutcome> {
        self.graph.remove_component(id)?;
        Ok(self.outcome(Created::Nothing))
    }

    pub fn add_connection(
        &mut self,
        source: &ComponentId,
        target: &ComponentId,
    ) -> AppResult<MutationOutcome> {
        let id = self.graph.add_connection(source, target)?;
        Ok(self.outcome(Created::Connection(id)))
    }

    pub fn remove_connection(&mut self, id: &ConnectionId) -> AppResult<MutationOutcome> {
        self.graph.remove_connection(id)?;
        Ok(self.outcome(Created::Nothing))
    }

    pub fn set_property(
        &mut self,
        id: &ComponentId,
        key: &str,
        value: PropertyValue,
    ) -> AppResult<MutationOutcome> {
        self.graph.set_property(id, key, value)?;
        Ok(self.outcome(Created::Nothing))
    }

    pub fn clear(&mut self) -> MutationOutcome {
        self.graph.clear();
        self.outcome(Created::Nothing)
    }

    /// A fresh report regardless of the real-time setting.
    pub fn validate(&self) -> ValidationReport {
        validate_design(&self.graph, &self.catalog)
    }

    pub fn summary(&self) -> DesignSummary {
        DesignSummary {
            component_count: self.graph.component_count(),
            connection_count: self.graph.connection_count(),
            metrics: compute_metrics(&self.graph, &self.catalog),
        }
    }

    pub fn export(&self) -> AppResult<DesignDocument> {
        Ok(export_design(&self.graph, &self.catalog)?)
    }

    /// Replace the current design with `document`. On failure the current
    /// design is kept.
    pub fn import(&mut self, document: &DesignDocument) -> AppResult<MutationOutcome> {
        let graph = import_design(document, &self.catalog).inspect_err(|e| {
            warn!(error = %e, "rejected design import");
        })?;
        info!(
            components = graph.component_count(),
            connections = graph.connection_count(),
            "replaced session design"
        );
        self.graph = graph;
        Ok(self.outcome(Created::Nothing))
    }

    fn place(&self, x: Real, y: Real) -> AppResult<Position> {
        let position = Position::new(x, y).map_err(af_graph::GraphError::from)?;
        Ok(if self.options.snap_to_grid {
            position.snapped(self.options.grid_size)
        } else {
            position
        })
    }

    fn outcome(&self, created: Created) -> MutationOutcome {
        MutationOutcome {
            created,
            report: self.options.real_time_validation.then(|| self.validate()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use af_graph::GraphError;

    fn session(options: SessionOptions) -> DesignSession {
        DesignSession::new(Arc::new(Catalog::builtin()), options).unwrap()
    }

    fn component_id(outcome: &MutationOutcome) -> ComponentId {
        match &outcome.created {
            Created::Component(id) => id.clone(),
            other => panic!("expected a component, got {other:?}"),
        }
    }

    #[test]
    fn add_snaps_to_grid() {
        let mut s = session(SessionOptions::default());
        let out = s.add_component("cache", 31.0, 49.0).unwrap();
        let id = component_id(&out);
        let placed = s.graph().component(&id).unwrap().position;
        assert_eq!(placed, Position::new(40.0, 40.0).unwrap());
    }

    #[test]
    fn snapping_can_be_disabled() {
        let mut s = session(SessionOptions {
            snap_to_grid: false,
            ..SessionOptions::default()
        });
        let out = s.add_component("cache", 31.0, 49.0).unwrap();
        let id = component_id(&out);
        assert_eq!(
            s.graph().component(&id).unwrap().position,
            Position::new(31.0, 49.0).unwrap()
        );
    }

    #[test]
    fn real_time_validation_toggles_report() {
        let mut live = session(SessionOptions::default());
        let out = live.add_component("database", 0.0, 0.0).unwrap();
        let report = out.report.unwrap();
        assert_eq!(report.suggestions.len(), 1);

        let mut quiet = session(SessionOptions {
            real_time_validation: false,
            ..SessionOptions::default()
        });
        let out = quiet.add_component("database", 0.0, 0.0).unwrap();
        assert!(out.report.is_none());
        assert_eq!(quiet.validate().suggestions.len(), 1);
    }

    #[test]
    fn failed_mutation_surfaces_graph_error() {
        let mut s = session(SessionOptions::default());
        let err = s.add_component("mainframe", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, AppError::Graph(GraphError::UnknownType { .. })));
        assert!(s.graph().is_empty());
    }

    #[test]
    fn failed_import_keeps_current_design() {
        let mut s = session(SessionOptions::default());
        s.add_component("cdn", 0.0, 0.0).unwrap();

        let mut doc = s.export().unwrap();
        doc.components[0].type_id = "mainframe".into();
        assert!(matches!(s.import(&doc), Err(AppError::Document(_))));
        assert_eq!(s.graph().component_count(), 1);
    }

    #[test]
    fn summary_counts() {
        let mut s = session(SessionOptions::default());
        let a = component_id(&s.add_component("web_server", 0.0, 0.0).unwrap());
        let b = component_id(&s.add_component("database", 100.0, 0.0).unwrap());
        s.add_connection(&a, &b).unwrap();

        let summary = s.summary();
        assert_eq!(summary.component_count, 2);
        assert_eq!(summary.connection_count, 1);
        assert_eq!(summary.metrics.monthly_cost, 300.0);

        s.clear();
        assert_eq!(s.summary().component_count, 0);
    }
}
