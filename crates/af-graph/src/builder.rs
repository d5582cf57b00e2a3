//! Replay builder for graphs whose ids are already known.

use af_catalog::{Catalog, Properties};
use af_core::{ComponentId, ConnectionId, Position};

use crate::error::GraphResult;
use crate::graph::DesignGraph;

/// Builder for reconstructing a graph from stored components and connections.
///
/// Use `add_component` and `add_connection` in document order, then call
/// `build()` to run the integrity check and take the finished `DesignGraph`.
/// Ids are kept as given; nothing is regenerated.
#[derive(Debug)]
pub struct GraphBuilder<'a> {
    catalog: &'a Catalog,
    graph: DesignGraph,
}

impl<'a> GraphBuilder<'a> {
    /// Create a new empty builder validating types against `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            graph: DesignGraph::new(),
        }
    }

    pub fn add_component(
        &mut self,
        id: impl Into<ComponentId>,
        type_id: &str,
        position: Position,
        properties: Properties,
    ) -> GraphResult<&mut Self> {
        self.graph
            .insert_component(self.catalog, id.into(), type_id, position, properties)?;
        Ok(self)
    }

    pub fn add_connection(
        &mut self,
        id: impl Into<ConnectionId>,
        source: impl Into<ComponentId>,
        target: impl Into<ComponentId>,
    ) -> GraphResult<&mut Self> {
        self.graph
            .insert_connection(id.into(), &source.into(), &target.into())?;
        Ok(self)
    }

    /// Finish, verifying the adjacency indices against the edge set.
    pub fn build(self) -> GraphResult<DesignGraph> {
        self.graph.check_integrity()?;
        Ok(self.graph)
    }
}
