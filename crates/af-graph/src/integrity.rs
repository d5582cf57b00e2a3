//! Consistency checks between the connection set and the adjacency indices.

use std::collections::{HashMap, HashSet};

use af_core::{ComponentId, ConnectionId};

use crate::error::{GraphError, GraphResult};
use crate::graph::DesignGraph;

fn violation(what: impl Into<String>) -> GraphError {
    GraphError::Invariant { what: what.into() }
}

impl DesignGraph {
    /// Recompute adjacency from the connection list and compare it with the
    /// maintained indices, reporting the first discrepancy.
    pub fn check_integrity(&self) -> GraphResult<()> {
        // Id maps must point at the right slots
        if self.component_index.len() != self.components.len() {
            return Err(violation("component index size differs from storage"));
        }
        for (pos, comp) in self.components.iter().enumerate() {
            if self.component_index.get(&comp.id) != Some(&pos) {
                return Err(violation(format!("component {} is mis-indexed", comp.id)));
            }
        }
        if self.connection_index.len() != self.connections.len() {
            return Err(violation("connection index size differs from storage"));
        }
        for (pos, edge) in self.connections.iter().enumerate() {
            if self.connection_index.get(&edge.id) != Some(&pos) {
                return Err(violation(format!("connection {} is mis-indexed", edge.id)));
            }
        }

        // Edges: endpoints exist, no self-loops, no parallel duplicates
        let mut pairs: HashSet<(&ComponentId, &ComponentId)> = HashSet::new();
        let mut expected_in: HashMap<&ComponentId, Vec<&ConnectionId>> = HashMap::new();
        let mut expected_out: HashMap<&ComponentId, Vec<&ConnectionId>> = HashMap::new();
        for edge in &self.connections {
            for endpoint in [&edge.source, &edge.target] {
                if !self.component_index.contains_key(endpoint) {
                    return Err(violation(format!(
                        "connection {} references missing component {}",
                        edge.id, endpoint
                    )));
                }
            }
            if edge.source == edge.target {
                return Err(violation(format!("connection {} is a self-loop", edge.id)));
            }
            if !pairs.insert((&edge.source, &edge.target)) {
                return Err(violation(format!(
                    "connection {} duplicates {} -> {}",
                    edge.id, edge.source, edge.target
                )));
            }
            expected_out.entry(&edge.source).or_default().push(&edge.id);
            expected_in.entry(&edge.target).or_default().push(&edge.id);
        }

        // Adjacency lists: exactly one entry per component, mirroring the edges
        if self.incoming.len() != self.components.len()
            || self.outgoing.len() != self.components.len()
        {
            return Err(violation("adjacency index has stale or missing components"));
        }
        for comp in &self.components {
            check_list(&comp.id, "incoming", self.incoming.get(&comp.id), expected_in.get(&comp.id))?;
            check_list(&comp.id, "outgoing", self.outgoing.get(&comp.id), expected_out.get(&comp.id))?;
        }

        Ok(())
    }
}

fn check_list(
    comp: &ComponentId,
    direction: &str,
    actual: Option<&Vec<ConnectionId>>,
    expected: Option<&Vec<&ConnectionId>>,
) -> GraphResult<()> {
    let Some(actual) = actual else {
        return Err(violation(format!("{comp} has no {direction} list")));
    };
    let mut actual: Vec<&ConnectionId> = actual.iter().collect();
    let mut expected: Vec<&ConnectionId> = expected.cloned().unwrap_or_default();
    actual.sort();
    expected.sort();
    if actual != expected {
        return Err(violation(format!(
            "{direction} list of {comp} does not match the connection set"
        )));
    }
    Ok(())
}
