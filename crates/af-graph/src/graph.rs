//! Core graph data structures.

use std::collections::HashMap;

use af_catalog::{Catalog, Properties, PropertyValue, first_non_finite};
use af_core::{ComponentId, ConnectionId, IdGenerator, Position};
use tracing::debug;

use crate::error::{GraphError, GraphResult};

const CONNECTION_PREFIX: &str = "conn";

/// A placed occurrence of a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInstance {
    pub id: ComponentId,
    pub type_id: String,
    pub position: Position,
    /// Starts as the entry's default properties; individual keys may be overridden.
    pub properties: Properties,
}

/// A directed link from `source`'s output to `target`'s input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionEdge {
    pub id: ConnectionId,
    pub source: ComponentId,
    pub target: ComponentId,
}

/// The design graph: component instances, connections, and adjacency indices.
///
/// Components and connections are stored in insertion order and addressed by id.
/// `incoming`/`outgoing` hold one entry per live component and always mirror the
/// connection set exactly. Callers only ever hold ids, never references into
/// the storage.
#[derive(Debug, Clone, Default)]
pub struct DesignGraph {
    pub(crate) components: Vec<ComponentInstance>,
    pub(crate) component_index: HashMap<ComponentId, usize>,
    pub(crate) connections: Vec<ConnectionEdge>,
    pub(crate) connection_index: HashMap<ConnectionId, usize>,
    pub(crate) incoming: HashMap<ComponentId, Vec<ConnectionId>>,
    pub(crate) outgoing: HashMap<ComponentId, Vec<ConnectionId>>,
    component_ids: IdGenerator,
    connection_ids: IdGenerator,
}

impl DesignGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new component of `type_id` and return its generated id.
    pub fn add_component(
        &mut self,
        catalog: &Catalog,
        type_id: &str,
        position: Position,
    ) -> GraphResult<ComponentId> {
        let entry = catalog.lookup(type_id)?;
        let position = position.checked()?;

        let index = &self.component_index;
        let id = ComponentId::new(
            self.component_ids
                .next_free(type_id, |candidate| index.contains_key(candidate)),
        );

        self.push_component(ComponentInstance {
            id: id.clone(),
            type_id: entry.type_id.clone(),
            position,
            properties: entry.default_properties.clone(),
        });
        debug!(component = %id, type_id, "added component");
        Ok(id)
    }

    /// Place a component under a caller-chosen id (document replay).
    pub fn insert_component(
        &mut self,
        catalog: &Catalog,
        id: ComponentId,
        type_id: &str,
        position: Position,
        properties: Properties,
    ) -> GraphResult<()> {
        catalog.lookup(type_id)?;
        let position = position.checked()?;
        if self.component_index.contains_key(&id) {
            return Err(GraphError::DuplicateId {
                what: "component",
                id: id.to_string(),
            });
        }
        if let Some(key) = first_non_finite(&properties) {
            return Err(GraphError::InvalidProperty {
                component: id,
                key: key.to_string(),
            });
        }

        debug!(component = %id, type_id, "inserted component");
        self.push_component(ComponentInstance {
            id,
            type_id: type_id.to_string(),
            position,
            properties,
        });
        Ok(())
    }

    /// Remove a component together with every connection that references it.
    pub fn remove_component(&mut self, id: &ComponentId) -> GraphResult<ComponentInstance> {
        let idx = *self
            .component_index
            .get(id)
            .ok_or_else(|| GraphError::component_not_found(id))?;

        let mut attached: Vec<ConnectionId> = Vec::new();
        if let Some(ids) = self.incoming.get(id) {
            attached.extend(ids.iter().cloned());
        }
        if let Some(ids) = self.outgoing.get(id) {
            attached.extend(ids.iter().cloned());
        }
        for conn in &attached {
            self.detach_connection(conn);
        }

        let removed = self.components.remove(idx);
        self.component_index.remove(id);
        for (pos, comp) in self.components.iter().enumerate().skip(idx) {
            self.component_index.insert(comp.id.clone(), pos);
        }
        self.incoming.remove(id);
        self.outgoing.remove(id);

        debug!(
            component = %id,
            cascaded = attached.len(),
            "removed component"
        );
        Ok(removed)
    }

    /// Connect `source` to `target` and return the new connection id.
    pub fn add_connection(
        &mut self,
        source: &ComponentId,
        target: &ComponentId,
    ) -> GraphResult<ConnectionId> {
        self.check_new_connection(source, target)?;

        let index = &self.connection_index;
        let id = ConnectionId::new(
            self.connection_ids
                .next_free(CONNECTION_PREFIX, |candidate| index.contains_key(candidate)),
        );
        self.push_connection(ConnectionEdge {
            id: id.clone(),
            source: source.clone(),
            target: target.clone(),
        });
        debug!(connection = %id, %source, %target, "added connection");
        Ok(id)
    }

    /// Connect two components under a caller-chosen id (document replay).
    pub fn insert_connection(
        &mut self,
        id: ConnectionId,
        source: &ComponentId,
        target: &ComponentId,
    ) -> GraphResult<()> {
        if self.connection_index.contains_key(&id) {
            return Err(GraphError::DuplicateId {
                what: "connection",
                id: id.to_string(),
            });
        }
        self.check_new_connection(source, target)?;

        debug!(connection = %id, %source, %target, "inserted connection");
        self.push_connection(ConnectionEdge {
            id,
            source: source.clone(),
            target: target.clone(),
        });
        Ok(())
    }

    pub fn remove_connection(&mut self, id: &ConnectionId) -> GraphResult<ConnectionEdge> {
        let removed = self
            .detach_connection(id)
            .ok_or_else(|| GraphError::connection_not_found(id))?;
        debug!(connection = %id, "removed connection");
        Ok(removed)
    }

    pub fn move_component(&mut self, id: &ComponentId, position: Position) -> GraphResult<()> {
        let position = position.checked()?;
        let comp = self.component_mut(id)?;
        comp.position = position;
        debug!(component = %id, x = position.x, y = position.y, "moved component");
        Ok(())
    }

    /// Override one property, returning the previous value if any.
    pub fn set_property(
        &mut self,
        id: &ComponentId,
        key: impl Into<String>,
        value: PropertyValue,
    ) -> GraphResult<Option<PropertyValue>> {
        let key = key.into();
        if !self.component_index.contains_key(id) {
            return Err(GraphError::component_not_found(id));
        }
        if !value.is_finite() {
            return Err(GraphError::InvalidProperty {
                component: id.clone(),
                key,
            });
        }
        let comp = self.component_mut(id)?;
        let previous = comp.properties.insert(key.clone(), value);
        debug!(component = %id, key = %key, "set property");
        Ok(previous)
    }

    /// Remove every component and connection. Id counters keep running.
    pub fn clear(&mut self) {
        self.components.clear();
        self.component_index.clear();
        self.connections.clear();
        self.connection_index.clear();
        self.incoming.clear();
        self.outgoing.clear();
        debug!("cleared design graph");
    }

    /// Connection ids ending at `id`.
    pub fn incoming_edges(&self, id: &ComponentId) -> GraphResult<&[ConnectionId]> {
        self.incoming
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::component_not_found(id))
    }

    /// Connection ids starting at `id`.
    pub fn outgoing_edges(&self, id: &ComponentId) -> GraphResult<&[ConnectionId]> {
        self.outgoing
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::component_not_found(id))
    }

    pub fn component(&self, id: &ComponentId) -> Option<&ComponentInstance> {
        self.component_index.get(id).map(|&idx| &self.components[idx])
    }

    pub fn connection(&self, id: &ConnectionId) -> Option<&ConnectionEdge> {
        self.connection_index
            .get(id)
            .map(|&idx| &self.connections[idx])
    }

    /// All components in insertion order.
    pub fn components(&self) -> &[ComponentInstance] {
        &self.components
    }

    /// All connections in insertion order.
    pub fn connections(&self) -> &[ConnectionEdge] {
        &self.connections
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn contains_component(&self, id: &ComponentId) -> bool {
        self.component_index.contains_key(id)
    }

    pub fn count_of_type(&self, type_id: &str) -> usize {
        self.components
            .iter()
            .filter(|c| c.type_id == type_id)
            .count()
    }

    pub fn has_type(&self, type_id: &str) -> bool {
        self.components.iter().any(|c| c.type_id == type_id)
    }

    fn component_mut(&mut self, id: &ComponentId) -> GraphResult<&mut ComponentInstance> {
        let idx = *self
            .component_index
            .get(id)
            .ok_or_else(|| GraphError::component_not_found(id))?;
        Ok(&mut self.components[idx])
    }

    fn push_component(&mut self, comp: ComponentInstance) {
        self.component_index
            .insert(comp.id.clone(), self.components.len());
        self.incoming.insert(comp.id.clone(), Vec::new());
        self.outgoing.insert(comp.id.clone(), Vec::new());
        self.components.push(comp);
    }

    fn push_connection(&mut self, edge: ConnectionEdge) {
        self.connection_index
            .insert(edge.id.clone(), self.connections.len());
        if let Some(list) = self.outgoing.get_mut(&edge.source) {
            list.push(edge.id.clone());
        }
        if let Some(list) = self.incoming.get_mut(&edge.target) {
            list.push(edge.id.clone());
        }
        self.connections.push(edge);
    }

    /// All the checks `add_connection` and `insert_connection` share, run before any mutation.
    fn check_new_connection(&self, source: &ComponentId, target: &ComponentId) -> GraphResult<()> {
        if !self.component_index.contains_key(source) {
            return Err(GraphError::component_not_found(source));
        }
        if !self.component_index.contains_key(target) {
            return Err(GraphError::component_not_found(target));
        }
        if source == target {
            return Err(GraphError::SelfLoop {
                component: source.clone(),
            });
        }

        let existing = self
            .outgoing
            .get(source)
            .into_iter()
            .flatten()
            .find(|conn| {
                self.connection(conn)
                    .is_some_and(|edge| edge.target == *target)
            });
        if let Some(existing) = existing {
            return Err(GraphError::DuplicateEdge {
                source: source.clone(),
                target: target.clone(),
                existing: existing.clone(),
            });
        }
        Ok(())
    }

    /// Remove a connection from storage and both adjacency lists.
    fn detach_connection(&mut self, id: &ConnectionId) -> Option<ConnectionEdge> {
        let idx = self.connection_index.remove(id)?;
        let edge = self.connections.remove(idx);
        for (pos, conn) in self.connections.iter().enumerate().skip(idx) {
            self.connection_index.insert(conn.id.clone(), pos);
        }
        if let Some(list) = self.outgoing.get_mut(&edge.source) {
            list.retain(|c| c != id);
        }
        if let Some(list) = self.incoming.get_mut(&edge.target) {
            list.retain(|c| c != id);
        }
        Some(edge)
    }
}
