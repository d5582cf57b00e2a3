//! Graph-specific error types.

use af_catalog::CatalogError;
use af_core::{ComponentId, ConnectionId, CoreError};

pub type GraphResult<T> = Result<T, GraphError>;

/// Design graph mutation and lookup errors.
///
/// Every failing operation leaves the graph exactly as it was before the call.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The component type is not in the catalog.
    UnknownType { type_id: String },

    /// A component or connection id does not exist in this graph.
    NotFound { what: &'static str, id: String },

    /// A connection would start and end at the same component.
    SelfLoop { component: ComponentId },

    /// A connection with the same source and target already exists.
    DuplicateEdge {
        source: ComponentId,
        target: ComponentId,
        existing: ConnectionId,
    },

    /// A caller-supplied id is already in use.
    DuplicateId { what: &'static str, id: String },

    /// A position coordinate is not finite.
    InvalidPosition(CoreError),

    /// A numeric property value is not finite.
    InvalidProperty { component: ComponentId, key: String },

    /// Internal bookkeeping disagrees with the edge set.
    Invariant { what: String },
}

impl GraphError {
    pub(crate) fn component_not_found(id: &ComponentId) -> Self {
        GraphError::NotFound {
            what: "component",
            id: id.to_string(),
        }
    }

    pub(crate) fn connection_not_found(id: &ConnectionId) -> Self {
        GraphError::NotFound {
            what: "connection",
            id: id.to_string(),
        }
    }
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownType { type_id } => {
                write!(f, "Unknown component type: {}", type_id)
            }
            GraphError::NotFound { what, id } => {
                write!(f, "No {} with id '{}'", what, id)
            }
            GraphError::SelfLoop { component } => {
                write!(f, "Component {} cannot be connected to itself", component)
            }
            GraphError::DuplicateEdge {
                source,
                target,
                existing,
            } => {
                write!(
                    f,
                    "Connection {} -> {} already exists as {}",
                    source, target, existing
                )
            }
            GraphError::DuplicateId { what, id } => {
                write!(f, "Duplicate {} id '{}'", what, id)
            }
            GraphError::InvalidPosition(err) => {
                write!(f, "Invalid position: {}", err)
            }
            GraphError::InvalidProperty { component, key } => {
                write!(f, "Property '{}' of {} must be finite", key, component)
            }
            GraphError::Invariant { what } => {
                write!(f, "Graph invariant violated: {}", what)
            }
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoreError> for GraphError {
    fn from(err: CoreError) -> Self {
        GraphError::InvalidPosition(err)
    }
}

impl From<CatalogError> for GraphError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownType { type_id } => GraphError::UnknownType { type_id },
            other => GraphError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
