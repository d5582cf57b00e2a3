//! af-graph: the mutable design graph.
//!
//! Provides:
//! - Component instances and directed connections (`DesignGraph`)
//! - Incrementally maintained incoming/outgoing adjacency indices
//! - Replay builder for documents with fixed ids
//! - Integrity checking of the adjacency indices
//!
//! # Example
//!
//! ```
//! use af_catalog::Catalog;
//! use af_core::Position;
//! use af_graph::DesignGraph;
//!
//! let catalog = Catalog::builtin();
//! let mut graph = DesignGraph::new();
//! let lb = graph.add_component(&catalog, "load_balancer", Position::default()).unwrap();
//! let web = graph.add_component(&catalog, "web_server", Position::default()).unwrap();
//! let conn = graph.add_connection(&lb, &web).unwrap();
//!
//! assert_eq!(graph.outgoing_edges(&lb).unwrap(), [conn]);
//! assert!(graph.check_integrity().is_ok());
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod integrity;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{ComponentInstance, ConnectionEdge, DesignGraph};
