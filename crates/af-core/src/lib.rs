//! af-core: stable foundation for archflow.
//!
//! Contains:
//! - ids (string identifiers for component instances and connections, plus the generator)
//! - geometry (canvas positions and grid snapping)
//! - numeric (finite checks and score clamping)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use geometry::Position;
pub use ids::*;
pub use numeric::*;
