//! af-analysis: derived metrics and design-rule validation.
//!
//! Both entry points are pure functions of a [`DesignGraph`](af_graph::DesignGraph)
//! and a [`Catalog`](af_catalog::Catalog): calling them twice without mutating
//! the graph in between yields equal results.

pub mod metrics;
pub mod validate;

pub use metrics::{
    CostStatus, DesignMetrics, ScalabilityStatus, ThroughputBottleneck, compute_metrics,
    critical_components,
};
pub use validate::{Finding, Rule, ValidationReport, design_score, validate_design};
