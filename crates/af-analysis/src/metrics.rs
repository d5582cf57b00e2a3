//! Derived cost and performance metrics for a design.
//!
//! The numbers are heuristics meant for quick feedback while sketching,
//! not estimates of a real deployment.

use std::fmt;

use af_catalog::{Catalog, CatalogEntry, types};
use af_core::clamp_score;
use af_graph::{ComponentInstance, DesignGraph};
use serde::{Deserialize, Serialize};

/// A component is critical when both its in-degree and out-degree exceed this.
pub const CRITICAL_DEGREE: usize = 2;

/// Monthly cost above which the design is flagged as expensive.
pub const HIGH_COST_THRESHOLD: f64 = 500.0;

/// Lowest declared `max_throughput` among the design's components.
///
/// Serialized as `null` when no component declares a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum ThroughputBottleneck {
    /// No component declares `max_throughput`.
    NotApplicable,
    /// Requests per second of the slowest declared component.
    Rps(u64),
}

impl From<Option<u64>> for ThroughputBottleneck {
    fn from(value: Option<u64>) -> Self {
        value.map_or(ThroughputBottleneck::NotApplicable, ThroughputBottleneck::Rps)
    }
}

impl From<ThroughputBottleneck> for Option<u64> {
    fn from(value: ThroughputBottleneck) -> Self {
        match value {
            ThroughputBottleneck::NotApplicable => None,
            ThroughputBottleneck::Rps(rps) => Some(rps),
        }
    }
}

impl fmt::Display for ThroughputBottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThroughputBottleneck::NotApplicable => f.write_str("N/A"),
            ThroughputBottleneck::Rps(rps) => write!(f, "{rps} RPS"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostStatus {
    Reasonable,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalabilityStatus {
    Poor,
    Fair,
    Good,
}

/// Metrics shown next to the design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignMetrics {
    /// Sum of catalog monthly costs (USD).
    pub monthly_cost: f64,
    /// Sum of declared `latency` constraints along no particular path.
    pub estimated_latency_ms: u64,
    pub throughput_bottleneck: ThroughputBottleneck,
    /// 0..=100
    pub scalability_score: u32,
    /// 0..=100
    pub reliability_score: u32,
}

impl DesignMetrics {
    pub fn cost_status(&self) -> CostStatus {
        if self.monthly_cost > HIGH_COST_THRESHOLD {
            CostStatus::High
        } else {
            CostStatus::Reasonable
        }
    }

    pub fn scalability_status(&self) -> ScalabilityStatus {
        match self.scalability_score {
            s if s < 60 => ScalabilityStatus::Poor,
            s if s < 80 => ScalabilityStatus::Fair,
            _ => ScalabilityStatus::Good,
        }
    }
}

/// Components with more than [`CRITICAL_DEGREE`] incoming and outgoing connections,
/// in insertion order.
pub fn critical_components(graph: &DesignGraph) -> Vec<&ComponentInstance> {
    graph
        .components()
        .iter()
        .filter(|c| {
            let incoming = graph.incoming_edges(&c.id).map_or(0, <[_]>::len);
            let outgoing = graph.outgoing_edges(&c.id).map_or(0, <[_]>::len);
            incoming > CRITICAL_DEGREE && outgoing > CRITICAL_DEGREE
        })
        .collect()
}

pub fn compute_metrics(graph: &DesignGraph, catalog: &Catalog) -> DesignMetrics {
    compute_metrics_with(graph, catalog, critical_components(graph).len())
}

/// Metrics given an already-computed critical component count.
pub(crate) fn compute_metrics_with(
    graph: &DesignGraph,
    catalog: &Catalog,
    critical_count: usize,
) -> DesignMetrics {
    // Components whose type is missing from `catalog` contribute nothing.
    let entries: Vec<&CatalogEntry> = graph
        .components()
        .iter()
        .filter_map(|c| catalog.lookup(&c.type_id).ok())
        .collect();

    let monthly_cost = entries.iter().map(|e| e.monthly_cost).sum();
    let estimated_latency_ms = entries
        .iter()
        .filter_map(|e| e.latency_ms())
        .fold(0_u64, u64::saturating_add);
    let throughput_bottleneck = entries
        .iter()
        .filter_map(|e| e.max_throughput())
        .min()
        .into();

    DesignMetrics {
        monthly_cost,
        estimated_latency_ms,
        throughput_bottleneck,
        scalability_score: scalability_score(graph, critical_count),
        reliability_score: reliability_score(graph),
    }
}

fn scalability_score(graph: &DesignGraph, critical_count: usize) -> u32 {
    let critical = i64::try_from(critical_count).unwrap_or(i64::MAX);
    let mut score = 100_i64.saturating_sub(critical.saturating_mul(20));
    if graph.has_type(types::LOAD_BALANCER) {
        score += 10;
    }
    if graph.has_type(types::CACHE) {
        score += 10;
    }
    if graph.has_type(types::MESSAGE_QUEUE) {
        score += 5;
    }
    clamp_score(score)
}

fn reliability_score(graph: &DesignGraph) -> u32 {
    let mut score = 100_i64;
    // Only a lone instance is penalised; none at all is not.
    if graph.count_of_type(types::DATABASE) == 1 {
        score -= 25;
    }
    if graph.count_of_type(types::WEB_SERVER) == 1 {
        score -= 15;
    }
    clamp_score(score)
}
