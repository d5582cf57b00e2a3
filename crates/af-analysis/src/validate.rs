//! Design-rule validation.

use af_catalog::{Catalog, types};
use af_core::{ComponentId, clamp_score};
use af_graph::{ComponentInstance, DesignGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics::{DesignMetrics, compute_metrics_with, critical_components};

/// Component count above which a missing load balancer is suggested.
pub const LOAD_BALANCER_SUGGESTION_THRESHOLD: usize = 3;

const ISSUE_PENALTY: i64 = 25;
const WARNING_PENALTY: i64 = 10;
const SUGGESTION_PENALTY: i64 = 5;

/// The rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    IsolatedComponent,
    SinglePointOfFailure,
    MissingLoadBalancer,
    MissingCache,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub rule: Rule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<ComponentId>,
    pub message: String,
}

impl Finding {
    fn for_component(rule: Rule, component: &ComponentInstance, message: String) -> Self {
        Self {
            rule,
            component_id: Some(component.id.clone()),
            message,
        }
    }

    fn design_wide(rule: Rule, message: &str) -> Self {
        Self {
            rule,
            component_id: None,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff `issues` is empty.
    pub is_valid: bool,
    pub issues: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub suggestions: Vec<Finding>,
    pub metrics: DesignMetrics,
    /// 0..=100
    pub score: u32,
}

/// `100 - 25*issues - 10*warnings - 5*suggestions`, clamped to `0..=100`.
pub fn design_score(issues: usize, warnings: usize, suggestions: usize) -> u32 {
    let weighted = [
        (issues, ISSUE_PENALTY),
        (warnings, WARNING_PENALTY),
        (suggestions, SUGGESTION_PENALTY),
    ]
    .into_iter()
    .fold(0_i64, |acc, (count, penalty)| {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        acc.saturating_add(count.saturating_mul(penalty))
    });
    clamp_score(100_i64.saturating_sub(weighted))
}

fn display_name<'a>(catalog: &'a Catalog, component: &'a ComponentInstance) -> &'a str {
    catalog
        .lookup(&component.type_id)
        .map_or(component.type_id.as_str(), |e| e.display_name.as_str())
}

/// Run every design rule over the graph.
///
/// No current rule raises an issue, so `is_valid` is always true; findings are
/// reported as warnings and suggestions only.
pub fn validate_design(graph: &DesignGraph, catalog: &Catalog) -> ValidationReport {
    let issues: Vec<Finding> = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    for comp in graph.components() {
        let incoming = graph.incoming_edges(&comp.id).map_or(0, <[_]>::len);
        let outgoing = graph.outgoing_edges(&comp.id).map_or(0, <[_]>::len);
        if incoming == 0 && outgoing == 0 {
            warnings.push(Finding::for_component(
                Rule::IsolatedComponent,
                comp,
                format!(
                    "{} is not connected to any other components",
                    display_name(catalog, comp)
                ),
            ));
        }
    }

    let critical = critical_components(graph);
    for comp in &critical {
        warnings.push(Finding::for_component(
            Rule::SinglePointOfFailure,
            comp,
            format!(
                "{} is a potential single point of failure",
                display_name(catalog, comp)
            ),
        ));
    }

    if graph.component_count() > LOAD_BALANCER_SUGGESTION_THRESHOLD
        && !graph.has_type(types::LOAD_BALANCER)
    {
        suggestions.push(Finding::design_wide(
            Rule::MissingLoadBalancer,
            "Consider adding a load balancer for better traffic distribution",
        ));
    }

    if graph.has_type(types::DATABASE) && !graph.has_type(types::CACHE) {
        suggestions.push(Finding::design_wide(
            Rule::MissingCache,
            "Consider adding a caching layer to reduce database load",
        ));
    }

    let metrics = compute_metrics_with(graph, catalog, critical.len());
    let score = design_score(issues.len(), warnings.len(), suggestions.len());

    debug!(
        components = graph.component_count(),
        connections = graph.connection_count(),
        warnings = warnings.len(),
        suggestions = suggestions.len(),
        score,
        "validated design"
    );

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
        warnings,
        suggestions,
        metrics,
        score,
    }
}
