//! Catalog entry: the immutable template for one component type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constraints::{parse_leading_integer, parse_throughput};
use crate::error::{CatalogError, CatalogResult};
use crate::property::{Properties, first_non_finite};

/// Constraint key holding the per-component latency, e.g. `"< 5ms"`.
pub const LATENCY: &str = "latency";
/// Constraint key holding the maximum throughput, e.g. `"100K RPS"`.
pub const MAX_THROUGHPUT: &str = "max_throughput";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub type_id: String,
    pub display_name: String,
    /// USD per month.
    pub monthly_cost: f64,
    #[serde(default)]
    pub constraints: BTreeMap<String, String>,
    /// Named input ports.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Named output ports.
    #[serde(default)]
    pub outputs: Vec<String>,
    /// Properties copied onto every new instance of this type.
    #[serde(default)]
    pub default_properties: Properties,
}

impl CatalogEntry {
    pub fn input_ports(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_ports(&self) -> usize {
        self.outputs.len()
    }

    pub fn constraint(&self, key: &str) -> Option<&str> {
        self.constraints.get(key).map(String::as_str)
    }

    /// Latency contribution in milliseconds, if the entry declares one.
    pub fn latency_ms(&self) -> Option<u64> {
        self.constraint(LATENCY).and_then(parse_leading_integer)
    }

    /// Declared maximum throughput in requests per second.
    pub fn max_throughput(&self) -> Option<u64> {
        self.constraint(MAX_THROUGHPUT).and_then(parse_throughput)
    }

    /// Case-insensitive substring match on id or display name.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.type_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
    }

    pub(crate) fn check(&self) -> CatalogResult<()> {
        if self.type_id.trim().is_empty() {
            return Err(CatalogError::InvalidEntry {
                type_id: self.type_id.clone(),
                reason: "type_id must not be empty".to_string(),
            });
        }
        if !self.monthly_cost.is_finite() || self.monthly_cost < 0.0 {
            return Err(CatalogError::InvalidEntry {
                type_id: self.type_id.clone(),
                reason: format!(
                    "monthly_cost must be finite and non-negative (got {})",
                    self.monthly_cost
                ),
            });
        }
        if let Some(key) = first_non_finite(&self.default_properties) {
            return Err(CatalogError::InvalidEntry {
                type_id: self.type_id.clone(),
                reason: format!("default property '{key}' must be finite"),
            });
        }
        Ok(())
    }
}
