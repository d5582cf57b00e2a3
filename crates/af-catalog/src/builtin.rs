//! Stock component types shipped with the designer.

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;
use crate::property::{Properties, PropertyValue};
use crate::types;

fn entry(
    type_id: &str,
    display_name: &str,
    monthly_cost: f64,
    constraints: &[(&str, &str)],
    inputs: &[&str],
    outputs: &[&str],
    default_properties: Vec<(&str, PropertyValue)>,
) -> CatalogEntry {
    CatalogEntry {
        type_id: type_id.to_string(),
        display_name: display_name.to_string(),
        monthly_cost,
        constraints: constraints
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        outputs: outputs.iter().map(|s| s.to_string()).collect(),
        default_properties: default_properties
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<Properties>(),
    }
}

/// The six stock entries in palette order.
pub fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            types::LOAD_BALANCER,
            "Load Balancer",
            50.0,
            &[("max_throughput", "100K RPS"), ("latency", "< 5ms")],
            &["HTTP Requests"],
            &["Distributed Requests"],
            vec![
                ("algorithm", "Round Robin".into()),
                ("health_checks", true.into()),
                ("ssl_termination", true.into()),
            ],
        ),
        entry(
            types::WEB_SERVER,
            "Web Server",
            100.0,
            &[("concurrent_connections", "10K"), ("memory_usage", "2GB")],
            &["HTTP Requests"],
            &["API Calls", "Static Content"],
            vec![
                ("server_type", "NGINX".into()),
                ("caching", true.into()),
                ("compression", true.into()),
            ],
        ),
        entry(
            types::DATABASE,
            "Database",
            200.0,
            &[("storage_capacity", "1TB"), ("query_latency", "< 100ms")],
            &["Queries", "Writes"],
            &["Data", "Query Results"],
            vec![
                ("type", "PostgreSQL".into()),
                ("replication", "Master-Slave".into()),
                ("sharding", false.into()),
            ],
        ),
        entry(
            types::CACHE,
            "Cache",
            75.0,
            &[("memory_size", "16GB"), ("hit_ratio", "> 95%")],
            &["Cache Requests"],
            &["Cached Data"],
            vec![
                ("type", "Redis".into()),
                ("eviction_policy", "LRU".into()),
                ("persistence", true.into()),
            ],
        ),
        entry(
            types::MESSAGE_QUEUE,
            "Message Queue",
            30.0,
            &[("throughput", "1M msgs/sec"), ("retention", "14 days")],
            &["Messages"],
            &["Processed Messages"],
            vec![
                ("type", "SQS".into()),
                ("ordering", "FIFO".into()),
                ("durability", true.into()),
            ],
        ),
        entry(
            types::CDN,
            "CDN",
            40.0,
            &[("cache_hit_ratio", "> 90%"), ("global_latency", "< 50ms")],
            &["Static Requests"],
            &["Cached Content"],
            vec![
                ("provider", "CloudFront".into()),
                ("edge_locations", PropertyValue::Integer(200)),
                ("ssl", true.into()),
            ],
        ),
    ]
}

impl Catalog {
    /// Catalog holding the stock entries.
    pub fn builtin() -> Self {
        let entries = builtin_entries();
        let mut catalog = Catalog::default();
        for entry in entries {
            catalog.push_unchecked(entry);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_entries_pass_validation() {
        let catalog = Catalog::from_entries(builtin_entries()).unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn builtin_costs_and_constraints() {
        let catalog = Catalog::builtin();
        let costs: Vec<f64> = catalog.iter().map(|e| e.monthly_cost).collect();
        assert_eq!(costs, [50.0, 100.0, 200.0, 75.0, 30.0, 40.0]);

        let lb = catalog.lookup(types::LOAD_BALANCER).unwrap();
        assert_eq!(lb.latency_ms(), Some(5));
        assert_eq!(lb.max_throughput(), Some(100_000));

        // The queue declares `throughput`, not `max_throughput`.
        let mq = catalog.lookup(types::MESSAGE_QUEUE).unwrap();
        assert_eq!(mq.max_throughput(), None);
    }

    #[test]
    fn builtin_ports() {
        let catalog = Catalog::builtin();
        let db = catalog.lookup(types::DATABASE).unwrap();
        assert_eq!(db.input_ports(), 2);
        assert_eq!(db.output_ports(), 2);
        assert_eq!(
            db.default_properties.get("type"),
            Some(&PropertyValue::from("PostgreSQL"))
        );
    }
}
