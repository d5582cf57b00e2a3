//! Typed property values carried by catalog defaults and component instances.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Property map, ordered by key so exports are stable.
pub type Properties = BTreeMap<String, PropertyValue>;

/// A single configurable property value.
///
/// Serialized untagged, so documents hold plain JSON/YAML scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl PropertyValue {
    /// False only for a non-finite `Number`, which JSON cannot carry.
    pub fn is_finite(&self) -> bool {
        match self {
            PropertyValue::Number(v) => v.is_finite(),
            _ => true,
        }
    }
}

/// Key of the first property holding a non-finite number, if any.
pub fn first_non_finite(properties: &Properties) -> Option<&str> {
    properties
        .iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(k, _)| k.as_str())
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(v) => write!(f, "{v}"),
            PropertyValue::Integer(v) => write!(f, "{v}"),
            PropertyValue::Number(v) => write!(f, "{v}"),
            PropertyValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Integer(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Number(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_yaml_scalars() {
        let props: Properties = serde_yaml::from_str(
            "algorithm: Round Robin\nhealth_checks: true\nedge_locations: 200\nratio: 0.5\n",
        )
        .unwrap();
        assert_eq!(props["algorithm"], PropertyValue::from("Round Robin"));
        assert_eq!(props["health_checks"], PropertyValue::Bool(true));
        assert_eq!(props["edge_locations"], PropertyValue::Integer(200));
        assert_eq!(props["ratio"], PropertyValue::Number(0.5));
    }

    #[test]
    fn non_finite_numbers_are_flagged() {
        assert!(PropertyValue::Number(0.5).is_finite());
        assert!(PropertyValue::from("NaN").is_finite());
        assert!(!PropertyValue::Number(f64::NAN).is_finite());
        assert!(!PropertyValue::Number(f64::NEG_INFINITY).is_finite());

        let mut props = Properties::new();
        props.insert("a".into(), PropertyValue::Integer(1));
        assert_eq!(first_non_finite(&props), None);
        props.insert("ratio".into(), PropertyValue::Number(f64::INFINITY));
        assert_eq!(first_non_finite(&props), Some("ratio"));
    }

    #[test]
    fn display_is_bare_value() {
        assert_eq!(PropertyValue::from("LRU").to_string(), "LRU");
        assert_eq!(PropertyValue::Integer(7).to_string(), "7");
        assert_eq!(PropertyValue::Bool(false).to_string(), "false");
    }
}
