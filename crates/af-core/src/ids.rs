use core::borrow::Borrow;
use core::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a component instance placed in a design.
    ComponentId
);

string_id!(
    /// Identifier of a directed connection between two component instances.
    ConnectionId
);

/// Monotonic counter used to mint fresh ids.
///
/// Ids are `<prefix>_<n>`; `n` never goes backwards, so a removed id is never
/// handed out again by the same generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next `<prefix>_<n>` for which `taken` returns false.
    pub fn next_free(&mut self, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        loop {
            self.next += 1;
            let candidate = format!("{prefix}_{}", self.next);
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_raw_string() {
        let id = ComponentId::new("cache_3");
        assert_eq!(id.to_string(), "cache_3");
        assert_eq!(id.as_str(), "cache_3");
        assert_eq!(ConnectionId::from("conn_1"), ConnectionId::new("conn_1"));
    }

    #[test]
    fn generator_is_sequential() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_free("database", |_| false), "database_1");
        assert_eq!(ids.next_free("cache", |_| false), "cache_2");
    }

    #[test]
    fn generator_skips_taken() {
        let mut ids = IdGenerator::new();
        let taken = ["conn_1", "conn_2"];
        let id = ids.next_free("conn", |c| taken.contains(&c));
        assert_eq!(id, "conn_3");
    }
}
