//! af-catalog: registry of component types available to a design.
//!
//! A [`Catalog`] is loaded once (from [`Catalog::builtin`] or a list of
//! [`CatalogEntry`] records) and is read-only afterwards. Entries carry the
//! cost and constraint strings the analysis layer derives metrics from.
//!
//! # Example
//!
//! ```
//! use af_catalog::{Catalog, parse_throughput};
//!
//! let catalog = Catalog::builtin();
//! let lb = catalog.lookup("load_balancer").unwrap();
//! assert_eq!(lb.monthly_cost, 50.0);
//! assert_eq!(lb.max_throughput(), Some(100_000));
//! assert_eq!(parse_throughput("1M msgs/sec"), Some(1_000_000));
//! ```

pub mod builtin;
pub mod catalog;
pub mod constraints;
pub mod entry;
pub mod error;
pub mod property;

pub use catalog::Catalog;
pub use constraints::{parse_leading_integer, parse_throughput};
pub use entry::CatalogEntry;
pub use error::{CatalogError, CatalogResult};
pub use property::{Properties, PropertyValue, first_non_finite};

/// Type ids the analysis rules look for by name.
pub mod types {
    pub const LOAD_BALANCER: &str = "load_balancer";
    pub const WEB_SERVER: &str = "web_server";
    pub const DATABASE: &str = "database";
    pub const CACHE: &str = "cache";
    pub const MESSAGE_QUEUE: &str = "message_queue";
    pub const CDN: &str = "cdn";
}
