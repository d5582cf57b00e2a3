//! The read-only registry of component types.

use std::collections::HashMap;

use crate::entry::CatalogEntry;
use crate::error::{CatalogError, CatalogResult};

/// Registry of catalog entries keyed by `type_id`, kept in load order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_type: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and malformed entries.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> CatalogResult<Self> {
        let mut by_type = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            entry.check()?;
            if by_type.insert(entry.type_id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateType {
                    type_id: entry.type_id.clone(),
                });
            }
        }
        Ok(Self { entries, by_type })
    }

    /// Append an entry known to be valid and unique (stock seed only).
    pub(crate) fn push_unchecked(&mut self, entry: CatalogEntry) {
        self.by_type.insert(entry.type_id.clone(), self.entries.len());
        self.entries.push(entry);
    }

    pub fn lookup(&self, type_id: &str) -> CatalogResult<&CatalogEntry> {
        self.by_type
            .get(type_id)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| CatalogError::UnknownType {
                type_id: type_id.to_string(),
            })
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.by_type.contains_key(type_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose id or display name contains `query` (case-insensitive).
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |e| e.matches_query(query))
    }
}
