//! Immutable catalog store.
//!
//! [`CatalogStore`] owns the session-static provider list. It is built once from a
//! [`CatalogSource`], validated record by record, and never changes afterwards.
//! Facets are extracted during construction and cached alongside the records.

use crate::catalog::facets::Facets;
use crate::catalog::source::CatalogSource;
use crate::domain::error::{PhotofinderError, Result};
use crate::domain::ProviderRecord;
use std::collections::HashMap;

/// Read-only provider catalog with cached facets.
///
/// Record order is the order the source produced. Nothing in the crate reorders
/// it; query results borrow from it.
///
/// # Examples
///
/// ```
/// use photofinder::catalog::CatalogStore;
/// use photofinder::ProviderRecord;
///
/// let store = CatalogStore::new(vec![
///     ProviderRecord::new(1, "Ravi", "Delhi", 5000, 4.5, ["wedding"]),
///     ProviderRecord::new(2, "Meera", "Mumbai", 8000, 3.0, ["portrait"]),
/// ])?;
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.facet_cities(), ["Delhi", "Mumbai"]);
/// assert_eq!(store.get(2).map(|r| r.name.as_str()), Some("Meera"));
/// # Ok::<(), photofinder::PhotofinderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<ProviderRecord>,
    facets: Facets,
    /// Record id to position in `records`.
    index: HashMap<u64, usize>,
    /// Highest record price, 0 for an empty catalog.
    max_price: u32,
}

impl CatalogStore {
    /// Builds a store from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`PhotofinderError::InvalidRecord`] for the first record that fails
    /// [`ProviderRecord::validate`] or reuses an id.
    pub fn new(records: Vec<ProviderRecord>) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_store_new", records = records.len()).entered();

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            record.validate()?;
            if index.insert(record.id, position).is_some() {
                return Err(PhotofinderError::InvalidRecord {
                    id: record.id,
                    reason: "duplicate id".to_string(),
                });
            }
        }

        let facets = Facets::extract(&records);
        let max_price = records.iter().map(|r| r.price).max().unwrap_or(0);

        tracing::debug!(
            records = records.len(),
            max_price,
            tags = facets.tags().len(),
            cities = facets.cities().len(),
            "catalog loaded"
        );

        Ok(Self {
            records,
            facets,
            index,
            max_price,
        })
    }

    /// Loads and validates the catalog from `source`.
    ///
    /// # Errors
    ///
    /// Propagates decoding errors from the source and validation errors from
    /// [`CatalogStore::new`].
    pub fn load(source: &impl CatalogSource) -> Result<Self> {
        let records = source.load()?;
        Self::new(records)
    }

    #[must_use]
    pub fn records(&self) -> &[ProviderRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&ProviderRecord> {
        self.index.get(&id).and_then(|&position| self.records.get(position))
    }

    /// Highest price in the catalog. Sessions widen their price ceiling to at
    /// least this value so an unconstrained state matches every record.
    #[must_use]
    pub const fn max_price(&self) -> u32 {
        self.max_price
    }

    #[must_use]
    pub const fn facets(&self) -> &Facets {
        &self.facets
    }

    #[must_use]
    pub fn facet_tags(&self) -> &[String] {
        self.facets.tags()
    }

    #[must_use]
    pub fn facet_cities(&self) -> &[String] {
        self.facets.cities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    #[test]
    fn rejects_duplicate_ids() {
        let result = CatalogStore::new(vec![
            ProviderRecord::new(1, "A", "Delhi", 1000, 4.0, ["x"]),
            ProviderRecord::new(1, "B", "Pune", 2000, 3.0, ["y"]),
        ]);

        match result {
            Err(PhotofinderError::InvalidRecord { id, reason }) => {
                assert_eq!(id, 1);
                assert_eq!(reason, "duplicate id");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_record_at_load() {
        let source = InMemoryCatalog::new(vec![ProviderRecord::new(
            4,
            "A",
            "Delhi",
            1000,
            -1.0,
            ["x"],
        )]);

        assert!(CatalogStore::load(&source).is_err());
    }

    #[test]
    fn keeps_source_order() {
        let store = CatalogStore::new(vec![
            ProviderRecord::new(9, "A", "Delhi", 1000, 4.0, ["x"]),
            ProviderRecord::new(3, "B", "Pune", 2000, 3.0, ["y"]),
            ProviderRecord::new(5, "C", "Goa", 500, 5.0, ["z"]),
        ])
        .expect("valid catalog");

        let ids: Vec<u64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 3, 5]);
        assert_eq!(store.get(5).map(|r| r.price), Some(500));
        assert!(store.get(42).is_none());
    }

    #[test]
    fn tracks_highest_price() {
        let store = CatalogStore::new(vec![
            ProviderRecord::new(1, "A", "Delhi", 1000, 4.0, ["x"]),
            ProviderRecord::new(2, "B", "Pune", 250_000, 3.0, ["y"]),
            ProviderRecord::new(3, "C", "Goa", 500, 5.0, ["z"]),
        ])
        .expect("valid catalog");

        assert_eq!(store.max_price(), 250_000);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let store = CatalogStore::new(vec![]).expect("empty catalog");
        assert!(store.is_empty());
        assert_eq!(store.max_price(), 0);
        assert!(store.facet_tags().is_empty());
        assert!(store.facet_cities().is_empty());
    }
}
