//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where
//! provider records come from. The store only needs an ordered list of parsed
//! records; the encoding behind it belongs to the source.

use crate::domain::error::Result;
use crate::domain::ProviderRecord;

/// Abstraction over catalog ingestion backends.
///
/// Implementations return records in catalog order. That order becomes the
/// default result ordering and the tiebreak for every sort, so sources must not
/// shuffle it.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): reads a `db.json`-style document
/// - [`InMemoryCatalog`]: wraps records that are already in memory
pub trait CatalogSource {
    /// Loads every record in catalog order.
    ///
    /// Validation happens in [`CatalogStore::load`](crate::catalog::CatalogStore::load),
    /// so a source only needs to decode.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or decoded.
    fn load(&self) -> Result<Vec<ProviderRecord>>;
}

/// A source backed by an in-memory list of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<ProviderRecord>,
}

impl InMemoryCatalog {
    #[must_use]
    pub const fn new(records: Vec<ProviderRecord>) -> Self {
        Self { records }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Result<Vec<ProviderRecord>> {
        tracing::debug!(count = self.records.len(), "loading in-memory catalog");
        Ok(self.records.clone())
    }
}
