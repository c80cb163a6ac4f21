//! Browsing session state.
//!
//! [`BrowseSession`] pairs a shared, read-only [`CatalogStore`] with the
//! [`ConstraintState`] owned by one user. It is the consumer-facing surface for
//! the presentation layer:
//!
//! - **Facets**: cached at catalog load, returned by reference
//! - **Results**: recomputed on every [`BrowseSession::current_results`] call
//!
//! There is no observer graph. After mutating constraints the caller asks for
//! fresh results when it wants them.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use photofinder::{BrowseSession, CatalogStore, ProviderRecord};
//!
//! let store = Arc::new(CatalogStore::new(vec![
//!     ProviderRecord::new(1, "Ravi", "Delhi", 5000, 4.5, ["wedding"]),
//!     ProviderRecord::new(2, "Meera", "Mumbai", 8000, 3.0, ["portrait"]),
//! ])?);
//!
//! let mut session = BrowseSession::new(store);
//! session.constraints_mut().set_rating(4.0);
//! assert_eq!(session.current_results().len(), 1);
//! # Ok::<(), photofinder::PhotofinderError>(())
//! ```

use crate::catalog::CatalogStore;
use crate::domain::ProviderRecord;
use crate::query::{evaluate, ConstraintState, DEFAULT_PRICE_CEILING};
use std::sync::Arc;

/// One user's view over a shared catalog.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    /// Catalog shared by every session; never mutated after load.
    catalog: Arc<CatalogStore>,

    /// Constraints owned by this session.
    constraints: ConstraintState,
}

impl BrowseSession {
    /// Creates a session with unconstrained constraints.
    ///
    /// The price ceiling is the default ceiling or the catalog's highest price,
    /// whichever is larger.
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        let ceiling = DEFAULT_PRICE_CEILING.max(catalog.max_price());
        Self::with_constraints(catalog, ConstraintState::with_ceiling(ceiling))
    }

    #[must_use]
    pub const fn with_constraints(
        catalog: Arc<CatalogStore>,
        constraints: ConstraintState,
    ) -> Self {
        Self {
            catalog,
            constraints,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> &mut ConstraintState {
        &mut self.constraints
    }

    #[must_use]
    pub fn facet_tags(&self) -> &[String] {
        self.catalog.facet_tags()
    }

    #[must_use]
    pub fn facet_cities(&self) -> &[String] {
        self.catalog.facet_cities()
    }

    /// Evaluates the current constraints against the catalog.
    #[must_use]
    pub fn current_results(&self) -> Vec<&ProviderRecord> {
        evaluate(self.catalog.records(), &self.constraints)
    }

    /// Looks up a single record for a detail view.
    #[must_use]
    pub fn record(&self, id: u64) -> Option<&ProviderRecord> {
        self.catalog.get(id)
    }
}
