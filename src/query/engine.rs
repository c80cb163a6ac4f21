//! Query evaluation.
//!
//! [`evaluate`] maps a catalog and a [`ConstraintState`] to an ordered list of
//! borrowed records. It runs in two stages:
//!
//! 1. **Filter**: keep a record iff every active predicate holds. Order is
//!    preserved, so the survivors appear in catalog order.
//! 2. **Sort**: stable sort by the active [`SortOption`](super::SortOption).
//!
//! Evaluation is pure. It never mutates its inputs, performs no I/O and cannot
//! fail; an empty result is a valid answer.

use super::constraints::ConstraintState;
use crate::domain::ProviderRecord;

/// Filter predicates compiled from a constraint snapshot.
///
/// Holds the case-folded search term so it is computed once per evaluation
/// rather than once per record.
#[derive(Debug)]
struct Predicates<'c> {
    constraints: &'c ConstraintState,
    search_folded: Option<String>,
}

impl<'c> Predicates<'c> {
    fn new(constraints: &'c ConstraintState) -> Self {
        let term = constraints.search_term();
        Self {
            constraints,
            search_folded: (!term.is_empty()).then(|| term.to_lowercase()),
        }
    }

    fn matches(&self, record: &ProviderRecord) -> bool {
        self.price(record)
            && self.rating(record)
            && self.styles(record)
            && self.city(record)
            && self.search(record)
    }

    fn price(&self, record: &ProviderRecord) -> bool {
        self.constraints.price_range().contains(record.price)
    }

    fn rating(&self, record: &ProviderRecord) -> bool {
        record.rating >= f64::from(self.constraints.rating_filter())
    }

    /// OR across selected styles: one shared tag is enough.
    fn styles(&self, record: &ProviderRecord) -> bool {
        let selected = self.constraints.style_filters();
        selected.is_empty() || selected.iter().any(|tag| record.has_tag(tag))
    }

    /// Exact, case-sensitive, whole-value match.
    fn city(&self, record: &ProviderRecord) -> bool {
        self.constraints
            .city_filter()
            .map_or(true, |city| record.location == city)
    }

    /// Case-insensitive substring over name, location and each tag.
    fn search(&self, record: &ProviderRecord) -> bool {
        self.search_folded.as_deref().map_or(true, |term| {
            let contains = |text: &str| text.to_lowercase().contains(term);
            contains(&record.name)
                || contains(&record.location)
                || record.tags.iter().any(|tag| contains(tag))
        })
    }
}

/// Returns the records of `catalog` that satisfy `constraints`, in result order.
///
/// # Examples
///
/// ```
/// use photofinder::{evaluate, ConstraintState, ProviderRecord};
///
/// let catalog = vec![
///     ProviderRecord::new(1, "Ravi", "Delhi", 5000, 4.5, ["wedding"]),
///     ProviderRecord::new(2, "Meera", "Mumbai", 8000, 3.0, ["portrait"]),
/// ];
///
/// let mut constraints = ConstraintState::default();
/// constraints.set_search_term("mumbai");
///
/// let ids: Vec<u64> = evaluate(&catalog, &constraints).iter().map(|r| r.id).collect();
/// assert_eq!(ids, vec![2]);
/// ```
#[must_use]
pub fn evaluate<'a>(
    catalog: &'a [ProviderRecord],
    constraints: &ConstraintState,
) -> Vec<&'a ProviderRecord> {
    let _span = tracing::debug_span!(
        "evaluate",
        catalog_len = catalog.len(),
        search_len = constraints.search_term().len(),
        min_price = constraints.price_range().lower(),
        max_price = constraints.price_range().upper(),
        min_rating = constraints.rating_filter(),
        styles = constraints.style_filters().len(),
        city = ?constraints.city_filter(),
        sort = %constraints.sort_option()
    )
    .entered();

    let predicates = Predicates::new(constraints);

    let mut results: Vec<&ProviderRecord> = catalog
        .iter()
        .filter(|record| predicates.matches(record))
        .collect();

    constraints.sort_option().apply(&mut results);

    tracing::debug!(result_count = results.len(), "query evaluated");
    results
}
