//! Facet extraction.
//!
//! A facet is a distinct filterable value present in the catalog. The store
//! extracts facets once at load time and hands out the cached sets afterwards.
//! Values are listed in first-seen catalog order, so two extractions over the same
//! snapshot always enumerate identically.

use crate::domain::ProviderRecord;
use std::collections::HashSet;

/// Distinct tags and cities of a catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    tags: Vec<String>,
    cities: Vec<String>,
}

impl Facets {
    /// Extracts the facet sets from `records`.
    ///
    /// # Examples
    ///
    /// ```
    /// use photofinder::catalog::Facets;
    /// use photofinder::ProviderRecord;
    ///
    /// let records = vec![
    ///     ProviderRecord::new(1, "A", "Delhi", 5000, 4.5, ["wedding", "candid"]),
    ///     ProviderRecord::new(2, "B", "Mumbai", 8000, 3.0, ["candid"]),
    ///     ProviderRecord::new(3, "C", "Delhi", 7000, 4.0, ["portrait"]),
    /// ];
    ///
    /// let facets = Facets::extract(&records);
    /// assert_eq!(facets.tags(), ["wedding", "candid", "portrait"]);
    /// assert_eq!(facets.cities(), ["Delhi", "Mumbai"]);
    /// ```
    #[must_use]
    pub fn extract(records: &[ProviderRecord]) -> Self {
        let _span = tracing::debug_span!("extract_facets", records = records.len()).entered();

        let mut seen_tags = HashSet::new();
        let mut seen_cities = HashSet::new();
        let mut tags = Vec::new();
        let mut cities = Vec::new();

        for record in records {
            for tag in &record.tags {
                if seen_tags.insert(tag.as_str()) {
                    tags.push(tag.clone());
                }
            }
            if seen_cities.insert(record.location.as_str()) {
                cities.push(record.location.clone());
            }
        }

        tracing::debug!(tags = tags.len(), cities = cities.len(), "facets extracted");

        Self { tags, cities }
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}
