//! photofinder: a query engine for browsing a photographer catalog.
//!
//! photofinder takes a static catalog of provider records and narrows it with
//! independently adjustable constraints:
//! - Price range (inclusive bounds, self-clamping)
//! - Minimum rating (`0..=4`)
//! - Style tags (any selected tag matches)
//! - City (exact match)
//! - Free-text search over name, city and tags (case-insensitive)
//! - Ordering by price, rating or recency
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← Example consumer
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - BrowseSession (shared catalog + constraints)     │
//! │  - Event dispatch onto constraint mutators          │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Query Layer (query/)  │   │ Catalog Layer (catalog/)│
//! │ - ConstraintState     │   │ - CatalogSource, JSON   │
//! │ - SortOption          │   │ - CatalogStore          │
//! │ - evaluate            │   │ - Facets                │
//! └───────────────────────┘   └─────────────────────────┘
//!         │                                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Path expansion (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Provider model (domain/provider)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! catalog_path = "~/photofinder/db.json"
//! price_ceiling = 100000
//! trace_level = "debug"
//!
//! [query]
//! search = "wedding"
//! max_price = 20000
//! min_rating = 4
//! styles = ["candid", "traditional"]
//! city = "Delhi"
//! sort = "priceAsc"
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use photofinder::{handle_event, BrowseSession, CatalogStore, Event, ProviderRecord, SortOption};
//!
//! let store = CatalogStore::new(vec![
//!     ProviderRecord::new(1, "Ravi", "Delhi", 5000, 4.5, ["wedding"]),
//!     ProviderRecord::new(2, "Meera", "Mumbai", 8000, 3.0, ["portrait"]),
//! ])?;
//!
//! let mut session = BrowseSession::new(Arc::new(store));
//! handle_event(&mut session, &Event::SetSort(SortOption::RatingDesc));
//!
//! let names: Vec<&str> = session.current_results().iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, ["Ravi", "Meera"]);
//! # Ok::<(), photofinder::PhotofinderError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod query;

pub mod observability;

pub use app::{handle_event, BrowseSession, Event};
pub use catalog::{CatalogSource, CatalogStore, Facets, InMemoryCatalog, JsonCatalog};
pub use domain::{PhotofinderError, ProviderRecord, Result, Review};
pub use query::{evaluate, ConstraintState, PriceRange, SortOption};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Top-level configuration.
///
/// Loaded from a TOML file with [`Config::from_file`] or from a flat string map
/// with [`Config::from_map`]. Missing keys take their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the catalog JSON document. A leading `~` is expanded.
    /// Default: `"db.json"`
    pub catalog_path: String,

    /// Upper bound of the price range. Default: `100000`
    ///
    /// [`initialize`] raises it to the catalog's highest price when that is larger.
    pub price_ceiling: u32,

    /// Tracing filter directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub trace_level: Option<String>,

    /// Constraints applied to a new session.
    pub query: QueryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: "db.json".to_string(),
            price_ceiling: query::DEFAULT_PRICE_CEILING,
            trace_level: None,
            query: QueryConfig::default(),
        }
    }
}

/// Initial constraint set.
///
/// Values go through the [`ConstraintState`] mutators, so out-of-range inputs are
/// normalized instead of rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_rating: Option<f64>,
    pub styles: Vec<String>,
    pub city: Option<String>,
    /// Sort option name; unrecognized names mean no sorting.
    pub sort: Option<String>,
}

impl QueryConfig {
    /// Applies these values to `constraints`.
    ///
    /// The upper price bound is applied before the lower one, so a lower bound
    /// above the upper bound is clamped down to it. Styles already selected stay
    /// selected.
    pub fn apply(&self, constraints: &mut ConstraintState) {
        if let Some(search) = &self.search {
            constraints.set_search_term(search.as_str());
        }
        if let Some(max_price) = self.max_price {
            constraints.set_price_upper(max_price);
        }
        if let Some(min_price) = self.min_price {
            constraints.set_price_lower(min_price);
        }
        if let Some(min_rating) = self.min_rating {
            constraints.set_rating(min_rating);
        }
        for style in &self.styles {
            if !constraints.style_filters().contains(style) {
                constraints.toggle_style(style.as_str());
            }
        }
        if let Some(city) = &self.city {
            constraints.set_city(city.as_str());
        }
        if let Some(sort) = &self.sort {
            constraints.set_sort_option(SortOption::parse(sort));
        }
    }

    /// Builds a fresh constraint state with these values applied.
    #[must_use]
    pub fn to_constraints(&self, price_ceiling: u32) -> ConstraintState {
        let mut constraints = ConstraintState::with_ceiling(price_ceiling);
        self.apply(&mut constraints);
        constraints
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PhotofinderError::Io`] if the file cannot be read and
    /// [`PhotofinderError::Config`] if it is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| PhotofinderError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses configuration from a flat string map, starting from defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use photofinder::{Config, SortOption};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_path".to_string(), "photographers.json".to_string());
    /// map.insert("styles".to_string(), "wedding, candid".to_string());
    /// map.insert("sort".to_string(), "ratingDesc".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.catalog_path, "photographers.json");
    /// assert_eq!(config.query.styles, vec!["wedding", "candid"]);
    /// let sort = config.query.sort.as_deref().map(SortOption::parse);
    /// assert_eq!(sort, Some(SortOption::RatingDesc));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().with_overrides(map)
    }

    /// Overrides fields from a flat string map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_path`, `trace_level`, `search`, `city`, `sort`: taken verbatim
    /// - `price_ceiling`: `u32`, ignored on parse error
    /// - `min_price`, `max_price`: `i64`, ignored on parse error
    /// - `min_rating`: `f64`, ignored on parse error
    /// - `styles`: comma-separated, blank entries dropped
    ///
    /// Unknown keys are logged and ignored.
    #[must_use]
    pub fn with_overrides(mut self, map: &BTreeMap<String, String>) -> Self {
        for (key, value) in map {
            match key.as_str() {
                "catalog_path" => self.catalog_path.clone_from(value),
                "trace_level" => self.trace_level = Some(value.clone()),
                "price_ceiling" => {
                    if let Ok(ceiling) = value.trim().parse() {
                        self.price_ceiling = ceiling;
                    }
                }
                "search" => self.query.search = Some(value.clone()),
                "min_price" => {
                    self.query.min_price = value.trim().parse().ok().or(self.query.min_price);
                }
                "max_price" => {
                    self.query.max_price = value.trim().parse().ok().or(self.query.max_price);
                }
                "min_rating" => {
                    self.query.min_rating = value.trim().parse().ok().or(self.query.min_rating);
                }
                "styles" => {
                    self.query.styles = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect();
                }
                "city" => self.query.city = Some(value.clone()),
                "sort" => self.query.sort = Some(value.clone()),
                other => tracing::debug!(key = %other, "ignoring unknown configuration key"),
            }
        }
        self
    }
}

/// Loads the configured catalog and opens a session on it.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, decoded or validated.
///
/// # Example
///
/// ```no_run
/// use photofinder::{initialize, Config};
///
/// let session = initialize(&Config::default())?;
/// println!("{} cities", session.facet_cities().len());
/// # Ok::<(), photofinder::PhotofinderError>(())
/// ```
pub fn initialize(config: &Config) -> Result<BrowseSession> {
    let path = infrastructure::expand_tilde(&config.catalog_path);
    tracing::debug!(catalog = ?path, "initializing photofinder");

    let store = CatalogStore::load(&JsonCatalog::new(path))?;
    let ceiling = config.price_ceiling.max(store.max_price());
    if ceiling > config.price_ceiling {
        tracing::debug!(
            configured = config.price_ceiling,
            ceiling,
            "catalog prices exceed configured ceiling, widening"
        );
    }
    let constraints = config.query.to_constraints(ceiling);

    Ok(BrowseSession::with_constraints(Arc::new(store), constraints))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_toml_config() {
        let config: Config = toml::from_str(
            r#"
            catalog_path = "~/photofinder/db.json"
            price_ceiling = 50000
            trace_level = "debug"

            [query]
            search = "wedding"
            max_price = 20000
            min_rating = 4
            styles = ["candid", "traditional"]
            city = "Delhi"
            sort = "priceAsc"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.price_ceiling, 50_000);
        assert_eq!(config.query.min_rating, Some(4.0));

        let constraints = config.query.to_constraints(config.price_ceiling);
        assert_eq!(constraints.price_range().upper(), 20_000);
        assert_eq!(constraints.rating_filter(), 4);
        assert_eq!(constraints.style_filters().len(), 2);
        assert_eq!(constraints.city_filter(), Some("Delhi"));
        assert_eq!(constraints.sort_option(), SortOption::PriceAsc);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").expect("valid config");
        assert_eq!(config.catalog_path, "db.json");
        assert_eq!(config.price_ceiling, query::DEFAULT_PRICE_CEILING);
        assert_eq!(config.query, QueryConfig::default());
    }

    #[test]
    fn rejects_unknown_toml_keys() {
        assert!(toml::from_str::<Config>("catalog = \"db.json\"").is_err());
    }

    #[test]
    fn map_overrides_are_lenient() {
        let mut map = BTreeMap::new();
        map.insert("price_ceiling".to_string(), "lots".to_string());
        map.insert("min_price".to_string(), "-500".to_string());
        map.insert("max_price".to_string(), "999999".to_string());
        map.insert("styles".to_string(), " , wedding,,".to_string());
        map.insert("sort".to_string(), "bogus".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.price_ceiling, query::DEFAULT_PRICE_CEILING);

        let constraints = config.query.to_constraints(config.price_ceiling);
        assert_eq!(constraints.price_range().lower(), 0);
        assert_eq!(constraints.price_range().upper(), query::DEFAULT_PRICE_CEILING);
        assert_eq!(config.query.styles, vec!["wedding"]);
        assert_eq!(constraints.sort_option(), SortOption::None);
    }

    #[test]
    fn duplicate_configured_styles_stay_selected() {
        let query = QueryConfig {
            styles: vec!["wedding".to_string(), "wedding".to_string()],
            ..QueryConfig::default()
        };

        let constraints = query.to_constraints(1_000);
        assert!(constraints.style_filters().contains("wedding"));
    }
}
