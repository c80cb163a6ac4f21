//! Catalog layer: ingestion, storage and facets.
//!
//! # Modules
//!
//! - `source`: Catalog source trait and the in-memory source
//! - `json`: JSON file-based source in the `db.json` shape
//! - `store`: Immutable, validated record store
//! - `facets`: Distinct tag and city extraction

pub mod facets;
pub mod json;
pub mod source;
pub mod store;

pub use facets::Facets;
pub use json::JsonCatalog;
pub use source::{CatalogSource, InMemoryCatalog};
pub use store::CatalogStore;
