//! JSON file-based catalog source.
//!
//! Reads the catalog from a JSON document in the same shape as the directory's
//! `db.json`. Decoding is all-or-nothing: a malformed document yields an error and
//! no partial catalog.
//!
//! # File Format
//!
//! ```json
//! {
//!   "photographers": [
//!     {
//!       "id": 1,
//!       "name": "Ravi Kumar",
//!       "location": "Delhi",
//!       "price": 5000,
//!       "rating": 4.5,
//!       "tags": ["wedding", "candid"],
//!       "bio": "Candid wedding specialist",
//!       "profilePic": "https://example.com/ravi.jpg",
//!       "portfolio": ["https://example.com/1.jpg"],
//!       "reviews": [
//!         { "name": "Anita", "rating": 5, "comment": "Great!", "date": "2024-01-05" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! The top-level key may also be spelled `providers`.

use crate::catalog::source::CatalogSource;
use crate::domain::error::{PhotofinderError, Result};
use crate::domain::ProviderRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level document shape.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(alias = "providers")]
    photographers: Vec<ProviderRecord>,
}

/// JSON catalog source.
///
/// Holds only the path; the file is read on every [`CatalogSource::load`] call.
///
/// # Examples
///
/// ```no_run
/// use photofinder::catalog::{CatalogStore, JsonCatalog};
///
/// let store = CatalogStore::load(&JsonCatalog::new("db.json"))?;
/// println!("{} photographers", store.len());
/// # Ok::<(), photofinder::PhotofinderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Decodes a catalog document from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PhotofinderError::Catalog`] if the string is not a valid catalog
    /// document.
    pub fn parse(contents: &str) -> Result<Vec<ProviderRecord>> {
        let document: CatalogDocument = serde_json::from_str(contents)
            .map_err(|e| PhotofinderError::Catalog(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(records = document.photographers.len(), "decoded catalog document");
        Ok(document.photographers)
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Vec<ProviderRecord>> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        Self::parse(&contents)
    }
}
