//! Domain layer for photofinder.
//!
//! This module contains the core domain types, independent of how the catalog is
//! stored or how results are presented.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`provider`]: Provider record model and load-time validation
//!
//! # Examples
//!
//! ```
//! use photofinder::domain::{ProviderRecord, Result};
//!
//! fn create_record() -> Result<ProviderRecord> {
//!     let record = ProviderRecord::new(1, "Ravi", "Delhi", 5000, 4.5, ["wedding"]);
//!     record.validate()?;
//!     Ok(record)
//! }
//! # create_record().unwrap();
//! ```

pub mod error;
pub mod provider;

pub use error::{PhotofinderError, Result};
pub use provider::{ProviderRecord, Review};
