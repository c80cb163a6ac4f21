//! Query layer: constraint state, ordering and evaluation.
//!
//! # Modules
//!
//! - [`constraints`]: Caller-owned, self-normalizing constraint state
//! - [`sort`]: Result ordering options
//! - [`engine`]: The pure filter-then-sort evaluation

pub mod constraints;
pub mod engine;
pub mod sort;

pub use constraints::{ConstraintState, PriceRange, DEFAULT_PRICE_CEILING, MAX_RATING_FILTER};
pub use engine::evaluate;
pub use sort::SortOption;
