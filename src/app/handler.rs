//! Event handling for constraint edits.
//!
//! Each [`Event`] maps to exactly one [`ConstraintState`](crate::ConstraintState)
//! mutator. [`handle_event`] applies it and reports whether the state actually
//! changed, which tells the caller whether previously fetched results are stale.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use photofinder::{handle_event, BrowseSession, CatalogStore, Event};
//!
//! let mut session = BrowseSession::new(Arc::new(CatalogStore::default()));
//!
//! assert!(handle_event(&mut session, &Event::SetCity("Delhi".into())));
//! assert!(!handle_event(&mut session, &Event::SetCity("Delhi".into())));
//! ```

use crate::app::BrowseSession;
use crate::query::SortOption;

/// A single user edit to the active constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces the free-text search term.
    SetSearchTerm(String),
    /// Moves the lower price bound (clamped to `[0, upper]`).
    SetPriceLower(i64),
    /// Moves the upper price bound (clamped to `[lower, ceiling]`).
    SetPriceUpper(i64),
    /// Sets the minimum rating (snapped to `0..=4`).
    SetRating(f64),
    /// Selects or deselects a style tag.
    ToggleStyle(String),
    /// Restricts to one city; an empty string clears the filter.
    SetCity(String),
    /// Clears the city filter.
    ClearCity,
    /// Changes the result ordering.
    SetSort(SortOption),
    /// Clears every filter and the sort option.
    Reset,
}

/// Applies `event` to the session's constraints.
///
/// Returns `true` if the constraint state changed and results should be
/// re-fetched. Never fails: out-of-range inputs are normalized by the mutators.
pub fn handle_event(session: &mut BrowseSession, event: &Event) -> bool {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let before = session.constraints().clone();
    let constraints = session.constraints_mut();

    match event {
        Event::SetSearchTerm(term) => constraints.set_search_term(term.as_str()),
        Event::SetPriceLower(value) => constraints.set_price_lower(*value),
        Event::SetPriceUpper(value) => constraints.set_price_upper(*value),
        Event::SetRating(rating) => constraints.set_rating(*rating),
        Event::ToggleStyle(tag) => constraints.toggle_style(tag.as_str()),
        Event::SetCity(city) => constraints.set_city(city.as_str()),
        Event::ClearCity => constraints.clear_city(),
        Event::SetSort(option) => constraints.set_sort_option(*option),
        Event::Reset => constraints.reset(),
    }

    let changed = *session.constraints() != before;
    tracing::debug!(changed, "event handled");
    changed
}
