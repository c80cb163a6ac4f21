//! Caller-owned constraint state.
//!
//! [`ConstraintState`] holds every active filter, the search term and the sort
//! option for one browsing session. Each dimension has exactly one mutator and
//! every mutator normalizes its input instead of failing, so any sequence of calls
//! leaves the state valid. In particular `lower <= upper <= ceiling` holds for the
//! price range at all times.

use super::sort::SortOption;
use std::collections::HashSet;

/// Default upper bound for prices.
pub const DEFAULT_PRICE_CEILING: u32 = 100_000;

/// Largest selectable minimum rating.
pub const MAX_RATING_FILTER: u8 = 4;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    lower: u32,
    upper: u32,
}

impl PriceRange {
    #[must_use]
    pub const fn lower(&self) -> u32 {
        self.lower
    }

    #[must_use]
    pub const fn upper(&self) -> u32 {
        self.upper
    }

    #[must_use]
    pub const fn contains(&self, price: u32) -> bool {
        self.lower <= price && price <= self.upper
    }
}

/// Active search, filter and sort parameters.
///
/// # Examples
///
/// ```
/// use photofinder::{ConstraintState, SortOption};
///
/// let mut constraints = ConstraintState::default();
/// constraints.set_price_upper(20_000);
/// constraints.set_price_lower(50_000); // clamped to the upper bound
/// assert_eq!(constraints.price_range().lower(), 20_000);
///
/// constraints.set_rating(7.0); // clamped to 4
/// assert_eq!(constraints.rating_filter(), 4);
///
/// constraints.toggle_style("wedding");
/// constraints.set_sort_option(SortOption::PriceAsc);
/// assert!(!constraints.is_unconstrained());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    search_term: String,
    price_range: PriceRange,
    price_ceiling: u32,
    rating_filter: u8,
    style_filters: HashSet<String>,
    city_filter: Option<String>,
    sort_option: SortOption,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::with_ceiling(DEFAULT_PRICE_CEILING)
    }
}

impl ConstraintState {
    /// Creates an unconstrained state whose price range spans `[0, ceiling]`.
    #[must_use]
    pub fn with_ceiling(ceiling: u32) -> Self {
        Self {
            search_term: String::new(),
            price_range: PriceRange {
                lower: 0,
                upper: ceiling,
            },
            price_ceiling: ceiling,
            rating_filter: 0,
            style_filters: HashSet::new(),
            city_filter: None,
            sort_option: SortOption::None,
        }
    }

    /// Sets the upper price bound, clamped into `[lower, ceiling]`.
    pub fn set_price_upper(&mut self, value: i64) {
        let clamped = value.clamp(
            i64::from(self.price_range.lower),
            i64::from(self.price_ceiling),
        );
        self.price_range.upper = u32::try_from(clamped).unwrap_or(self.price_ceiling);
    }

    /// Sets the lower price bound, clamped into `[0, upper]`.
    pub fn set_price_lower(&mut self, value: i64) {
        let clamped = value.clamp(0, i64::from(self.price_range.upper));
        self.price_range.lower = u32::try_from(clamped).unwrap_or(0);
    }

    /// Sets the minimum rating.
    ///
    /// Valid values are `0..=4`; anything else snaps to the nearest of them. NaN
    /// clears the filter.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_rating(&mut self, rating: f64) {
        self.rating_filter = if rating.is_nan() {
            0
        } else {
            rating.round().clamp(0.0, f64::from(MAX_RATING_FILTER)) as u8
        };
    }

    /// Adds `tag` to the style filters, or removes it if already selected.
    pub fn toggle_style(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.style_filters.remove(&tag) {
            self.style_filters.insert(tag);
        }
    }

    /// Restricts results to one city. An empty string clears the filter.
    pub fn set_city(&mut self, city: impl Into<String>) {
        let city = city.into();
        self.city_filter = if city.is_empty() { None } else { Some(city) };
    }

    pub fn clear_city(&mut self) {
        self.city_filter = None;
    }

    pub fn set_sort_option(&mut self, option: SortOption) {
        self.sort_option = option;
    }

    /// Stores the search term verbatim. Case folding happens at match time.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Restores the unconstrained state, keeping the price ceiling.
    pub fn reset(&mut self) {
        *self = Self::with_ceiling(self.price_ceiling);
    }

    /// Returns `true` when no filter dimension is active.
    ///
    /// The sort option is not a filter and is ignored here.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.price_range.lower == 0
            && self.price_range.upper == self.price_ceiling
            && self.rating_filter == 0
            && self.style_filters.is_empty()
            && self.city_filter.is_none()
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn price_range(&self) -> PriceRange {
        self.price_range
    }

    #[must_use]
    pub const fn price_ceiling(&self) -> u32 {
        self.price_ceiling
    }

    #[must_use]
    pub const fn rating_filter(&self) -> u8 {
        self.rating_filter
    }

    #[must_use]
    pub const fn style_filters(&self) -> &HashSet<String> {
        &self.style_filters
    }

    #[must_use]
    pub fn city_filter(&self) -> Option<&str> {
        self.city_filter.as_deref()
    }

    #[must_use]
    pub const fn sort_option(&self) -> SortOption {
        self.sort_option
    }
}
