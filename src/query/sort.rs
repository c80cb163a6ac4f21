//! Result ordering options.
//!
//! The sort stage always uses a stable sort, so records that tie on the active key
//! stay in filter-stage order (which mirrors catalog order).

use crate::domain::ProviderRecord;
use std::cmp::Ordering;
use std::fmt;

/// Ordering applied to filtered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Catalog order. Also the fallback for unrecognized option names.
    #[default]
    None,

    /// Cheapest first.
    PriceAsc,

    /// Best rated first.
    RatingDesc,

    /// Most recently added first, using descending `id` as the recency proxy.
    RecencyDesc,
}

impl SortOption {
    /// Canonical option name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PriceAsc => "priceAsc",
            Self::RatingDesc => "ratingDesc",
            Self::RecencyDesc => "recencyDesc",
        }
    }

    /// Parses an option name, falling back to [`SortOption::None`].
    ///
    /// Both the canonical names and the directory's form values
    /// (`priceLowHigh`, `ratingHighLow`, `recentlyAdded`) are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use photofinder::SortOption;
    ///
    /// assert_eq!(SortOption::parse("priceAsc"), SortOption::PriceAsc);
    /// assert_eq!(SortOption::parse("recentlyAdded"), SortOption::RecencyDesc);
    /// assert_eq!(SortOption::parse("alphabetical"), SortOption::None);
    /// assert_eq!(SortOption::parse(""), SortOption::None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "priceAsc" | "priceLowHigh" => Self::PriceAsc,
            "ratingDesc" | "ratingHighLow" => Self::RatingDesc,
            "recencyDesc" | "recentlyAdded" => Self::RecencyDesc,
            other => {
                if !other.is_empty() && other != "none" {
                    tracing::debug!(option = %other, "unrecognized sort option, using none");
                }
                Self::None
            }
        }
    }

    /// Compares two records under this option.
    ///
    /// [`SortOption::None`] treats every pair as equal, which leaves a stable sort
    /// a no-op.
    #[must_use]
    pub fn compare(self, a: &ProviderRecord, b: &ProviderRecord) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::RatingDesc => b.rating.total_cmp(&a.rating),
            Self::RecencyDesc => b.id.cmp(&a.id),
        }
    }

    /// Stable-sorts `records` in place.
    pub fn apply(self, records: &mut [&ProviderRecord]) {
        if self == Self::None {
            return;
        }
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl From<&str> for SortOption {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
