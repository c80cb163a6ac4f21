//! Provider domain model.
//!
//! This module defines [`ProviderRecord`], one photographer listed in the catalog,
//! together with the profile-only [`Review`] type. The query engine reads only the
//! filterable fields (`id`, `name`, `location`, `price`, `rating`, `tags`); the
//! profile fields ride along for the presentation layer.

use crate::domain::error::{PhotofinderError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest rating a record may carry.
pub const MAX_RATING: f64 = 5.0;

/// A single service provider in the catalog.
///
/// # Fields
///
/// - `id`: Unique identifier, monotonic by insertion and used as the recency proxy
/// - `name`: Display name
/// - `location`: City name
/// - `price`: Starting price in a currency-agnostic unit
/// - `rating`: Average rating in `[0, 5]`
/// - `tags`: Style tags, never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub price: u32,
    pub rating: f64,
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub portfolio: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

/// A customer review shown on a provider's profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: f64,
    pub comment: String,
    pub date: NaiveDate,
}

impl ProviderRecord {
    /// Creates a record with the filterable fields set and no profile data.
    ///
    /// # Examples
    ///
    /// ```
    /// use photofinder::ProviderRecord;
    ///
    /// let record = ProviderRecord::new(1, "Ravi Kumar", "Delhi", 5000, 4.5, ["wedding"]);
    /// assert_eq!(record.tags, vec!["wedding".to_string()]);
    /// assert!(record.reviews.is_empty());
    /// ```
    #[must_use]
    pub fn new<I, S>(
        id: u64,
        name: impl Into<String>,
        location: impl Into<String>,
        price: u32,
        rating: f64,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            price,
            rating,
            tags: tags.into_iter().map(Into::into).collect(),
            bio: None,
            profile_pic: None,
            portfolio: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Checks the record against the data model.
    ///
    /// # Errors
    ///
    /// Returns [`PhotofinderError::InvalidRecord`] if:
    /// - `name` or `location` is blank
    /// - `rating` is not a finite number in `[0, 5]`
    /// - `tags` is empty or contains a blank tag
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| PhotofinderError::InvalidRecord {
            id: self.id,
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.location.trim().is_empty() {
            return Err(invalid("location is empty"));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(invalid(&format!("rating {} is outside [0, 5]", self.rating)));
        }
        if self.tags.is_empty() {
            return Err(invalid("no tags"));
        }
        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(invalid("blank tag"));
        }

        Ok(())
    }

    /// Returns `true` if the record carries `tag` exactly.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_well_formed_record() {
        let record = ProviderRecord::new(1, "Asha", "Delhi", 5000, 4.5, ["wedding"]);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        let record = ProviderRecord::new(7, "Asha", "Delhi", 5000, 5.5, ["wedding"]);
        match record.validate() {
            Err(PhotofinderError::InvalidRecord { id, .. }) => assert_eq!(id, 7),
            other => panic!("expected InvalidRecord, got {other:?}"),
        }

        let nan = ProviderRecord::new(8, "Asha", "Delhi", 5000, f64::NAN, ["wedding"]);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn validate_rejects_missing_tags_and_blank_fields() {
        let no_tags = ProviderRecord::new(1, "Asha", "Delhi", 5000, 4.0, Vec::<String>::new());
        assert!(no_tags.validate().is_err());

        let blank_tag = ProviderRecord::new(1, "Asha", "Delhi", 5000, 4.0, ["  "]);
        assert!(blank_tag.validate().is_err());

        let no_city = ProviderRecord::new(1, "Asha", "", 5000, 4.0, ["wedding"]);
        assert!(no_city.validate().is_err());
    }

    #[test]
    fn deserializes_camel_case_profile_fields() {
        let json = r#"{
            "id": 3,
            "name": "Meera",
            "location": "Pune",
            "price": 12000,
            "rating": 4.8,
            "tags": ["maternity", "portrait"],
            "profilePic": "https://example.com/meera.jpg",
            "reviews": [
                {"name": "Kiran", "rating": 5, "comment": "Lovely work", "date": "2024-02-11"}
            ]
        }"#;

        let record: ProviderRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.profile_pic.as_deref(), Some("https://example.com/meera.jpg"));
        assert_eq!(record.reviews.len(), 1);
        assert_eq!(
            record.reviews[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 11).expect("valid date")
        );
        assert!(record.portfolio.is_empty());
        assert!(record.has_tag("portrait"));
        assert!(!record.has_tag("Portrait"));
    }
}
