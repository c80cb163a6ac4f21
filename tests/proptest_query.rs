//! Property tests for query evaluation.
//!
//! Checks `evaluate` against a direct restatement of the filter predicates over
//! generated catalogs and constraint states.

use photofinder::{evaluate, CatalogStore, ConstraintState, ProviderRecord, SortOption};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

const NAMES: &[&str] = &["Ravi", "Meera", "Arjun", "Kavya", "Lens Studio", "Pixel Works"];
const CITIES: &[&str] = &["Delhi", "Mumbai", "Pune", "Goa", "Jaipur"];
const TAGS: &[&str] = &["wedding", "portrait", "candid", "maternity", "fashion", "event"];
const TERMS: &[&str] = &["", "a", "DEL", "wedd", "studio", "zzz", "pUnE"];

const CEILING: u32 = 20_000;

// ============================================================================
// Generators
// ============================================================================

/// A valid record with id 0. Ratings are multiples of 0.5.
fn arb_record() -> impl Strategy<Value = ProviderRecord> {
    (
        prop::sample::select(NAMES),
        prop::sample::select(CITIES),
        0u32..25,
        0u32..=10,
        prop::collection::vec(prop::sample::select(TAGS), 1..=3),
    )
        .prop_map(|(name, city, price, half_stars, tags)| {
            let rating = f64::from(half_stars) / 2.0;
            ProviderRecord::new(0, name, city, price * 1_000, rating, tags)
        })
}

/// Catalogs whose ids ascend in catalog order, so ties can be checked by id.
fn arb_catalog(max_len: usize) -> impl Strategy<Value = Vec<ProviderRecord>> {
    prop::collection::vec(arb_record(), 0..=max_len).prop_map(|mut records| {
        for (id, record) in (1..).zip(records.iter_mut()) {
            record.id = id;
        }
        records
    })
}

fn arb_sort() -> impl Strategy<Value = SortOption> {
    prop_oneof![
        Just(SortOption::None),
        Just(SortOption::PriceAsc),
        Just(SortOption::RatingDesc),
        Just(SortOption::RecencyDesc),
    ]
}

/// Constraint states built through the public mutators, including inputs the
/// mutators have to clamp.
fn arb_constraints() -> impl Strategy<Value = ConstraintState> {
    (
        -1_000i64..25_000,
        -2_000i64..13_000,
        -1.0f64..6.0,
        prop::collection::vec(prop::sample::select(TAGS), 0..3),
        prop::option::of(prop::sample::select(CITIES)),
        prop::sample::select(TERMS),
        arb_sort(),
    )
        .prop_map(|(upper, lower, rating, styles, city, term, sort)| {
            let mut constraints = ConstraintState::with_ceiling(CEILING);
            constraints.set_price_upper(upper);
            constraints.set_price_lower(lower);
            constraints.set_rating(rating);
            for style in styles {
                constraints.toggle_style(style);
            }
            if let Some(city) = city {
                constraints.set_city(city);
            }
            constraints.set_search_term(term);
            constraints.set_sort_option(sort);
            constraints
        })
}

/// The filter predicates written out independently of the engine.
fn satisfies(record: &ProviderRecord, constraints: &ConstraintState) -> bool {
    let range = constraints.price_range();
    let term = constraints.search_term().to_lowercase();
    let styles = constraints.style_filters();

    range.lower() <= record.price
        && record.price <= range.upper()
        && record.rating >= f64::from(constraints.rating_filter())
        && (styles.is_empty() || record.tags.iter().any(|t| styles.contains(t)))
        && constraints.city_filter().map_or(true, |c| c == record.location)
        && (term.is_empty()
            || record.name.to_lowercase().contains(&term)
            || record.location.to_lowercase().contains(&term)
            || record.tags.iter().any(|t| t.to_lowercase().contains(&term)))
}

fn ids(results: &[&ProviderRecord]) -> Vec<u64> {
    results.iter().map(|r| r.id).collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn results_are_sound(catalog in arb_catalog(40), constraints in arb_constraints()) {
        for record in evaluate(&catalog, &constraints) {
            prop_assert!(
                satisfies(record, &constraints),
                "record {} returned under {:?}",
                record.id,
                constraints
            );
        }
    }

    #[test]
    fn results_are_complete_without_duplicates(
        catalog in arb_catalog(40),
        constraints in arb_constraints()
    ) {
        let returned = ids(&evaluate(&catalog, &constraints));
        let unique: HashSet<u64> = returned.iter().copied().collect();
        let expected: HashSet<u64> = catalog
            .iter()
            .filter(|r| satisfies(r, &constraints))
            .map(|r| r.id)
            .collect();

        prop_assert_eq!(unique.len(), returned.len(), "duplicates in {:?}", returned);
        prop_assert_eq!(unique, expected, "constraints {:?}", constraints);
    }

    #[test]
    fn sort_is_ordered_and_stable(catalog in arb_catalog(40), constraints in arb_constraints()) {
        let sort = constraints.sort_option();
        let results = evaluate(&catalog, &constraints);

        for pair in results.windows(2) {
            let ordering = sort.compare(pair[0], pair[1]);
            prop_assert_ne!(ordering, Ordering::Greater, "{} out of order", sort);
            if ordering == Ordering::Equal {
                prop_assert!(
                    pair[0].id < pair[1].id,
                    "tie {} before {} under {}",
                    pair[0].id,
                    pair[1].id,
                    sort
                );
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent(catalog in arb_catalog(40), constraints in arb_constraints()) {
        let first = ids(&evaluate(&catalog, &constraints));
        let second = ids(&evaluate(&catalog, &constraints));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unconstrained_state_returns_whole_catalog(catalog in arb_catalog(40), sort in arb_sort()) {
        let store = CatalogStore::new(catalog).expect("generated catalog is valid");
        let mut constraints = ConstraintState::with_ceiling(store.max_price());
        constraints.set_sort_option(sort);
        prop_assert!(constraints.is_unconstrained());

        let returned: HashSet<u64> = ids(&evaluate(store.records(), &constraints))
            .into_iter()
            .collect();
        let all: HashSet<u64> = store.records().iter().map(|r| r.id).collect();
        prop_assert_eq!(returned, all);
    }

    #[test]
    fn facets_cover_every_record(catalog in arb_catalog(60)) {
        let store = CatalogStore::new(catalog).expect("generated catalog is valid");

        for record in store.records() {
            prop_assert!(store.facet_cities().contains(&record.location));
            for tag in &record.tags {
                prop_assert!(store.facet_tags().contains(tag), "missing tag {}", tag);
            }
        }

        let cities: HashSet<&String> = store.facet_cities().iter().collect();
        let tags: HashSet<&String> = store.facet_tags().iter().collect();
        prop_assert_eq!(cities.len(), store.facet_cities().len());
        prop_assert_eq!(tags.len(), store.facet_tags().len());
    }
}
