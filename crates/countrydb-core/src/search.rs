// crates/countrydb-core/src/search.rs

//! # Filter Engine
//!
//! Pure, synchronous predicates over an already-loaded collection. No I/O,
//! deterministic, stable: results keep the input order.

use std::collections::BTreeSet;

use crate::model::Country;

/// True when the country passes both predicates:
/// case-insensitive substring of `term` in the common name (empty matches
/// everything), AND exact region equality when `region` is non-empty.
pub fn matches(country: &Country, term: &str, region: &str) -> bool {
    name_matches(country, &term.to_lowercase()) && region_matches(country, region)
}

/// Narrow a collection by search term and region.
///
/// A stable filter: included countries appear in their input order and no
/// re-sorting happens. Filtering an already-filtered result with the same
/// parameters yields the same set.
pub fn filter_countries<'a>(
    countries: &'a [Country],
    term: &str,
    region: &str,
) -> Vec<&'a Country> {
    let needle = term.to_lowercase();
    countries
        .iter()
        .filter(|c| name_matches(c, &needle) && region_matches(c, region))
        .collect()
}

/// The distinct `region` values present in the collection, deduplicated and
/// in ascending lexical order. Derived from the data, never hard-coded.
pub fn region_universe(countries: &[Country]) -> Vec<String> {
    countries
        .iter()
        .map(|c| c.region.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn name_matches(country: &Country, needle: &str) -> bool {
    needle.is_empty() || country.name.common.to_lowercase().contains(needle)
}

fn region_matches(country: &Country, region: &str) -> bool {
    region.is_empty() || country.region == region
}
