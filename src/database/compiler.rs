// ABOUTME: Dynamic property search compiler
// ABOUTME: Turns sparse filter options into one aggregated, paginated SELECT
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB

//! # Property Search Compilation
//!
//! Properties are joined to their reviews and grouped so each row carries the
//! average rating. WHERE predicates are appended in a fixed order (city, owner,
//! price) no matter which filters are present; the rating filter applies to the
//! aggregate and therefore becomes a HAVING predicate. The row limit is always
//! the last parameter.
//!
//! The join is an inner join: a property without reviews has no average rating
//! and is not listed.

use super::money::scale_to_minor_units;
use super::params::{CompiledQuery, QueryParams};
use crate::constants::{listing, tables};
use crate::models::{FilterOptions, SqlValue};
use tracing::trace;

/// Compiles property searches for a fixed list of selected columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateCompiler {
    columns: &'static [&'static str],
}

impl PredicateCompiler {
    /// Id, title, nightly cost, and photos
    pub const SUMMARY: Self = Self::new(listing::SUMMARY_COLUMNS);

    /// Summary columns plus bedroom, bathroom, and parking counts
    pub const DETAILED: Self = Self::new(listing::DETAILED_COLUMNS);

    /// Compiler selecting `columns` next to the average rating.
    ///
    /// Every column is also a GROUP BY key.
    #[must_use]
    pub const fn new(columns: &'static [&'static str]) -> Self {
        Self { columns }
    }

    /// Selected non-aggregated columns
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// Compile a search. `None` uses the default limit of 10 rows.
    #[must_use]
    pub fn compile(&self, options: &FilterOptions, limit: Option<u32>) -> CompiledQuery {
        let column_list = self.columns.join(", ");
        let mut params = QueryParams::new();

        let mut statement = format!(
            "SELECT {column_list}, avg(rating) AS average_rating FROM {properties} \
             JOIN {reviews} ON {properties}.id = {reviews}.property_id",
            properties = tables::PROPERTIES,
            reviews = tables::PROPERTY_REVIEWS,
        );

        let conditions = where_predicates(options, &mut params);
        if !conditions.is_empty() {
            statement.push_str(" WHERE ");
            statement.push_str(&conditions.join(" AND "));
        }

        statement.push_str(" GROUP BY ");
        statement.push_str(&column_list);

        if let Some(rating) = options.minimum_rating() {
            let placeholder = params.push(SqlValue::numeric(rating));
            statement.push_str(&format!(" HAVING avg(rating) >= {placeholder}"));
        }

        let placeholder = params.push(limit.unwrap_or(listing::DEFAULT_LIMIT));
        statement.push_str(&format!(" ORDER BY cost_per_night ASC LIMIT {placeholder}"));

        trace!(
            statement = %statement,
            parameter_count = params.len(),
            "Compiled property search"
        );
        params.finish(statement)
    }
}

impl Default for PredicateCompiler {
    fn default() -> Self {
        Self::SUMMARY
    }
}

/// WHERE predicates in city, owner, price order, pushing their values as they go
fn where_predicates(options: &FilterOptions, params: &mut QueryParams) -> Vec<String> {
    let mut conditions = Vec::new();

    if let Some(city) = options.city() {
        let placeholder = params.push(format!("%{city}%"));
        conditions.push(format!("city LIKE {placeholder}"));
    }

    if let Some(owner_id) = options.owner_id {
        let placeholder = params.push(owner_id);
        conditions.push(format!("owner_id = {placeholder}"));
    }

    if let Some(predicate) = price_predicate(options, params) {
        conditions.push(predicate);
    }

    conditions
}

fn price_predicate(options: &FilterOptions, params: &mut QueryParams) -> Option<String> {
    let mut minor = |major: &str| params.push(SqlValue::Numeric(scale_to_minor_units(major)));

    match (options.minimum_price(), options.maximum_price()) {
        (Some(min), Some(max)) => {
            let low = minor(min);
            let high = minor(max);
            Some(format!("cost_per_night BETWEEN {low} AND {high}"))
        }
        (Some(min), None) => Some(format!("cost_per_night >= {}", minor(min))),
        (None, Some(max)) => Some(format!("cost_per_night <= {}", minor(max))),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(text: &str) -> SqlValue {
        SqlValue::numeric(text)
    }

    #[test]
    fn test_no_options_has_no_where_or_having() {
        let query = PredicateCompiler::SUMMARY.compile(&FilterOptions::new(), None);
        assert_eq!(
            query.statement(),
            "SELECT properties.id, title, cost_per_night, thumbnail_photo_url, cover_photo_url, \
             avg(rating) AS average_rating FROM properties JOIN property_reviews \
             ON properties.id = property_reviews.property_id \
             GROUP BY properties.id, title, cost_per_night, thumbnail_photo_url, cover_photo_url \
             ORDER BY cost_per_night ASC LIMIT $1"
        );
        assert_eq!(query.parameters(), &[SqlValue::Integer(10)]);
    }

    #[test]
    fn test_both_price_bounds_use_between() {
        let options = FilterOptions::new()
            .with_minimum_price("50")
            .with_maximum_price("150");
        let query = PredicateCompiler::SUMMARY.compile(&options, None);

        assert!(query
            .statement()
            .contains("WHERE cost_per_night BETWEEN $1 AND $2 GROUP BY"));
        assert_eq!(
            query.parameters(),
            &[numeric("5000"), numeric("15000"), SqlValue::Integer(10)]
        );
    }

    #[test]
    fn test_single_price_bounds() {
        let minimum = PredicateCompiler::SUMMARY
            .compile(&FilterOptions::new().with_minimum_price("80"), None);
        assert!(minimum.statement().contains("WHERE cost_per_night >= $1"));
        assert_eq!(minimum.parameters()[0], numeric("8000"));

        let maximum = PredicateCompiler::SUMMARY
            .compile(&FilterOptions::new().with_maximum_price("200"), None);
        assert!(maximum.statement().contains("WHERE cost_per_night <= $1"));
        assert_eq!(maximum.parameters()[0], numeric("20000"));
    }

    #[test]
    fn test_city_only_with_limit() {
        let query = PredicateCompiler::SUMMARY
            .compile(&FilterOptions::new().with_city("Vancouver"), Some(5));
        assert!(query.statement().contains("WHERE city LIKE $1"));
        assert!(query.statement().ends_with("ORDER BY cost_per_night ASC LIMIT $2"));
        assert_eq!(
            query.parameters(),
            &[SqlValue::from("%Vancouver%"), SqlValue::Integer(5)]
        );
    }

    #[test]
    fn test_city_and_owner_keep_fixed_order() {
        let city_first = FilterOptions::new().with_city("Vancouver").with_owner(3);
        let owner_first = FilterOptions::new().with_owner(3).with_city("Vancouver");

        let query = PredicateCompiler::SUMMARY.compile(&city_first, None);
        assert!(query
            .statement()
            .contains("WHERE city LIKE $1 AND owner_id = $2"));
        assert_eq!(query, PredicateCompiler::SUMMARY.compile(&owner_first, None));
    }

    #[test]
    fn test_owner_without_city_starts_the_where_clause() {
        let query = PredicateCompiler::SUMMARY.compile(
            &FilterOptions::new().with_owner(9).with_maximum_price("90"),
            None,
        );
        assert!(query
            .statement()
            .contains("WHERE owner_id = $1 AND cost_per_night <= $2"));
    }

    #[test]
    fn test_rating_alone_is_a_having_predicate() {
        let query = PredicateCompiler::SUMMARY
            .compile(&FilterOptions::new().with_minimum_rating("4"), None);
        assert!(!query.statement().contains("WHERE"));
        assert!(query
            .statement()
            .contains("cover_photo_url HAVING avg(rating) >= $1 ORDER BY"));
        assert_eq!(query.parameters(), &[numeric("4"), SqlValue::Integer(10)]);
    }

    #[test]
    fn test_city_containing_where_does_not_change_joining() {
        let query = PredicateCompiler::SUMMARY.compile(
            &FilterOptions::new().with_city("WHERE").with_owner(1),
            None,
        );
        assert!(query
            .statement()
            .contains("WHERE city LIKE $1 AND owner_id = $2"));
        assert_eq!(query.parameters()[0], SqlValue::from("%WHERE%"));
    }

    #[test]
    fn test_detailed_columns_are_grouped() {
        let query = PredicateCompiler::DETAILED.compile(&FilterOptions::new(), None);
        assert!(query.statement().starts_with(
            "SELECT properties.id, title, cost_per_night, thumbnail_photo_url, cover_photo_url, \
             number_of_bedrooms, number_of_bathrooms, parking_spaces, avg(rating)"
        ));
        assert!(query.statement().contains(
            "GROUP BY properties.id, title, cost_per_night, thumbnail_photo_url, cover_photo_url, \
             number_of_bedrooms, number_of_bathrooms, parking_spaces ORDER BY"
        ));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let options = FilterOptions::new()
            .with_city("Toronto")
            .with_owner(2)
            .with_minimum_price("10")
            .with_minimum_rating("3");
        let first = PredicateCompiler::SUMMARY.compile(&options, Some(3));
        let second = PredicateCompiler::SUMMARY.compile(&options, Some(3));
        assert_eq!(first, second);
    }

    /// Every subset of the five filters
    fn all_combinations() -> Vec<FilterOptions> {
        (0_u8..32)
            .map(|mask| FilterOptions {
                city: (mask & 1 != 0).then(|| "Vancouver".to_owned()),
                owner_id: (mask & 2 != 0).then_some(4),
                minimum_price_per_night: (mask & 4 != 0).then(|| "50".to_owned()),
                maximum_price_per_night: (mask & 8 != 0).then(|| "150".to_owned()),
                minimum_rating: (mask & 16 != 0).then(|| "4".to_owned()),
            })
            .collect()
    }

    fn where_clause(statement: &str) -> Option<&str> {
        let start = statement.find(" WHERE ")?;
        let end = statement.find(" GROUP BY ")?;
        Some(&statement[start + " WHERE ".len()..end])
    }

    #[test]
    fn test_predicate_counts_for_all_combinations() {
        for options in all_combinations() {
            let query = PredicateCompiler::SUMMARY.compile(&options, Some(7));
            let statement = query.statement();

            let eligible = usize::from(options.city.is_some())
                + usize::from(options.owner_id.is_some())
                + usize::from(
                    options.minimum_price_per_night.is_some()
                        || options.maximum_price_per_night.is_some(),
                );
            let predicates = where_clause(statement).map_or(0, |clause| {
                clause.split(" AND ").count()
                    - usize::from(clause.contains("BETWEEN"))
            });
            assert_eq!(predicates, eligible, "{options:?}");
            assert_eq!(statement.matches(" WHERE ").count(), usize::from(eligible > 0));

            let having = statement.matches("HAVING").count();
            assert_eq!(having, usize::from(options.minimum_rating.is_some()), "{options:?}");
        }
    }

    #[test]
    fn test_placeholders_match_parameters_for_all_combinations() {
        for options in all_combinations() {
            let query = PredicateCompiler::SUMMARY.compile(&options, Some(7));
            let indices = query.placeholder_indices();

            let expected: Vec<usize> = (1..=query.parameters().len()).collect();
            assert_eq!(indices, expected, "{options:?}");

            let last = query.parameters().len();
            assert!(query.statement().ends_with(&format!("LIMIT ${last}")));
            assert_eq!(query.parameters().last(), Some(&SqlValue::Integer(7)));
        }
    }
}
