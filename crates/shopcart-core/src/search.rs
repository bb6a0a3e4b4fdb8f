//! # Search and Aggregation
//!
//! Case-insensitive name search over the record store, folded per product.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  keyword "  tea "                                                       │
//! │     │ trim + lowercase                                                  │
//! │     ▼                                                                   │
//! │  "tea" ── empty? ──► CoreError::EmptyKeyword                            │
//! │     │                                                                   │
//! │     ▼  single pass over records, in insertion order                     │
//! │  Tea Set    ×1 Pick-up    ─┐                                            │
//! │  Teapot     ×2 Pick-up    ─┼─► rows keyed by code, first-seen order     │
//! │  Tea Set    ×4 Delivery   ─┘     Tea Set  qty 5  cost Σ line costs      │
//! │                                  Teapot   qty 2  cost Σ line costs      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  no rows? ──► SearchOutcome::NoMatches                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::codec::encode_aggregate_row;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PricingPolicy;
use crate::types::{PurchaseRecord, SearchAggregateRow};

/// Result of a search that passed keyword validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one record matched.
    Matches(SearchResults),
    /// Nothing matched. Not an error.
    NoMatches,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches)
    }

    /// Rows of a match, or an empty slice.
    pub fn rows(&self) -> &[SearchAggregateRow] {
        match self {
            SearchOutcome::Matches(results) => &results.rows,
            SearchOutcome::NoMatches => &[],
        }
    }
}

/// Aggregated rows and their grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// One row per product code, in first-match order.
    pub rows: Vec<SearchAggregateRow>,
    /// Sum of every row's aggregated cost.
    pub grand_total: Money,
}

impl SearchResults {
    /// Rows in wire form.
    pub fn encoded(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(encode_aggregate_row)
    }
}

/// Trims and case-folds a keyword, rejecting blank input.
pub fn normalize_keyword(keyword: &str) -> CoreResult<String> {
    let keyword = keyword.trim();

    if keyword.is_empty() {
        return Err(CoreError::EmptyKeyword);
    }

    Ok(keyword.to_lowercase())
}

/// Filters records by name substring and aggregates matches by code.
///
/// Each record contributes its own line cost, so one row can mix pick-up
/// and delivery purchases of the same product.
pub fn search<'a, I>(records: I, keyword: &str, pricing: &PricingPolicy) -> CoreResult<SearchOutcome>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let keyword = normalize_keyword(keyword)?;

    let mut rows: Vec<SearchAggregateRow> = Vec::new();
    let mut positions: HashMap<u32, usize> = HashMap::new();

    for record in records {
        if !record.name.to_lowercase().contains(&keyword) {
            continue;
        }

        let position = *positions.entry(record.code).or_insert_with(|| {
            rows.push(SearchAggregateRow::seed(record));
            rows.len() - 1
        });

        let row = &mut rows[position];
        row.aggregated_quantity += record.quantity;
        row.aggregated_cost += pricing.line_cost(record);
    }

    if rows.is_empty() {
        return Ok(SearchOutcome::NoMatches);
    }

    let grand_total = rows.iter().map(|row| row.aggregated_cost).sum();

    Ok(SearchOutcome::Matches(SearchResults { rows, grand_total }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::pricing;
    use crate::store::RecordStore;
    use crate::types::ShippingMethod;

    fn store(items: &[(i64, u32, ShippingMethod)]) -> RecordStore {
        let catalog = Catalog::standard().unwrap();
        let mut store = RecordStore::new();
        for &(code, quantity, method) in items {
            store.append(PurchaseRecord::from_product(
                catalog.lookup(code).unwrap(),
                quantity,
                method,
            ));
        }
        store
    }

    fn matches(outcome: SearchOutcome) -> SearchResults {
        match outcome {
            SearchOutcome::Matches(results) => results,
            SearchOutcome::NoMatches => panic!("expected matches"),
        }
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let store = store(&[(16, 1, ShippingMethod::PickUp)]);
        let policy = PricingPolicy::default();

        for keyword in ["", "   ", "\t\n"] {
            assert_eq!(
                search(&store, keyword, &policy),
                Err(CoreError::EmptyKeyword)
            );
        }
    }

    #[test]
    fn test_teapot_records_fold_into_one_row() {
        let store = store(&[(16, 2, ShippingMethod::PickUp), (16, 3, ShippingMethod::Delivery)]);
        let results = matches(search(&store, "Teapot", &PricingPolicy::default()).unwrap());

        assert_eq!(results.rows.len(), 1);
        let row = &results.rows[0];
        assert_eq!(row.code, 16);
        assert_eq!(row.aggregated_quantity, 5);

        let expected: Money = store.iter().map(pricing::line_cost).sum();
        assert_eq!(row.aggregated_cost, expected);
        // 59.90 + 98.835
        assert_eq!(row.aggregated_cost, Money::from_mills(158_735));
        assert_eq!(results.grand_total, expected);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let store = store(&[
            (2, 1, ShippingMethod::PickUp),  // Tea Set
            (16, 1, ShippingMethod::PickUp), // Teapot
            (8, 1, ShippingMethod::PickUp),  // Oven Glove
        ]);
        let results = matches(search(&store, "  TEA ", &PricingPolicy::default()).unwrap());

        let names: Vec<&str> = results.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Tea Set", "Teapot"]);
    }

    #[test]
    fn test_rows_follow_first_match_order() {
        let store = store(&[
            (30, 1, ShippingMethod::PickUp), // Steel Garlic Press
            (29, 1, ShippingMethod::PickUp), // Steel Cork Opener
            (30, 2, ShippingMethod::Delivery),
            (38, 1, ShippingMethod::PickUp), // Steel Pizza Pan
        ]);
        let results = matches(search(&store, "steel", &PricingPolicy::default()).unwrap());

        let codes: Vec<u32> = results.rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![30, 29, 38]);
        assert_eq!(results.rows[0].aggregated_quantity, 3);
    }

    #[test]
    fn test_grand_total_equals_total_of_matched_subset() {
        let store = store(&[
            (4, 2, ShippingMethod::Delivery),  // Knife Block Set
            (0, 3, ShippingMethod::Delivery),  // Salad Server Set
            (28, 1, ShippingMethod::PickUp),   // Knife Sharpener
        ]);
        let results = matches(search(&store, "knife", &PricingPolicy::default()).unwrap());

        let matched: Vec<&PurchaseRecord> =
            store.iter().filter(|r| r.name.contains("Knife")).collect();
        assert_eq!(results.grand_total, pricing::total(matched));
        assert_eq!(results.grand_total, Money::from_cents(22389 + 7995));
    }

    #[test]
    fn test_no_match_is_distinct_outcome() {
        let store = store(&[(16, 2, ShippingMethod::PickUp)]);
        let outcome = search(&store, "wok", &PricingPolicy::default()).unwrap();

        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert!(outcome.is_empty());
        assert!(outcome.rows().is_empty());

        let empty = RecordStore::new();
        assert_eq!(
            search(&empty, "tea", &PricingPolicy::default()).unwrap(),
            SearchOutcome::NoMatches
        );
    }

    #[test]
    fn test_encoded_rows() {
        let store = store(&[(4, 2, ShippingMethod::Delivery)]);
        let results = matches(search(&store, "block", &PricingPolicy::default()).unwrap());

        let lines: Vec<String> = results.encoded().collect();
        assert_eq!(lines, vec!["4/Knife Block Set/High/99.95/2/223.89"]);
    }
}
