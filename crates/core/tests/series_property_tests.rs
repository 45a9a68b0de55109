//! Property-based tests for series alignment and indexing.
//!
//! These tests check the alignment and indexing laws over random inputs
//! using the `proptest` crate.

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};
use tickerboard_core::series::{align, normalize, INDEX_BASE};
use tickerboard_market_data::TimeSeries;

// =============================================================================
// Generators
// =============================================================================

/// Generates a date label within a small window so label sets overlap often.
fn arb_label() -> impl Strategy<Value = String> {
    (1u32..=3, 1u32..=28).prop_map(|(month, day)| format!("2025-{:02}-{:02}", month, day))
}

/// Generates a series as a label -> value map (unique labels).
fn arb_source() -> impl Strategy<Value = BTreeMap<String, f64>> {
    proptest::collection::btree_map(arb_label(), 1.0f64..10_000.0, 0..40)
}

/// Generates target labels, possibly with repeats and in any order.
fn arb_targets() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_label(), 0..40)
}

/// Generates a price-like series with a nonzero head.
fn arb_prices() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.01f64..100_000.0, 1..60)
}

fn to_series(source: &BTreeMap<String, f64>) -> TimeSeries {
    TimeSeries::from_pairs(source.keys().cloned(), source.values().map(|v| Some(*v)))
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Alignment yields one slot per target label.
    #[test]
    fn prop_align_preserves_target_length(
        targets in arb_targets(),
        source in arb_source()
    ) {
        let aligned = align(&targets, &to_series(&source));
        prop_assert_eq!(aligned.len(), targets.len());
    }

    /// Present labels carry the source value, absent labels carry the gap.
    #[test]
    fn prop_align_slots_match_source(
        targets in arb_targets(),
        source in arb_source()
    ) {
        let aligned = align(&targets, &to_series(&source));
        for (label, slot) in targets.iter().zip(aligned.iter()) {
            prop_assert_eq!(*slot, source.get(label).copied());
        }
    }

    /// Dropping gaps after alignment leaves exactly the source bars whose
    /// labels are in the target set.
    #[test]
    fn prop_align_then_filter_is_intersection(
        targets in arb_targets(),
        source in arb_source()
    ) {
        let unique: Vec<String> = {
            let mut seen = HashSet::new();
            let mut sorted = targets.clone();
            sorted.sort();
            sorted.into_iter().filter(|l| seen.insert(l.clone())).collect()
        };
        let aligned = align(&unique, &to_series(&source));

        let kept: Vec<(String, f64)> = unique
            .iter()
            .zip(aligned.iter())
            .filter_map(|(label, slot)| slot.map(|v| (label.clone(), v)))
            .collect();
        let expected: Vec<(String, f64)> = source
            .iter()
            .filter(|(label, _)| unique.contains(label))
            .map(|(label, v)| (label.clone(), *v))
            .collect();

        prop_assert_eq!(kept, expected);
    }

    /// The first indexed value is always the base.
    #[test]
    fn prop_normalize_starts_at_base(prices in arb_prices()) {
        let indexed = normalize(&prices).unwrap();
        prop_assert_eq!(indexed.len(), prices.len());
        prop_assert_eq!(indexed[0], INDEX_BASE);
    }

    /// Scaling the input does not change the indexed series.
    #[test]
    fn prop_normalize_is_scale_invariant(
        prices in arb_prices(),
        k in prop_oneof![0.001f64..1000.0, -1000.0f64..-0.001]
    ) {
        let plain = normalize(&prices).unwrap();
        let scaled_input: Vec<f64> = prices.iter().map(|v| v * k).collect();
        let scaled = normalize(&scaled_input).unwrap();

        for (a, b) in plain.iter().zip(scaled.iter()) {
            prop_assert!(approx_eq(*a, *b), "{} != {} (k = {})", a, b, k);
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn align_fills_missing_day() {
    let targets = ["2025-01-01", "2025-01-02", "2025-01-03"];
    let source = TimeSeries::from_pairs(["2025-01-01", "2025-01-03"], [Some(10.0), Some(12.0)]);
    assert_eq!(align(&targets, &source), vec![Some(10.0), None, Some(12.0)]);
}

#[test]
fn normalize_rebases_to_one_hundred() {
    assert_eq!(normalize(&[50.0, 75.0, 100.0]).unwrap(), vec![100.0, 150.0, 200.0]);
}
