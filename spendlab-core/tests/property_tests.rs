//! Property tests for the statistics kernel and year filter.
//!
//! Uses proptest to verify:
//! 1. Fit recovery — a perfectly linear series returns its own line
//! 2. Correlation bounds — pearson_r stays in [-1, 1], r² in [0, 1]
//! 3. Filter containment — filtered rows always lie inside the range

use proptest::prelude::*;
use spendlab_core::dataset::{Dataset, YearRecord};
use spendlab_core::stats::{linear_fit, pearson_r, RegressionSummary};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_slope() -> impl Strategy<Value = f64> {
    (-500.0..500.0_f64).prop_filter("non-flat line", |s| s.abs() > 0.01)
}

fn arb_intercept() -> impl Strategy<Value = f64> {
    -100_000.0..100_000.0_f64
}

fn arb_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0..1_000.0_f64, 2..64)
}

fn arb_records() -> impl Strategy<Value = Vec<YearRecord>> {
    prop::collection::btree_set(1990..2050_i32, 1..40).prop_map(|years| {
        years
            .into_iter()
            .map(|year| YearRecord {
                label: year.to_string(),
                year,
                spending: 280_000.0 + year as f64,
                cpi: 100.0,
            })
            .collect()
    })
}

// ── 1. Fit recovery ──────────────────────────────────────────────────

proptest! {
    /// A perfectly linear series returns its own slope and intercept.
    #[test]
    fn fit_recovers_exact_line(
        slope in arb_slope(),
        intercept in arb_intercept(),
        n in 2..50_usize,
    ) {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| slope * v + intercept).collect();

        let fit = linear_fit(&x, &y).unwrap();
        prop_assert!((fit.slope - slope).abs() < 1e-6 * slope.abs().max(1.0));
        prop_assert!((fit.intercept - intercept).abs() < 1e-5 * intercept.abs().max(1.0));

        // Perfect fit: |r| = 1 up to rounding
        let r = pearson_r(&x, &y);
        prop_assert!((r.abs() - 1.0).abs() < 1e-9);
        prop_assert_eq!(r > 0.0, slope > 0.0);
    }
}

// ── 2. Correlation bounds ────────────────────────────────────────────

proptest! {
    /// pearson_r never leaves [-1, 1]; r² never leaves [0, 1].
    #[test]
    fn correlation_stays_bounded(x in arb_series(), y in arb_series()) {
        let n = x.len().min(y.len());
        let r = pearson_r(&x[..n], &y[..n]);
        prop_assert!((-1.0..=1.0).contains(&r));

        if let Some(summary) = RegressionSummary::compute(&x[..n], &y[..n]) {
            prop_assert!((0.0..=1.0).contains(&summary.r_squared));
            prop_assert_eq!(summary.n, n);
        }
    }
}

// ── 3. Filter containment ────────────────────────────────────────────

proptest! {
    /// Every filtered row lies inside [lo, hi]; the filter never grows the set.
    #[test]
    fn filter_rows_stay_in_range(
        records in arb_records(),
        lo in 1985..2055_i32,
        span in 0..70_i32,
    ) {
        let total = records.len();
        let ds = Dataset::new(records);
        let hi = lo + span;

        let filtered = ds.filter_years(lo, hi);
        prop_assert!(filtered.len() <= total);
        for r in &filtered {
            prop_assert!(r.year >= lo && r.year <= hi);
        }

        // Filtering by the dataset's own bounds returns everything.
        if let (Some(min), Some(max)) = (ds.min_year(), ds.max_year()) {
            prop_assert_eq!(ds.filter_years(min, max).len(), total);
        }
    }
}
