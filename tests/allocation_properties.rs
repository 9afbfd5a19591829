//! Property-based tests for allocation invariants.

use folio::advisor::{self, Suggestion};
use folio::allocation;
use folio::portfolio::PortfolioSpec;
use proptest::prelude::*;

/// Build a portfolio with the given values and an even goal split.
fn spec_from_values(values: &[f64]) -> PortfolioSpec {
    let goal = 100.0 / values.len() as f64;
    let mut current = serde_json::Map::new();
    let mut goals = serde_json::Map::new();
    for (i, v) in values.iter().enumerate() {
        let name = format!("A{i}");
        current.insert(name.clone(), (*v).into());
        goals.insert(name, goal.into());
    }
    let doc = serde_json::json!({
        "current_value": current,
        "goal_percentage": goals,
    });
    // Loose tolerance: an even split of 100/n does not always sum to
    // exactly 100 in floating point.
    PortfolioSpec::from_json(&doc.to_string(), 0.5).unwrap()
}

fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..1_000_000.0, 1..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Computed percentages always sum to 100.
    #[test]
    fn percentages_sum_to_100(values in values_strategy()) {
        let spec = spec_from_values(&values);
        let report = allocation::allocate(&spec).unwrap();

        let sum: f64 = report.entries.iter().map(|e| e.current_pct).sum();
        prop_assert!((sum - 100.0).abs() < 1e-6, "percentages sum to {sum}");
    }

    /// The advisor always names an asset with the maximum absolute gap.
    #[test]
    fn advisor_names_largest_gap(values in values_strategy()) {
        let spec = spec_from_values(&values);
        let report = allocation::allocate(&spec).unwrap();

        let max_gap = report
            .entries
            .iter()
            .map(|e| e.diff_pct.abs())
            .fold(0.0_f64, f64::max);

        match advisor::suggest(&report) {
            Suggestion::OnTrack => prop_assert!(max_gap == 0.0),
            Suggestion::Increase { asset, by_pct } | Suggestion::Decrease { asset, by_pct } => {
                let entry = report.entry(&asset).unwrap();
                prop_assert!((entry.diff_pct.abs() - max_gap).abs() < 1e-12);
                prop_assert!((by_pct - max_gap).abs() < 1e-12);
            }
        }
    }

    /// Drift is bounded by the largest single gap.
    #[test]
    fn drift_bounded_by_max_gap(values in values_strategy()) {
        let spec = spec_from_values(&values);
        let report = allocation::allocate(&spec).unwrap();

        let max_gap = report
            .entries
            .iter()
            .map(|e| e.diff_pct.abs())
            .fold(0.0_f64, f64::max);
        prop_assert!(report.drift_pct <= max_gap + 1e-9);
    }
}
