//! Rebalancing suggestion: the single largest allocation gap.

use crate::allocation::{AllocationEntry, AllocationReport};

/// The suggested adjustment for the asset furthest from its goal.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    Increase { asset: String, by_pct: f64 },
    Decrease { asset: String, by_pct: f64 },
    OnTrack,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suggestion::Increase { asset, by_pct } => {
                write!(f, "Increase {asset} allocation by {by_pct:.2}%.")
            }
            Suggestion::Decrease { asset, by_pct } => {
                write!(f, "Decrease {asset} allocation by {by_pct:.2}%.")
            }
            Suggestion::OnTrack => write!(f, "Asset allocation is on track with the goal."),
        }
    }
}

/// Pick the asset with the largest absolute goal-vs-current difference.
///
/// Ties go to the first asset in holding order (strict `>` while scanning).
pub fn suggest(report: &AllocationReport) -> Suggestion {
    let mut best: Option<&AllocationEntry> = None;
    for entry in &report.entries {
        let replace = match best {
            Some(b) => entry.diff_pct.abs() > b.diff_pct.abs(),
            None => true,
        };
        if replace {
            best = Some(entry);
        }
    }

    match best {
        Some(e) if e.diff_pct > 0.0 => Suggestion::Increase {
            asset: e.asset.clone(),
            by_pct: e.diff_pct.abs(),
        },
        Some(e) if e.diff_pct < 0.0 => Suggestion::Decrease {
            asset: e.asset.clone(),
            by_pct: e.diff_pct.abs(),
        },
        _ => Suggestion::OnTrack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate;
    use crate::portfolio::PortfolioSpec;

    fn report(json: &str) -> AllocationReport {
        let spec = PortfolioSpec::from_json(json, 0.05).unwrap();
        allocate(&spec).unwrap()
    }

    #[test]
    fn suggests_increase_for_largest_underweight() {
        let r = report(
            r#"{
                "current_value":   { "VTI": 5000.0, "VXUS": 3000.0, "BND": 2000.0 },
                "goal_percentage": { "VTI": 58, "VXUS": 25, "BND": 17 }
            }"#,
        );
        // Gaps: VTI +8, VXUS -5, BND -3.
        assert_eq!(
            suggest(&r),
            Suggestion::Increase {
                asset: "VTI".into(),
                by_pct: 8.0
            }
        );
    }

    #[test]
    fn suggests_decrease_for_largest_overweight() {
        let r = report(
            r#"{
                "current_value":   { "VTI": 5000.0, "VXUS": 3000.0, "BND": 2000.0 },
                "goal_percentage": { "VTI": 42, "VXUS": 33, "BND": 25 }
            }"#,
        );
        // Gaps: VTI -8, VXUS +3, BND +5.
        assert_eq!(
            suggest(&r),
            Suggestion::Decrease {
                asset: "VTI".into(),
                by_pct: 8.0
            }
        );
    }

    #[test]
    fn tie_goes_to_first_asset() {
        let r = report(
            r#"{
                "current_value":   { "VTI": 8000.0, "BND": 2000.0 },
                "goal_percentage": { "VTI": 70, "BND": 30 }
            }"#,
        );
        // In a two-asset portfolio the gaps always mirror each other:
        // VTI -10, BND +10. First in file order wins.
        assert_eq!(
            suggest(&r),
            Suggestion::Decrease {
                asset: "VTI".into(),
                by_pct: 10.0
            }
        );
    }

    #[test]
    fn on_track_when_exact() {
        let r = report(
            r#"{
                "current_value":   { "VTI": 600.0, "BND": 400.0 },
                "goal_percentage": { "VTI": 60, "BND": 40 }
            }"#,
        );
        assert_eq!(suggest(&r), Suggestion::OnTrack);
    }

    #[test]
    fn goal_only_asset_can_win() {
        let r = report(
            r#"{
                "current_value":   { "VTI": 1000.0 },
                "goal_percentage": { "VTI": 55, "BND": 45 }
            }"#,
        );
        // VTI: 100 current vs 55 goal = -45. BND: 0 current vs 45 goal = +45.
        // Tie on |45|; VTI is first in holding order.
        assert_eq!(
            suggest(&r),
            Suggestion::Decrease {
                asset: "VTI".into(),
                by_pct: 45.0
            }
        );
    }

    #[test]
    fn display_phrasing() {
        let inc = Suggestion::Increase {
            asset: "BND".into(),
            by_pct: 4.2,
        };
        assert_eq!(format!("{inc}"), "Increase BND allocation by 4.20%.");

        let dec = Suggestion::Decrease {
            asset: "VTI".into(),
            by_pct: 1.0,
        };
        assert_eq!(format!("{dec}"), "Decrease VTI allocation by 1.00%.");

        assert_eq!(
            format!("{}", Suggestion::OnTrack),
            "Asset allocation is on track with the goal."
        );
    }
}
