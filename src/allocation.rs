//! Allocation math: current percentages, goal comparison, drift.
//!
//! Everything here is recomputed from the loaded portfolio on each run;
//! nothing is persisted.

use crate::error::{Error, Result};
use crate::portfolio::PortfolioSpec;

/// Per-asset allocation breakdown plus portfolio-level totals.
#[derive(Debug, Clone)]
pub struct AllocationReport {
    pub entries: Vec<AllocationEntry>,
    pub total_value: f64,
    /// RMS of the per-asset goal-vs-current differences, in percentage
    /// points. 0 means the portfolio sits exactly on its goals.
    pub drift_pct: f64,
}

/// One asset's allocation entry.
#[derive(Debug, Clone)]
pub struct AllocationEntry {
    pub asset: String,
    pub value: f64,
    pub current_pct: f64,
    pub goal_pct: f64,
    /// goal - current, in percentage points.
    pub diff_pct: f64,
    /// The value this asset would hold at its goal percentage.
    pub goal_value: f64,
}

/// Compute each asset's share of the total and its distance from goal.
///
/// Fails if the total current value is zero.
pub fn allocate(spec: &PortfolioSpec) -> Result<AllocationReport> {
    let total = spec.total_value();
    if total <= 0.0 {
        return Err(Error::Allocation("total portfolio value is zero".into()));
    }

    let mut entries = Vec::with_capacity(spec.holdings.len());
    let mut sum_sq_diff = 0.0_f64;

    for h in &spec.holdings {
        let current_pct = h.value / total * 100.0;
        let diff_pct = h.goal_pct - current_pct;
        sum_sq_diff += diff_pct * diff_pct;

        entries.push(AllocationEntry {
            asset: h.name.clone(),
            value: h.value,
            current_pct,
            goal_pct: h.goal_pct,
            diff_pct,
            goal_value: h.goal_pct / 100.0 * total,
        });
    }

    let drift_pct = (sum_sq_diff / entries.len() as f64).sqrt();

    Ok(AllocationReport {
        entries,
        total_value: total,
        drift_pct,
    })
}

impl AllocationReport {
    /// Look up an entry by asset name.
    pub fn entry(&self, asset: &str) -> Option<&AllocationEntry> {
        self.entries.iter().find(|e| e.asset == asset)
    }

    /// Sum of goal percentages across entries.
    pub fn goal_sum(&self) -> f64 {
        self.entries.iter().map(|e| e.goal_pct).sum()
    }
}

impl std::fmt::Display for AllocationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ALLOCATION:")?;
        writeln!(
            f,
            "  {:12} {:>12} {:>10} {:>10} {:>10}",
            "Asset", "Value", "Current%", "Goal%", "Diff%"
        )?;
        for e in &self.entries {
            writeln!(
                f,
                "  {:12} {:>12.2} {:>9.2}% {:>9.2}% {:>+9.2}%",
                e.asset, e.value, e.current_pct, e.goal_pct, e.diff_pct
            )?;
        }
        writeln!(f, "\n  Total value: {:.2}", self.total_value)?;
        writeln!(f, "  Drift: {:.3}%", self.drift_pct)?;
        Ok(())
    }
}
