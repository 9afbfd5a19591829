//! Portfolio file (investments.json) loading and validation.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A validated portfolio: holdings in file order.
#[derive(Debug, Clone)]
pub struct PortfolioSpec {
    pub as_of: Option<DateTime<Utc>>,
    pub holdings: Vec<Holding>,
}

/// A single holding: current value plus goal allocation.
#[derive(Debug, Clone)]
pub struct Holding {
    pub name: String,
    pub value: f64,
    pub goal_pct: f64,
}

/// Wire format of the portfolio file.
///
/// `current_value` and `goal_percentage` are JSON objects keyed by asset
/// name; the key sets may differ (see `from_raw` for the union rules).
#[derive(Debug, Deserialize)]
struct RawSpec {
    #[serde(default)]
    as_of: Option<DateTime<Utc>>,
    current_value: Map<String, Value>,
    #[serde(default)]
    goal_percentage: Map<String, Value>,
}

impl PortfolioSpec {
    /// Load and validate a portfolio JSON file.
    pub fn load(path: &Path, goal_sum_tolerance: f64) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::PortfolioRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents, goal_sum_tolerance)
    }

    /// Parse from a JSON string (useful for testing).
    pub fn from_json(json: &str, goal_sum_tolerance: f64) -> Result<Self> {
        let raw: RawSpec = serde_json::from_str(json)?;
        let spec = Self::from_raw(raw)?;
        spec.validate(goal_sum_tolerance)?;
        Ok(spec)
    }

    /// Build the holding list from the two wire maps.
    ///
    /// Valued assets come first, in file order. An asset missing from
    /// `goal_percentage` gets goal 0; an asset present only in
    /// `goal_percentage` is appended with current value 0 so it still
    /// participates in the sum-to-100 check and the advisor.
    fn from_raw(raw: RawSpec) -> Result<Self> {
        let mut holdings = Vec::with_capacity(raw.current_value.len());
        for (name, value) in &raw.current_value {
            let value = as_number(value).ok_or_else(|| {
                Error::Portfolio(format!("current value for {name} is not a number"))
            })?;
            let goal_pct = match raw.goal_percentage.get(name) {
                Some(v) => as_number(v).ok_or_else(|| {
                    Error::Portfolio(format!("goal percentage for {name} is not a number"))
                })?,
                None => 0.0,
            };
            holdings.push(Holding {
                name: name.clone(),
                value,
                goal_pct,
            });
        }

        for (name, v) in &raw.goal_percentage {
            if raw.current_value.contains_key(name) {
                continue;
            }
            let goal_pct = as_number(v).ok_or_else(|| {
                Error::Portfolio(format!("goal percentage for {name} is not a number"))
            })?;
            holdings.push(Holding {
                name: name.clone(),
                value: 0.0,
                goal_pct,
            });
        }

        Ok(Self {
            as_of: raw.as_of,
            holdings,
        })
    }

    /// Validate the portfolio invariants.
    fn validate(&self, goal_sum_tolerance: f64) -> Result<()> {
        if self.holdings.is_empty() {
            return Err(Error::Portfolio("portfolio is empty".into()));
        }

        for h in &self.holdings {
            if h.name.is_empty() {
                return Err(Error::Portfolio("empty asset name".into()));
            }
            if h.value < 0.0 {
                return Err(Error::Portfolio(format!(
                    "current value for {} ({}) must be non-negative",
                    h.name, h.value
                )));
            }
            if !(0.0..=100.0).contains(&h.goal_pct) {
                return Err(Error::Portfolio(format!(
                    "goal percentage for {} ({}) must be in [0, 100]",
                    h.name, h.goal_pct
                )));
            }
        }

        let goal_sum = self.goal_sum();
        if (goal_sum - 100.0).abs() > goal_sum_tolerance {
            return Err(Error::Portfolio(format!(
                "goal percentages sum to {goal_sum:.2}, expected 100"
            )));
        }

        Ok(())
    }

    /// Sum of all goal percentages.
    pub fn goal_sum(&self) -> f64 {
        self.holdings.iter().map(|h| h.goal_pct).sum()
    }

    /// Sum of all current values.
    pub fn total_value(&self) -> f64 {
        self.holdings.iter().map(|h| h.value).sum()
    }
}

/// Extract a finite number from a JSON value.
fn as_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}
