//! Subcommand orchestration: load, compute, present.

use std::path::Path;

use log::info;

use crate::advisor::{self, Suggestion};
use crate::allocation::{self, AllocationReport};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::portfolio::PortfolioSpec;
use crate::tui;

/// Load the portfolio and derive everything the presenters need.
fn load_report(
    config: &Config,
    portfolio: &Path,
) -> Result<(PortfolioSpec, AllocationReport, Suggestion)> {
    let spec = PortfolioSpec::load(portfolio, config.validation.goal_sum_tolerance)?;
    let report = allocation::allocate(&spec)?;
    let suggestion = advisor::suggest(&report);
    info!(
        "loaded {} assets, total value {:.2}",
        report.entries.len(),
        report.total_value
    );
    Ok((spec, report, suggestion))
}

/// Open the interactive allocation view.
pub fn show(config: &Config, portfolio: &Path) -> Result<()> {
    let (spec, report, suggestion) = load_report(config, portfolio)?;
    tui::run(&report, &suggestion, spec.as_of, &config.display)
        .map_err(|e| Error::Terminal(e.to_string()))
}

/// Print the breakdown table and suggestion to stdout.
pub fn report(config: &Config, portfolio: &Path) -> Result<()> {
    let (spec, report, suggestion) = load_report(config, portfolio)?;
    if let Some(as_of) = spec.as_of {
        println!("Portfolio as of {}", as_of.format("%Y-%m-%d %H:%M UTC"));
    }
    print!("{report}");
    println!("\nSuggestion: {suggestion}");
    Ok(())
}

/// Print only the rebalancing suggestion.
pub fn suggest(config: &Config, portfolio: &Path) -> Result<()> {
    let (_, _, suggestion) = load_report(config, portfolio)?;
    println!("{suggestion}");
    Ok(())
}

/// Validate the portfolio file and print a one-line summary.
pub fn check(config: &Config, portfolio: &Path) -> Result<()> {
    let spec = PortfolioSpec::load(portfolio, config.validation.goal_sum_tolerance)?;
    println!(
        "OK: {} assets, total value {:.2}, goal sum {:.2}",
        spec.holdings.len(),
        spec.total_value(),
        spec.goal_sum()
    );
    Ok(())
}
