//! # folio
//!
//! Reads a small JSON description of an investment portfolio (current asset
//! values and goal percentage allocations), computes per-asset allocations,
//! derives a single rebalancing suggestion, and presents the result as an
//! interactive terminal chart or a plain-text breakdown.
//!
//! ## Quick Start
//!
//! ```
//! use folio::portfolio::PortfolioSpec;
//! use folio::{advisor, allocation};
//!
//! let spec = PortfolioSpec::from_json(
//!     r#"{
//!         "current_value":   { "VTI": 7000.0, "BND": 3000.0 },
//!         "goal_percentage": { "VTI": 60,     "BND": 40 }
//!     }"#,
//!     0.05,
//! ).unwrap();
//!
//! let report = allocation::allocate(&spec).unwrap();
//! let suggestion = advisor::suggest(&report);
//! assert_eq!(format!("{suggestion}"), "Decrease VTI allocation by 10.00%.");
//! ```
//!
//! ## Input Format
//!
//! ```json
//! {
//!     "as_of": "2026-08-01T00:00:00Z",
//!     "current_value":   { "VTI": 5000.0, "BND": 1500.0 },
//!     "goal_percentage": { "VTI": 70,     "BND": 30 }
//! }
//! ```
//!
//! `as_of` is optional. Goal percentages must sum to 100 within a
//! configurable tolerance; assets named only in `goal_percentage` count as
//! held at value 0.

pub mod advisor;
pub mod allocation;
pub mod commands;
pub mod config;
pub mod error;
pub mod portfolio;
pub mod tui;
