//! Interactive terminal view: dual donut chart, breakdown table, suggestion.

mod app;
mod chart;

pub use app::run;
