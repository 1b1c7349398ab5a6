//! Household energy/carbon footprint estimator.

pub mod comparison;
pub mod config;
/// Pure estimation core: input record, rate tables, and the estimate.
pub mod estimator;
pub mod io;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;
