//! Data ingestion layer for the performance report.
//!
//! Reads CSV files into per-position value lists and reduces them to
//! sorted averages.

pub mod aggregator;
pub mod reader;

pub use report_core as core;
