//! Output layer for the performance report.
//!
//! Formats averaged rows into the bordered text table printed on stdout.

pub mod table_view;

pub use report_core as core;
