//! Shared building blocks for the performance report.
//!
//! Holds the error taxonomy, command-line settings, the data model passed
//! between pipeline stages and number formatting.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
