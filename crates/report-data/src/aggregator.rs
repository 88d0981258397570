//! Per-position averaging for the performance report.

use std::cmp::Ordering;

use report_core::models::{AveragedRow, PositionStats};

/// Arithmetic mean of `values`, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Turn grouped values into `(position, average)` rows, best first.
///
/// Positions without values produce no row. The sort is stable, so equal
/// averages keep the order in which their positions were first collected.
/// NaN averages go last, in collection order.
pub fn calculate_averages(stats: PositionStats) -> Vec<AveragedRow> {
    let mut rows: Vec<AveragedRow> = stats
        .into_iter()
        .filter_map(|(position, values)| {
            mean(&values).map(|average| AveragedRow { position, average })
        })
        .collect();

    rows.sort_by(|a, b| descending(a.average, b.average));
    rows
}

/// Total order: larger first, NaN after every number, NaNs equal.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
