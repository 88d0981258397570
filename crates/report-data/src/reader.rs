//! CSV loading for the performance report.
//!
//! Reads `position` / `performance` pairs from CSV files with a header row
//! and groups the numeric scores by position.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use report_core::error::{ReportError, Result};
use report_core::models::{PerformanceRecord, PositionStats};
use tracing::{debug, trace};

/// Header of the column holding the position name.
pub const POSITION_COLUMN: &str = "position";
/// Header of the column holding the numeric score.
pub const PERFORMANCE_COLUMN: &str = "performance";

// ── Public API ────────────────────────────────────────────────────────────────

/// Collect performance values from `files`, grouped by position.
///
/// Files are read in the given order. The first path that does not exist
/// aborts the whole collection with [`ReportError::FileNotFound`]; no partial
/// result is returned. Rows with an empty position or an empty score are
/// skipped. A row whose score is not numeric contributes no value, but its
/// position is still registered, so it keeps its place in the ordering.
pub fn collect_performance<P: AsRef<Path>>(files: &[P]) -> Result<PositionStats> {
    let mut stats = PositionStats::new();

    for file_path in files {
        visit_rows(file_path.as_ref(), |position, performance| match performance {
            Some(performance) => stats.add_record(PerformanceRecord {
                position: position.to_string(),
                performance,
            }),
            None => {
                stats.entry(position);
            }
        })?;
    }

    debug!(
        "Collected {} values for {} positions from {} files",
        stats.total_values(),
        stats.len(),
        files.len()
    );

    Ok(stats)
}

/// Parse a performance score.
///
/// Accepts what a decimal float literal looks like in the input data:
/// an optional sign, digits with an optional fraction and exponent,
/// `inf`/`nan` spellings, and single `_` separators between digits.
/// Returns `None` for anything else.
pub fn parse_performance(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.contains('_') {
        return strip_digit_separators(raw)?.parse().ok();
    }
    raw.parse().ok()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Index of the column named `name`; the last one wins on duplicate headers.
fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == name)
        .map(|(idx, _)| idx)
        .last()
}

/// Field `idx` of `row`, or `""` when the column or the cell is missing.
fn field(row: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i)).unwrap_or("")
}

/// Stream the rows of `file_path` into `on_row`.
///
/// `on_row` receives the trimmed position and the parsed score, or `None`
/// when the score is not numeric. Rows with a blank position or score are
/// not passed on at all.
fn visit_rows(file_path: &Path, mut on_row: impl FnMut(&str, Option<f64>)) -> Result<()> {
    if !file_path.exists() {
        return Err(ReportError::FileNotFound(file_path.to_path_buf()));
    }

    let file = File::open(file_path).map_err(|source| ReportError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;

    let csv_error = |source: csv::Error| ReportError::Csv {
        path: file_path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let position_idx = column_index(&headers, POSITION_COLUMN);
    let performance_idx = column_index(&headers, PERFORMANCE_COLUMN);

    let mut rows_read = 0u64;
    let mut rows_accepted = 0u64;

    for result in reader.records() {
        let row = result.map_err(csv_error)?;
        rows_read += 1;

        let position = field(&row, position_idx).trim();
        let performance_raw = field(&row, performance_idx).trim();
        if position.is_empty() || performance_raw.is_empty() {
            trace!("Skipping blank row {} in {}", rows_read, file_path.display());
            continue;
        }

        let performance = parse_performance(performance_raw);
        match performance {
            Some(_) => rows_accepted += 1,
            None => trace!(
                "Skipping non-numeric performance {:?} in row {} of {}",
                performance_raw,
                rows_read,
                file_path.display()
            ),
        }
        on_row(position, performance);
    }

    debug!(
        "File {}: {} rows read, {} accepted",
        file_path.display(),
        rows_read,
        rows_accepted
    );

    Ok(())
}

/// Remove `_` separators, each of which must sit between two ASCII digits.
fn strip_digit_separators(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(raw.replace('_', ""))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
