use std::io::Write;
use std::path::PathBuf;

use report_core::error::{ReportError, Result};
use report_core::settings::{ReportKind, Settings};
use report_data::aggregator::calculate_averages;
use report_data::reader::collect_performance;
use report_ui::table_view::print_table;

/// Process exit code for a printed report, including the no-data case.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code for a missing file or any other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Build the report for `settings` and write it to `out`.
///
/// Failures are reported on `out` as a single message and no table is
/// printed. Returns the process exit code.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> u8 {
    if let ReportKind::Unknown(name) = settings.report_kind() {
        tracing::warn!(
            "Unknown report '{}', building the performance report instead",
            name
        );
    }

    match build_performance_report(&settings.files, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            tracing::debug!("Report failed: {:?}", err);
            if let Err(write_err) = writeln!(out, "{}", failure_message(&err)) {
                tracing::error!("Failed to write error message: {}", write_err);
            }
            EXIT_FAILURE
        }
    }
}

/// User-facing text for a failed run.
///
/// A missing input file is reported on its own; everything else is wrapped
/// as a generic report failure.
pub fn failure_message(err: &ReportError) -> String {
    if err.is_file_not_found() {
        err.to_string()
    } else {
        format!("Error generating report: {}", err)
    }
}

fn build_performance_report<W: Write>(files: &[PathBuf], out: &mut W) -> Result<()> {
    let stats = collect_performance(files)?;
    let rows = calculate_averages(stats);
    tracing::info!("Report has {} positions", rows.len());
    print_table(&rows, out)?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
