//! Plain-text report table.
//!
//! Renders averaged rows as a bordered ASCII table:
//!
//! ```text
//! +----------+---------------------+
//! | Position | Average performance |
//! +==========+=====================+
//! | QA       |                3.00 |
//! | DEV      |                1.50 |
//! +----------+---------------------+
//! ```

use std::io::{self, Write};

use report_core::formatting;
use report_core::models::AveragedRow;

/// Header of the position column.
pub const POSITION_HEADER: &str = "Position";
/// Header of the average column.
pub const AVERAGE_HEADER: &str = "Average performance";
/// Printed instead of a table when there is nothing to show.
pub const NO_DATA_MESSAGE: &str = "No data to build the report.";

/// Column widths, measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnWidths {
    position: usize,
    average: usize,
}

impl ColumnWidths {
    fn measure(cells: &[(&str, String)]) -> Self {
        let position = cells
            .iter()
            .map(|(position, _)| text_len(position))
            .fold(text_len(POSITION_HEADER), usize::max);
        let average = cells
            .iter()
            .map(|(_, average)| text_len(average))
            .fold(text_len(AVERAGE_HEADER), usize::max);
        Self { position, average }
    }

    fn border(&self, fill: char) -> String {
        let left: String = std::iter::repeat(fill).take(self.position + 2).collect();
        let right: String = std::iter::repeat(fill).take(self.average + 2).collect();
        format!("+{left}+{right}+")
    }

    fn row(&self, position: &str, average: &str) -> String {
        format!(
            "| {} | {} |",
            pad_right(position, self.position),
            pad_left(average, self.average)
        )
    }
}

/// Render `rows` as a table, or the no-data message when `rows` is empty.
///
/// Every line, including the last, ends with `\n`.
pub fn render_table(rows: &[AveragedRow]) -> String {
    if rows.is_empty() {
        return format!("{NO_DATA_MESSAGE}\n");
    }

    let cells: Vec<(&str, String)> = rows
        .iter()
        .map(|row| {
            (
                row.position.as_str(),
                formatting::format_average(row.average),
            )
        })
        .collect();
    let widths = ColumnWidths::measure(&cells);

    let mut lines = Vec::with_capacity(cells.len() + 4);
    lines.push(widths.border('-'));
    lines.push(widths.row(POSITION_HEADER, AVERAGE_HEADER));
    lines.push(widths.border('='));
    for (position, average) in &cells {
        lines.push(widths.row(position, average));
    }
    lines.push(widths.border('-'));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write the rendered table to `out`.
pub fn print_table<W: Write>(rows: &[AveragedRow], out: &mut W) -> io::Result<()> {
    out.write_all(render_table(rows).as_bytes())?;
    out.flush()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Length of `text` in characters.
fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Left-justify `text` in a field of `width` characters.
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text_len(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Right-justify `text` in a field of `width` characters.
fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text_len(text));
    format!("{}{text}", " ".repeat(fill))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
