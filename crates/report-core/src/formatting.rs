/// Format `value` with a fixed number of decimal places.
///
/// Rounding follows Rust's float formatting: the exact binary value is
/// rounded to the nearest representable decimal and exact ties go to the
/// even digit.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(3.14159, 2), "3.14");
/// assert_eq!(format_decimal(1.5, 0), "2");
/// assert_eq!(format_decimal(-0.5, 1), "-0.5");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format an average performance score as shown in the report table.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_average;
///
/// assert_eq!(format_average(1.5), "1.50");
/// assert_eq!(format_average(3.0), "3.00");
/// ```
pub fn format_average(value: f64) -> String {
    format_decimal(value, AVERAGE_DECIMALS)
}

/// Decimal places used for averages in the report table.
pub const AVERAGE_DECIMALS: usize = 2;

// ── Tests ──────────────────────────────────────────────────────────────────────
