use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Name of the only report with defined behaviour.
pub const PERFORMANCE_REPORT: &str = "performance";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Average performance per position from CSV files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "perf-report",
    about = "Average performance per position from CSV files",
    version,
    args_override_self = true
)]
pub struct Settings {
    /// Paths to CSV files with position and performance columns
    ///
    /// Given more than once, the last occurrence wins.
    #[arg(long, required = true, num_args = 1.., action = ArgAction::Set)]
    pub files: Vec<PathBuf>,

    /// Report name (only 'performance' is supported)
    #[arg(long, default_value = PERFORMANCE_REPORT)]
    pub report: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── ReportKind ─────────────────────────────────────────────────────────────────

/// The report selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    Performance,
    /// Accepted without validation; rendered as the performance report.
    Unknown(String),
}

impl Settings {
    /// Map the `--report` selector onto a [`ReportKind`].
    pub fn report_kind(&self) -> ReportKind {
        if self.report == PERFORMANCE_REPORT {
            ReportKind::Performance
        } else {
            ReportKind::Unknown(self.report.clone())
        }
    }

    /// Level handed to the logging bootstrap; `--debug` wins over `--log-level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_uses_defaults() {
        let settings =
            Settings::try_parse_from(["perf-report", "--files", "one.csv", "two.csv"]).unwrap();

        assert_eq!(
            settings.files,
            vec![PathBuf::from("one.csv"), PathBuf::from("two.csv")]
        );
        assert_eq!(settings.report, "performance");
        assert_eq!(settings.report_kind(), ReportKind::Performance);
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
    }

    #[test]
    fn test_parse_args_files_required() {
        let err = Settings::try_parse_from(["perf-report"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_args_files_needs_a_value() {
        assert!(Settings::try_parse_from(["perf-report", "--files"]).is_err());
    }

    #[test]
    fn test_parse_args_report_after_files() {
        let settings = Settings::try_parse_from([
            "perf-report",
            "--files",
            "a.csv",
            "--report",
            "performance",
        ])
        .unwrap();
        assert_eq!(settings.files, vec![PathBuf::from("a.csv")]);
        assert_eq!(settings.report, "performance");
    }

    #[test]
    fn test_repeated_files_last_occurrence_wins() {
        let settings = Settings::try_parse_from([
            "perf-report",
            "--files",
            "a.csv",
            "--files",
            "b.csv",
            "c.csv",
        ])
        .unwrap();
        assert_eq!(
            settings.files,
            vec![PathBuf::from("b.csv"), PathBuf::from("c.csv")]
        );
    }

    #[test]
    fn test_repeated_report_last_occurrence_wins() {
        let settings = Settings::try_parse_from([
            "perf-report",
            "--files",
            "a.csv",
            "--report",
            "salary",
            "--report",
            "performance",
        ])
        .unwrap();
        assert_eq!(settings.report_kind(), ReportKind::Performance);
    }

    #[test]
    fn test_unknown_report_is_accepted() {
        let settings =
            Settings::try_parse_from(["perf-report", "--files", "a.csv", "--report", "salary"])
                .unwrap();
        assert_eq!(
            settings.report_kind(),
            ReportKind::Unknown("salary".to_string())
        );
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result =
            Settings::try_parse_from(["perf-report", "--files", "a.csv", "--log-level", "LOUD"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_flag_overrides_log_level() {
        let settings = Settings::try_parse_from([
            "perf-report",
            "--files",
            "a.csv",
            "--log-level",
            "ERROR",
            "--debug",
        ])
        .unwrap();
        assert_eq!(settings.effective_log_level(), "DEBUG");
    }

    #[test]
    fn test_effective_log_level_without_debug() {
        let settings = Settings::try_parse_from([
            "perf-report",
            "--files",
            "a.csv",
            "--log-level",
            "INFO",
        ])
        .unwrap();
        assert_eq!(settings.effective_log_level(), "INFO");
    }
}
