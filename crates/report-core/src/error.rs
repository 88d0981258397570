use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while building a report.
///
/// Malformed rows are not represented here: they are dropped at the row
/// level and never surface as errors.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A named input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A file exists but could not be opened or read from disk.
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed on a file (bad UTF-8, broken quoting, I/O).
    #[error("Failed to parse CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    /// Whether this error means an input path was missing.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, ReportError::FileNotFound(_))
    }
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
