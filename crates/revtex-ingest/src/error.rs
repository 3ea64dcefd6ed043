//! Error types for workbook and configuration ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading external inputs.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Workbook file does not exist.
    #[error("workbook not found: {path}")]
    WorkbookNotFound { path: PathBuf },

    /// Workbook exists but could not be opened.
    #[error("failed to open workbook {path}: {message}")]
    WorkbookOpen { path: PathBuf, message: String },

    /// A worksheet could not be read out of an opened workbook.
    #[error("failed to read sheet '{sheet}' in {path}: {message}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        message: String,
    },

    /// Redaction rule file exists but is unreadable or not valid CSV.
    #[error("failed to read redaction rules {path}: {source}")]
    RedactionCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Codes mapping file exists but could not be read.
    #[error("failed to read codes mapping {path}: {source}")]
    CodesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// Process exit code for this failure. A missing workbook is
    /// distinguished from any other open failure; everything else is a
    /// generic error.
    pub fn exit_code(&self) -> i32 {
        match self {
            IngestError::WorkbookNotFound { .. } => 2,
            IngestError::WorkbookOpen { .. } | IngestError::SheetRead { .. } => 3,
            _ => 1,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::WorkbookNotFound {
            path: PathBuf::from("/data/CodeReviews.xlsx"),
        };
        assert_eq!(err.to_string(), "workbook not found: /data/CodeReviews.xlsx");
    }

    #[test]
    fn test_exit_codes_distinguish_missing_from_unreadable() {
        let missing = IngestError::WorkbookNotFound {
            path: PathBuf::from("a.xlsx"),
        };
        let unreadable = IngestError::WorkbookOpen {
            path: PathBuf::from("a.xlsx"),
            message: "not a zip archive".to_string(),
        };
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(unreadable.exit_code(), 3);
    }
}
