//! Ledger error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing workbooks
#[derive(Error, Debug)]
pub enum LedgerError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required workbook does not exist
    #[error("Workbook not found: {0:?}")]
    MissingWorkbook(PathBuf),

    /// A row could not be parsed or written
    #[error("Malformed workbook {path:?}: {error}")]
    Malformed { path: PathBuf, error: String },
}

impl LedgerError {
    pub(crate) fn malformed(path: &std::path::Path, error: impl ToString) -> Self {
        LedgerError::Malformed {
            path: path.to_path_buf(),
            error: error.to_string(),
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::MissingWorkbook(PathBuf::from("data/staff.csv"));
        assert_eq!(err.to_string(), "Workbook not found: \"data/staff.csv\"");

        let err = LedgerError::malformed(std::path::Path::new("inventory.csv"), "bad quantity");
        assert_eq!(
            err.to_string(),
            "Malformed workbook \"inventory.csv\": bad quantity"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
