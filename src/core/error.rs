/// SQL Helper Error Module
///
/// This module defines the error type shared by every sqlhelper operation.
/// Driver failures, rejected inputs and configuration problems all surface
/// through it so callers can match on a single enum.
use thiserror::Error;

/// Error type for sqlhelper.
///
/// Variants:
/// - Driver, connectivity and SQL failures (message kept verbatim)
/// - Rejected arguments (empty mappings, invalid connection settings)
/// - Configuration loading problems
/// - File system and JSON errors
#[derive(Error, Debug)]
pub enum SqlHelperError {
    /// Errors reported by the database driver. Never retried.
    #[error("Database error: {0}")]
    Database(String),

    /// A required mapping was empty or a setting was out of range.
    ///
    /// Replaces the legacy `-1` return for insert/update/delete calls with
    /// nothing to write or no condition to restrict them.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for SqlHelperError {
    fn from(err: rusqlite::Error) -> Self {
        SqlHelperError::Database(err.to_string())
    }
}

/// Type alias for Result to use SqlHelperError as the error type.
pub type Result<T> = std::result::Result<T, SqlHelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let db_err = SqlHelperError::Database("no such table: users".to_string());
        assert_eq!(db_err.to_string(), "Database error: no such table: users");

        let arg_err = SqlHelperError::InvalidArgument("no columns to insert".to_string());
        assert!(arg_err.to_string().contains("Invalid argument"));

        let config_err = SqlHelperError::Config("missing [database] table".to_string());
        assert!(config_err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_driver_message_is_kept() {
        let err: SqlHelperError = rusqlite::Error::QueryReturnedNoRows.into();
        match err {
            SqlHelperError::Database(msg) => {
                assert_eq!(msg, rusqlite::Error::QueryReturnedNoRows.to_string())
            }
            _ => panic!("Expected Database error"),
        }
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SqlHelperError = io_err.into();
        match err {
            SqlHelperError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }

        let json_err: std::result::Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("{ invalid json }");
        let err: SqlHelperError = json_err.unwrap_err().into();
        match err {
            SqlHelperError::Json(_) => {}
            _ => panic!("Expected JSON error"),
        }
    }
}
