/// Core Module for sqlhelper
///
/// Shared infrastructure: the error type and the database layer
/// (connection settings, drivers and statement execution).

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, SqlHelperError};
