// Core infrastructure modules
pub mod core;

// Statement building, execution surface and result serialization
pub mod config;
pub mod format;
pub mod helper;
pub mod serializer;
pub mod statement;

pub use crate::core::db::{ConnectionConfig, Driver, RowSet, SqliteDriver};
pub use crate::core::{Result, SqlHelperError};
pub use format::{quote_literal, FieldMapping};
pub use helper::SqlHelper;
pub use serializer::ResultRecord;
