/// Query Execution Module
///
/// Runs one statement per connection: open, execute, close. The connection
/// is released on every path, including when the statement fails.

use super::connection::{Connection, ConnectionConfig, Driver};
use crate::core::Result;
use std::time::Instant;
use tracing::{debug, warn};

/// Raw tabular output of a read statement, before serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    /// Column display labels, in the order reported by the database
    pub columns: Vec<String>,
    /// Row values as text; `None` for NULL
    pub rows: Vec<Vec<Option<String>>>,
}

impl RowSet {
    /// Creates a new RowSet from column labels and row data
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        RowSet { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Represents different SQL statement types, used to label log output
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatementType {
    Select,
    Insert,
    Update,
    Delete,
    Other,
}

impl StatementType {
    /// Determines the statement type from its leading keyword
    pub fn from_sql(sql: &str) -> Self {
        let keyword = sql
            .trim_start()
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_uppercase();

        match keyword.as_str() {
            "SELECT" => StatementType::Select,
            "INSERT" => StatementType::Insert,
            "UPDATE" => StatementType::Update,
            "DELETE" => StatementType::Delete,
            _ => StatementType::Other,
        }
    }

    /// Whether a statement with this leading keyword produces rows.
    ///
    /// Covers plain and CTE reads plus `PRAGMA`, `EXPLAIN` and `VALUES`.
    pub fn returns_rows(sql: &str) -> bool {
        let keyword = sql
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_uppercase();

        matches!(
            keyword.as_str(),
            "SELECT" | "WITH" | "PRAGMA" | "EXPLAIN" | "VALUES" | "SHOW" | "DESCRIBE"
        )
    }
}

/// Executes statements against connections opened from `driver`.
///
/// Holds no connection between calls; every call opens its own.
pub struct Executor<'a, D: Driver> {
    driver: &'a D,
    config: &'a ConnectionConfig,
}

impl<'a, D: Driver> Executor<'a, D> {
    /// Creates a new Executor for the given driver and settings
    pub fn new(driver: &'a D, config: &'a ConnectionConfig) -> Self {
        Executor { driver, config }
    }

    /// Runs a read statement and returns every row.
    ///
    /// # Errors
    ///
    /// Returns `SqlHelperError::InvalidArgument` if the settings are invalid and
    /// `SqlHelperError::Database` if opening, running or closing fails.
    pub fn query(&self, sql: &str) -> Result<RowSet> {
        self.config.validate()?;
        let started = Instant::now();

        let mut conn = self.driver.open(self.config)?;
        let result = conn.run_query(sql);
        let rows = release(conn, result)?;

        debug!(
            kind = ?StatementType::from_sql(sql),
            rows = rows.row_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "{}",
            sql
        );
        Ok(rows)
    }

    /// Runs a write statement and returns the affected-row count.
    ///
    /// # Errors
    ///
    /// Same as [`Executor::query`].
    pub fn exec(&self, sql: &str) -> Result<u64> {
        self.config.validate()?;
        let started = Instant::now();

        let mut conn = self.driver.open(self.config)?;
        let result = conn.run_update(sql);
        let affected = release(conn, result)?;

        debug!(
            kind = ?StatementType::from_sql(sql),
            affected,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "{}",
            sql
        );
        Ok(affected)
    }
}

/// Closes `conn`, then hands back the statement outcome.
///
/// A statement error wins over a close error; a close error after a
/// successful statement is returned as-is.
fn release<C: Connection, T>(conn: C, result: Result<T>) -> Result<T> {
    match (result, conn.close()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!("Failed to close connection after error: {}", close_err);
            Err(err)
        }
    }
}
