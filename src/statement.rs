//! Statement construction for SELECT/INSERT/UPDATE/DELETE.
//!
//! Pure text assembly; nothing here touches a database. Writes that would be
//! empty or unconditional are rejected with `SqlHelperError::InvalidArgument`.

use crate::core::{Result, SqlHelperError};
use crate::format::{join_list, join_mapping, FieldMapping};

/// `SELECT * FROM <table>`
pub fn build_select_all(table: &str) -> String {
    build_select::<&str>(table, &[], &FieldMapping::new())
}

/// `SELECT <columns> FROM <table>`, or `*` when `columns` is empty.
pub fn build_select_columns<S: AsRef<str>>(table: &str, columns: &[S]) -> String {
    build_select(table, columns, &FieldMapping::new())
}

/// Builds a SELECT. Empty `columns` selects `*`; empty `conditions` omits
/// the WHERE clause.
///
/// ```
/// use sqlhelper::format::FieldMapping;
/// use sqlhelper::statement::build_select;
///
/// let sql = build_select("t", &["a", "b"], &FieldMapping::from([("id", "1")]));
/// assert_eq!(sql, "SELECT a,b FROM t WHERE id=1");
/// ```
pub fn build_select<S: AsRef<str>>(table: &str, columns: &[S], conditions: &FieldMapping) -> String {
    let selection = if columns.is_empty() {
        "*".to_string()
    } else {
        join_list(columns)
    };

    let mut sql = format!("SELECT {} FROM {}", selection, table);
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&join_mapping(conditions));
    }
    sql
}

/// Builds `INSERT INTO <table>(<keys>) VALUES(<values>)`.
///
/// # Errors
///
/// Returns `SqlHelperError::InvalidArgument` when `data` is empty.
pub fn build_insert(table: &str, data: &FieldMapping) -> Result<String> {
    if data.is_empty() {
        return Err(SqlHelperError::InvalidArgument(format!(
            "no columns to insert into '{}'",
            table
        )));
    }

    // keys and values come from the same traversal so they always line up
    let (keys, values): (Vec<&str>, Vec<&str>) = data.iter().unzip();

    Ok(format!(
        "INSERT INTO {}({}) VALUES({})",
        table,
        keys.join(","),
        values.join(",")
    ))
}

/// Builds `UPDATE <table> SET <assignments> WHERE <conditions>`.
///
/// # Errors
///
/// Returns `SqlHelperError::InvalidArgument` when `data` or `conditions` is
/// empty.
pub fn build_update(table: &str, data: &FieldMapping, conditions: &FieldMapping) -> Result<String> {
    if data.is_empty() {
        return Err(SqlHelperError::InvalidArgument(format!(
            "no columns to update in '{}'",
            table
        )));
    }
    if conditions.is_empty() {
        return Err(SqlHelperError::InvalidArgument(format!(
            "refusing to update '{}' without conditions",
            table
        )));
    }

    Ok(format!(
        "UPDATE {} SET {} WHERE {}",
        table,
        join_mapping(data),
        join_mapping(conditions)
    ))
}

/// Builds `DELETE FROM <table> WHERE <conditions>`.
///
/// # Errors
///
/// Returns `SqlHelperError::InvalidArgument` when `conditions` is empty.
pub fn build_delete(table: &str, conditions: &FieldMapping) -> Result<String> {
    if conditions.is_empty() {
        return Err(SqlHelperError::InvalidArgument(format!(
            "refusing to delete from '{}' without conditions",
            table
        )));
    }

    Ok(format!("DELETE FROM {} WHERE {}", table, join_mapping(conditions)))
}
