//! Result Serializer Module
//!
//! Turns raw row-sets into ordered records and renders them as a JSON array.
//! Column order inside each object and row order across the array follow
//! what the database returned.

use crate::core::db::RowSet;
use crate::core::{Result, SqlHelperError};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One result row: column label to text value, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRecord {
    fields: Vec<(String, Option<String>)>,
}

impl ResultRecord {
    pub fn new() -> Self {
        ResultRecord { fields: Vec::new() }
    }

    /// Adds a column. A label already present keeps its first value.
    pub fn push(&mut self, label: &str, value: Option<String>) {
        if self.fields.iter().any(|(l, _)| l == label) {
            return;
        }
        self.fields.push((label.to_string(), value));
    }

    /// Value of the first column named `label`. `Some(None)` is a NULL.
    pub fn get(&self, label: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_deref())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Converts each row into a record keyed by the column labels.
///
/// # Errors
///
/// Returns `SqlHelperError::Database` when a row's width differs from the
/// number of columns.
pub fn to_records(rowset: &RowSet) -> Result<Vec<ResultRecord>> {
    rowset
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            if row.len() != rowset.columns.len() {
                return Err(SqlHelperError::Database(format!(
                    "row {} has {} values for {} columns",
                    index,
                    row.len(),
                    rowset.columns.len()
                )));
            }
            let mut record = ResultRecord::new();
            for (label, value) in rowset.columns.iter().zip(row) {
                record.push(label, value.clone());
            }
            Ok(record)
        })
        .collect()
}

/// Renders records as a JSON array of objects. NULL becomes JSON `null`.
pub fn to_json_text(records: &[ResultRecord]) -> Result<String> {
    // serde_json error converts through the From impl on SqlHelperError
    Ok(serde_json::to_string(records)?)
}
