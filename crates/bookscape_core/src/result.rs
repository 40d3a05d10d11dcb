//! Tabular results returned from executing a catalog query.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::errors::{CoreError, Result};

/// A single value in a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Numeric view of the cell, used for chart measures. Non-numeric and
    /// null cells have no numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            CellValue::Null | CellValue::Bool(_) | CellValue::Text(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(v) => write!(f, "{v}"),
        }
    }
}

// Serialize as the plain JSON scalar rather than a tagged variant so result
// rows come out as `["Acme", 5]` instead of `[{"Text": "Acme"}, ...]`.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_none(),
            CellValue::Bool(v) => serializer.serialize_bool(*v),
            CellValue::Int(v) => serializer.serialize_i64(*v),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

/// Ordered column names plus positionally aligned rows.
///
/// Column names are verbatim from the result set metadata. Produced fresh
/// per execution and discarded after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl QueryResult {
    /// Create a result, checking that every row is aligned to the columns.
    pub fn try_new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(CoreError::RowWidthMismatch {
                    row_idx,
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        Ok(QueryResult { columns, rows })
    }

    pub fn empty(columns: Vec<String>) -> Self {
        QueryResult {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

impl Serialize for QueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("QueryResult", 2)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("rows", &self.rows)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_checks_row_width() {
        let err = QueryResult::try_new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![CellValue::Int(1)]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::RowWidthMismatch {
                row_idx: 0,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn display_renders_bools_and_nulls() {
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
        assert_eq!(CellValue::Null.to_string(), "NULL");
    }

    #[test]
    fn cells_serialize_as_plain_scalars() {
        let result = QueryResult::try_new(
            vec!["publisher".to_string(), "books_published".to_string()],
            vec![vec![
                CellValue::Text("Acme".to_string()),
                CellValue::Int(5),
            ]],
        )
        .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "columns": ["publisher", "books_published"],
                "rows": [["Acme", 5]],
            })
        );
    }

    #[test]
    fn as_f64_only_for_numeric_cells() {
        assert_eq!(CellValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(CellValue::Text("3".to_string()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }
}
