//! Row and table definitions.
//!
//! A share table is a two-level tree flattened into rows: row 0 is the
//! root, rows whose parent is the root are categories, everything else is
//! an item under a category.

use crate::utils::config::DEFAULT_COLUMNS;
use crate::utils::error::TableError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One node of the share tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Node name, unique across the table
    pub name: String,

    /// Name of the parent node (empty for the root)
    pub parent: String,

    /// Own value of the node (only item values are aggregated)
    pub value: f64,
}

impl Row {
    pub fn new(name: impl Into<String>, parent: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            value,
        }
    }
}

/// Ordered, non-empty row table plus its column labels
#[derive(Debug, Clone, PartialEq)]
pub struct ShareTable {
    columns: [String; 3],
    rows: Vec<Row>,
}

impl ShareTable {
    /// Create a table from rows, the first of which is the root
    ///
    /// # Errors
    /// * `TableError::Empty` - no rows given
    pub fn new(rows: Vec<Row>) -> Result<Self, TableError> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }

        Ok(Self {
            columns: DEFAULT_COLUMNS.map(String::from),
            rows,
        })
    }

    pub fn with_columns(mut self, columns: [String; 3]) -> Self {
        self.columns = columns;
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[String; 3] {
        &self.columns
    }

    /// The root row (always the first row)
    pub fn root(&self) -> &Row {
        &self.rows[0]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert to the array-of-arrays shape the chart library ingests.
    ///
    /// The header row comes first. The root's parent is always `null`
    /// (whatever the row declares), as is any other empty parent.
    pub fn to_data_array(&self) -> Value {
        let mut data = Vec::with_capacity(self.rows.len() + 1);
        data.push(json!(self.columns));

        for (index, row) in self.rows.iter().enumerate() {
            let parent = if index == 0 || row.parent.is_empty() {
                Value::Null
            } else {
                Value::String(row.parent.clone())
            };
            data.push(json!([row.name, parent, row.value]));
        }

        Value::Array(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(ShareTable::new(vec![]), Err(TableError::Empty)));
    }

    #[test]
    fn test_root_is_first_row() {
        let table = ShareTable::new(vec![
            Row::new("All", "", 0.0),
            Row::new("Food", "All", 0.0),
        ])
        .unwrap();

        assert_eq!(table.root().name, "All");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_to_data_array_nulls_root_parent() {
        let table = ShareTable::new(vec![
            Row::new("All", "", 0.0),
            Row::new("Food", "All", 0.0),
            Row::new("Bread", "Food", 12.5),
        ])
        .unwrap();

        let data = table.to_data_array();

        assert_eq!(data[0], json!(["Name", "Parent", "Value"]));
        assert_eq!(data[1], json!(["All", null, 0.0]));
        assert_eq!(data[3], json!(["Bread", "Food", 12.5]));
    }

    #[test]
    fn test_to_data_array_drops_declared_root_parent() {
        let table = ShareTable::new(vec![
            Row::new("All", "World", 0.0),
            Row::new("Food", "All", 0.0),
        ])
        .unwrap();

        let data = table.to_data_array();

        assert_eq!(data[1], json!(["All", null, 0.0]));
        assert_eq!(data[2], json!(["Food", "All", 0.0]));
    }
}
