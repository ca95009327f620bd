//! Share table loader.
//!
//! Parses the array-of-arrays JSON the chart library ingests
//! (`[[name, parent, value], ...]`) into a `ShareTable`.
//! The first array is treated as a header row when its value cell is a string.

use super::schema::{Row, ShareTable};
use crate::utils::error::TableError;
use log::{debug, warn};
use serde_json::Value;
use std::path::Path;

/// Load a share table from a JSON file
///
/// **Public** - main entry point for file input
///
/// # Errors
/// * `TableError::IoError` - file cannot be read
/// * any error from `parse_table`
pub fn load_table(path: impl AsRef<Path>) -> Result<ShareTable, TableError> {
    let path = path.as_ref();
    debug!("Loading share table from: {}", path.display());

    let raw = std::fs::read_to_string(path)?;
    parse_table(&raw)
}

/// Parse a share table from JSON text
///
/// **Public** - main entry point for in-memory input
///
/// # Returns
/// Table with the header (if present) applied as column labels
///
/// # Errors
/// * `TableError::JsonError` - text is not an array of arrays
/// * `TableError::InvalidFormat` - a row has the wrong shape or cell types
/// * `TableError::Empty` - no data rows after the header
pub fn parse_table(raw: &str) -> Result<ShareTable, TableError> {
    let cells: Vec<Vec<Value>> = serde_json::from_str(raw)?;

    let mut lines = cells.into_iter().peekable();

    let header = if lines.peek().is_some_and(|first| is_header(first)) {
        lines.next().map(|first| parse_header(&first)).transpose()?
    } else {
        None
    };

    let rows = lines
        .enumerate()
        .map(|(index, cells)| parse_row(index, &cells))
        .collect::<Result<Vec<Row>, TableError>>()?;

    debug!(
        "Parsed {} data rows (header: {})",
        rows.len(),
        header.is_some()
    );

    let table = ShareTable::new(rows)?;

    if !table.root().parent.is_empty() {
        warn!(
            "Root row '{}' declares parent '{}'; the parent of the root is ignored",
            table.root().name,
            table.root().parent
        );
    }

    Ok(match header {
        Some(columns) => table.with_columns(columns),
        None => table,
    })
}

/// A header row carries a label, not a number, in the value column
///
/// **Private** - header detection
fn is_header(cells: &[Value]) -> bool {
    matches!(cells.get(2), Some(Value::String(_)))
}

fn parse_header(cells: &[Value]) -> Result<[String; 3], TableError> {
    check_width(cells, "header")?;

    let label = |i: usize| {
        cells[i].as_str().map(String::from).ok_or_else(|| {
            TableError::InvalidFormat(format!("header cell {} is not a string", i))
        })
    };

    Ok([label(0)?, label(1)?, label(2)?])
}

/// Parse one data row
///
/// **Private** - `index` is the data row index (header excluded)
fn parse_row(index: usize, cells: &[Value]) -> Result<Row, TableError> {
    check_width(cells, &format!("row {}", index))?;

    let name = match &cells[0] {
        Value::String(name) => name.clone(),
        other => {
            return Err(TableError::InvalidFormat(format!(
                "row {}: name must be a string, got {}",
                index, other
            )))
        }
    };

    let parent = match &cells[1] {
        Value::String(parent) => parent.clone(),
        Value::Null => String::new(),
        other => {
            return Err(TableError::InvalidFormat(format!(
                "row {}: parent must be a string or null, got {}",
                index, other
            )))
        }
    };

    let value = cells[2].as_f64().ok_or_else(|| {
        TableError::InvalidFormat(format!(
            "row {}: value must be a number, got {}",
            index, cells[2]
        ))
    })?;

    Ok(Row {
        name,
        parent,
        value,
    })
}

fn check_width(cells: &[Value], what: &str) -> Result<(), TableError> {
    if cells.len() != 3 {
        return Err(TableError::InvalidFormat(format!(
            "{} has {} cells, expected 3 (name, parent, value)",
            what,
            cells.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let table = parse_table(
            r#"[["Name", "Parent", "Sales"],
                ["All", null, 0],
                ["Food", "All", 0],
                ["Bread", "Food", 1200]]"#,
        )
        .unwrap();

        assert_eq!(table.columns()[2], "Sales");
        assert_eq!(table.len(), 3);
        assert_eq!(table.root().name, "All");
        assert_eq!(table.root().parent, "");
        assert_eq!(table.rows()[2], Row::new("Bread", "Food", 1200.0));
    }

    #[test]
    fn test_parse_without_header() {
        let table = parse_table(r#"[["All", null, 0], ["Food", "All", 3.5]]"#).unwrap();

        assert_eq!(table.columns()[0], "Name");
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].value, 3.5);
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        let result = parse_table(r#"[["Name", "Parent", "Sales"]]"#);
        assert!(matches!(result, Err(TableError::Empty)));
    }

    #[test]
    fn test_parse_rejects_non_numeric_value() {
        let result = parse_table(r#"[["All", null, 0], ["Food", "All", true]]"#);

        match result {
            Err(TableError::InvalidFormat(msg)) => assert!(msg.contains("row 1")),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_width() {
        let result = parse_table(r#"[["All", null]]"#);
        assert!(matches!(result, Err(TableError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_table(r#"{"rows": []}"#);
        assert!(matches!(result, Err(TableError::JsonError(_))));
    }
}
