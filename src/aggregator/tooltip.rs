//! Tooltip derivation for treemap nodes.
//!
//! A tooltip depends on where the hovered row sits in the tree:
//! the root has none, categories show their share of the root,
//! items show their category and their share of it.

use super::format::{escape_html, group_thousands, round_to};
use super::totals::TotalsMap;
use crate::table::Row;
use crate::utils::config::{OTHERS_LABEL, OTHERS_MARKER};
use crate::utils::error::ShareError;
use std::fmt;

/// Position of a non-root node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Category,
    Item,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Category => "Category",
            NodeKind::Item => "Item",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a tooltip panel shows for one node
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Display name (`(Others)` for collapsed siblings)
    pub name: String,

    pub kind: NodeKind,

    /// Parent category, set for items only
    pub category: Option<String>,

    /// Node weight as reported by the chart
    pub size: f64,

    /// Share of the parent total, rounded to 2 decimals
    pub percentage: f64,
}

impl Tooltip {
    /// Percentage with exactly two decimals, e.g. `25.00`
    pub fn percentage_text(&self) -> String {
        format!("{:.2}", self.percentage)
    }

    /// Render the panel markup handed to the chart library
    pub fn to_html(&self) -> String {
        let category = match &self.category {
            Some(category) => format!("<br/>Category: <b>{}</b>", escape_html(category)),
            None => String::new(),
        };

        format!(
            concat!(
                r#"<div class="tooltip">"#,
                r#"<div class="arrow"></div>"#,
                r#"<div class="tooltip-inner">"#,
                "<b>{}</b><br/><br/>",
                "Type: <b>{}</b>{}<br/>",
                "Share: <b>{}</b> (<b>{}%</b>)",
                "</div>",
                "</div>"
            ),
            escape_html(&self.name),
            self.kind,
            category,
            group_thousands(self.size),
            self.percentage_text()
        )
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Type: {}", self.kind)?;
        if let Some(category) = &self.category {
            writeln!(f, "Category: {}", category)?;
        }
        write!(
            f,
            "Share: {} ({}%)",
            group_thousands(self.size),
            self.percentage_text()
        )
    }
}

/// Describe the tooltip for one row
///
/// **Public** - structured form of `tooltip`
///
/// # Arguments
/// * `rows` - The table `totals` was built from
/// * `totals` - Output of `build`
/// * `row_index` - Row being hovered
/// * `size` - The node's weight as computed by the chart
///
/// # Returns
/// `None` for the root, otherwise the panel contents
///
/// # Errors
/// * `ShareError::RowOutOfRange` - `row_index` past the end of `rows`
/// * `ShareError::UnregisteredParent` - the row's parent has no total
pub fn describe(
    rows: &[Row],
    totals: &TotalsMap,
    row_index: usize,
    size: f64,
) -> Result<Option<Tooltip>, ShareError> {
    let root = rows.first().ok_or(ShareError::EmptyTable)?;
    let row = rows.get(row_index).ok_or(ShareError::RowOutOfRange {
        row: row_index,
        len: rows.len(),
    })?;

    if row.name == root.name {
        return Ok(None);
    }

    let parent_total = totals
        .get(&row.parent)
        .ok_or_else(|| ShareError::UnregisteredParent {
            row: row_index,
            parent: row.parent.clone(),
        })?;

    let percentage = if parent_total == 0.0 {
        0.0
    } else {
        round_to(size / parent_total * 100.0, 2)
    };

    let kind = if row.parent == root.name {
        NodeKind::Category
    } else {
        NodeKind::Item
    };

    Ok(Some(Tooltip {
        name: display_name(&row.name).to_string(),
        kind,
        category: (kind == NodeKind::Item).then(|| row.parent.clone()),
        size,
        percentage,
    }))
}

/// Tooltip markup for one row, `None` for the root
///
/// **Public** - the callback contract the chart library invokes per node
pub fn tooltip(
    rows: &[Row],
    totals: &TotalsMap,
    row_index: usize,
    size: f64,
) -> Result<Option<String>, ShareError> {
    Ok(describe(rows, totals, row_index, size)?.map(|tip| tip.to_html()))
}

/// Weight of a row when the chart has not reported one:
/// the aggregated total for the root and categories, the own value for items.
pub fn node_size(rows: &[Row], totals: &TotalsMap, row_index: usize) -> Result<f64, ShareError> {
    let row = rows.get(row_index).ok_or(ShareError::RowOutOfRange {
        row: row_index,
        len: rows.len(),
    })?;

    Ok(totals.get(&row.name).unwrap_or(row.value))
}

/// Collapse `(Others: ...)` labels to `(Others)`
fn display_name(name: &str) -> &str {
    if name.contains(OTHERS_MARKER) {
        OTHERS_LABEL
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::totals::build;

    fn rows() -> Vec<Row> {
        vec![
            Row::new("All", "", 0.0),
            Row::new("Food", "All", 0.0),
            Row::new("Bread", "Food", 250.0),
            Row::new("Milk", "Food", 750.0),
            Row::new("(Others: 12 items)", "Food", 0.0),
        ]
    }

    #[test]
    fn test_root_has_no_tooltip() {
        let rows = rows();
        let totals = build(&rows).unwrap();
        assert_eq!(tooltip(&rows, &totals, 0, 1000.0).unwrap(), None);
    }

    #[test]
    fn test_item_percentage() {
        let rows = rows();
        let totals = build(&rows).unwrap();

        let tip = describe(&rows, &totals, 2, 250.0).unwrap().unwrap();

        assert_eq!(tip.kind, NodeKind::Item);
        assert_eq!(tip.category.as_deref(), Some("Food"));
        assert_eq!(tip.percentage_text(), "25.00");
    }

    #[test]
    fn test_others_display_name() {
        let rows = rows();
        let totals = build(&rows).unwrap();

        let tip = describe(&rows, &totals, 4, 10.0).unwrap().unwrap();
        assert_eq!(tip.name, "(Others)");
    }

    #[test]
    fn test_zero_parent_total() {
        let rows = vec![
            Row::new("All", "", 0.0),
            Row::new("Empty", "All", 0.0),
        ];
        let totals = build(&rows).unwrap();

        let tip = describe(&rows, &totals, 1, 0.0).unwrap().unwrap();
        assert_eq!(tip.percentage_text(), "0.00");
    }

    #[test]
    fn test_row_out_of_range() {
        let rows = rows();
        let totals = build(&rows).unwrap();

        assert_eq!(
            tooltip(&rows, &totals, 9, 1.0),
            Err(ShareError::RowOutOfRange { row: 9, len: 5 })
        );
    }

    #[test]
    fn test_node_size() {
        let rows = rows();
        let totals = build(&rows).unwrap();

        assert_eq!(node_size(&rows, &totals, 0).unwrap(), 1000.0);
        assert_eq!(node_size(&rows, &totals, 1).unwrap(), 1000.0);
        assert_eq!(node_size(&rows, &totals, 3).unwrap(), 750.0);
    }

    #[test]
    fn test_plain_text_panel() {
        let tip = Tooltip {
            name: "Bread".to_string(),
            kind: NodeKind::Item,
            category: Some("Food".to_string()),
            size: 1234567.0,
            percentage: 12.5,
        };

        assert_eq!(
            tip.to_string(),
            "Bread\n\nType: Item\nCategory: Food\nShare: 1,234,567 (12.50%)"
        );
    }
}
