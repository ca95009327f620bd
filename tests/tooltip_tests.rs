use pretty_assertions::assert_eq;
use share_treemap::aggregator::{build, describe, tooltip, NodeKind};
use share_treemap::table::Row;

fn rows() -> Vec<Row> {
    vec![
        Row::new("Sales", "", 0.0),
        Row::new("Food", "Sales", 0.0),
        Row::new("Tools", "Sales", 0.0),
        Row::new("Bread", "Food", 250.0),
        Row::new("Milk", "Food", 750.0),
        Row::new("(Others: 3 more)", "Tools", 3000.0),
    ]
}

#[test]
fn test_root_returns_none() {
    let rows = rows();
    let totals = build(&rows).unwrap();

    assert_eq!(tooltip(&rows, &totals, 0, 4000.0).unwrap(), None);
}

#[test]
fn test_category_tooltip() {
    let rows = rows();
    let totals = build(&rows).unwrap();

    let html = tooltip(&rows, &totals, 1, 1000.0).unwrap().unwrap();

    assert!(html.contains("Type: <b>Category</b>"));
    assert!(!html.contains("Category: "));
    assert!(html.contains("Share: <b>1,000</b> (<b>25.00%</b>)"));
}

#[test]
fn test_item_tooltip_markup() {
    let rows = rows();
    let totals = build(&rows).unwrap();

    let html = tooltip(&rows, &totals, 3, 250.0).unwrap().unwrap();

    assert_eq!(
        html,
        concat!(
            r#"<div class="tooltip"><div class="arrow"></div><div class="tooltip-inner">"#,
            "<b>Bread</b><br/><br/>",
            "Type: <b>Item</b><br/>Category: <b>Food</b><br/>",
            "Share: <b>250</b> (<b>25.00%</b>)",
            "</div></div>"
        )
    );
}

#[test]
fn test_others_label_collapsed() {
    let rows = rows();
    let totals = build(&rows).unwrap();

    let tip = describe(&rows, &totals, 5, 3000.0).unwrap().unwrap();

    assert_eq!(tip.name, "(Others)");
    assert_eq!(tip.kind, NodeKind::Item);
    assert_eq!(tip.category.as_deref(), Some("Tools"));
    assert_eq!(tip.percentage_text(), "100.00");
}

#[test]
fn test_percentage_rounded_to_two_places() {
    let rows = rows();
    let totals = build(&rows).unwrap();

    let tip = describe(&rows, &totals, 4, 1000.0 / 3.0).unwrap().unwrap();
    assert_eq!(tip.percentage_text(), "33.33");
}

#[test]
fn test_tooltip_idempotent() {
    let rows = rows();
    let totals = build(&rows).unwrap();

    let first = tooltip(&rows, &totals, 4, 750.0).unwrap();
    let second = tooltip(&rows, &totals, 4, 750.0).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_names_are_escaped() {
    let rows = vec![
        Row::new("All", "", 0.0),
        Row::new("Fish & <Chips>", "All", 0.0),
        Row::new("Cod", "Fish & <Chips>", 10.0),
    ];
    let totals = build(&rows).unwrap();

    let html = tooltip(&rows, &totals, 2, 10.0).unwrap().unwrap();
    assert!(html.contains("Category: <b>Fish &amp; &lt;Chips&gt;</b>"));
}
