use share_treemap::commands::{
    execute_render, execute_totals, validate_render_args, validate_report_file, RenderArgs,
    TotalsArgs,
};
use std::fs;
use std::path::PathBuf;

const TABLE: &str = r#"[
    ["Name", "Parent", "Sales"],
    ["All", null, 0],
    ["Food", "All", 0],
    ["Tools", "All", 0],
    ["Bread", "Food", 1200],
    ["Milk", "Food", 600],
    ["Saw", "Tools", 200]
]"#;

fn write_table(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("share.json");
    fs::write(&path, TABLE).unwrap();
    path
}

#[test]
fn test_execute_totals_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("totals.json");

    let report = execute_totals(TotalsArgs {
        input: write_table(&dir),
        output: Some(output.clone()),
        print_summary: false,
    })
    .unwrap();

    assert_eq!(report.total, 2000.0);
    assert_eq!(report.categories[0].name, "Food");
    assert_eq!(report.categories[0].total, 1800.0);
    assert!(output.exists());
    assert!(validate_report_file(output).is_ok());
}

#[test]
fn test_execute_render_writes_page() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out/share.html");

    execute_render(RenderArgs {
        input: write_table(&dir),
        output: output.clone(),
        title: Some("Sales".to_string()),
        ..Default::default()
    })
    .unwrap();

    let html = fs::read_to_string(output).unwrap();
    assert!(html.contains("\"Sales\""));
    assert!(html.contains("Share: <b>1,800<\\/b> (<b>90.00%<\\/b>)"));
}

#[test]
fn test_execute_render_rejects_malformed_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, r#"[["All", null, 0], ["Bread", "Food", 5]]"#).unwrap();

    let result = execute_render(RenderArgs {
        input,
        output: dir.path().join("bad.html"),
        ..Default::default()
    });

    assert!(result.is_err());
    assert!(!dir.path().join("bad.html").exists());
}

#[test]
fn test_validate_render_args_empty_input() {
    let args = RenderArgs {
        input: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_render_args(&args).is_err());
}

#[test]
fn test_validate_render_args_zero_height() {
    let args = RenderArgs {
        height: Some(0),
        ..Default::default()
    };

    assert!(validate_render_args(&args).is_err());
}
