//! Standalone Google Charts page backend.
//!
//! Produces an HTML document that loads the Google Charts treemap package
//! in the browser and draws the table there. Tooltips are evaluated here,
//! one per row, and embedded so the page's `generateTooltip` only looks
//! them up.

use super::options::TreemapOptions;
use super::renderer::{Container, TooltipFn, TreemapLibrary};
use crate::aggregator::format::escape_html;
use crate::table::{Row, ShareTable};
use crate::utils::config::{GOOGLE_CHARTS_LOADER, GOOGLE_CHARTS_VERSION};
use crate::utils::error::RenderError;
use log::{debug, info};
use serde::Serialize;
use std::collections::HashMap;

const TOOLTIP_STYLE: &str = concat!(
    ".tooltip { position: relative; font: 12px sans-serif; }\n",
    ".tooltip .arrow { display: none; }\n",
    ".tooltip-inner { background: #333; color: #fff; padding: 6px 10px; border-radius: 4px; max-width: 240px; }\n"
);

/// Treemap library that emits a Google Charts page
#[derive(Debug, Clone)]
pub struct GoogleChartsPage {
    loader_url: String,
    version: String,
    html: Option<String>,
}

impl Default for GoogleChartsPage {
    fn default() -> Self {
        Self {
            loader_url: GOOGLE_CHARTS_LOADER.to_string(),
            version: GOOGLE_CHARTS_VERSION.to_string(),
            html: None,
        }
    }
}

impl GoogleChartsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader(mut self, loader_url: impl Into<String>, version: impl Into<String>) -> Self {
        self.loader_url = loader_url.into();
        self.version = version.into();
        self
    }

    /// Page produced by the last draw
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn into_html(self) -> Option<String> {
        self.html
    }
}

impl TreemapLibrary for GoogleChartsPage {
    fn is_ready(&self) -> bool {
        // The browser loads the package itself; the page can always be written
        true
    }

    fn draw(
        &mut self,
        container: &Container,
        table: &ShareTable,
        options: &TreemapOptions,
        tooltip: &TooltipFn<'_>,
    ) -> Result<(), RenderError> {
        let weights = subtree_weights(table.rows());

        let tooltips = weights
            .iter()
            .enumerate()
            .map(|(row, size)| tooltip(row, *size))
            .collect::<Result<Vec<Option<String>>, _>>()?;

        debug!(
            "Evaluated {} tooltips ({} suppressed)",
            tooltips.len(),
            tooltips.iter().filter(|t| t.is_none()).count()
        );

        let html = render_page(
            &self.loader_url,
            &self.version,
            container,
            table,
            options,
            &tooltips,
        )?;

        info!("Treemap page generated ({} bytes)", html.len());
        self.html = Some(html);

        Ok(())
    }
}

/// Node weights as the treemap computes them: leaves weigh their own value,
/// parents the sum of their children.
fn subtree_weights(rows: &[Row]) -> Vec<f64> {
    let mut children: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.name != row.parent {
            children.entry(row.parent.as_str()).or_default().push(index);
        }
    }

    let mut memo: Vec<Option<f64>> = vec![None; rows.len()];
    let mut visiting = vec![false; rows.len()];

    (0..rows.len())
        .map(|index| weigh(index, rows, &children, &mut memo, &mut visiting))
        .collect()
}

fn weigh(
    index: usize,
    rows: &[Row],
    children: &HashMap<&str, Vec<usize>>,
    memo: &mut [Option<f64>],
    visiting: &mut [bool],
) -> f64 {
    if let Some(weight) = memo[index] {
        return weight;
    }
    // Cycle in parent links
    if visiting[index] {
        return 0.0;
    }
    visiting[index] = true;

    let weight = match children.get(rows[index].name.as_str()) {
        Some(kids) => kids
            .iter()
            .map(|&kid| weigh(kid, rows, children, memo, visiting))
            .sum(),
        None => rows[index].value,
    };

    visiting[index] = false;
    memo[index] = Some(weight);
    weight
}

/// Serialise a value for embedding inside a `<script>` element
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    serde_json::to_string(value)
        .map(|json| json.replace("</", "<\\/"))
        .map_err(|e| RenderError::Draw(format!("cannot serialise page data: {}", e)))
}

fn render_page(
    loader_url: &str,
    version: &str,
    container: &Container,
    table: &ShareTable,
    options: &TreemapOptions,
    tooltips: &[Option<String>],
) -> Result<String, RenderError> {
    let title = options.title.as_deref().unwrap_or("Share treemap");

    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    page.push_str(&format!(
        "<script src=\"{}\"></script>\n",
        escape_html(loader_url)
    ));
    page.push_str(&format!("<style>\n{}</style>\n", TOOLTIP_STYLE));
    page.push_str("</head>\n<body>\n");

    if let Some(title) = &options.title {
        page.push_str(&format!("<h3>{}</h3>\n", escape_html(title)));
    }

    page.push_str(&format!(
        "<div id=\"{}\" style=\"width: {}px; height: {}px;\"></div>\n",
        escape_html(container.id()),
        options.width,
        options.height
    ));

    page.push_str("<script>\n");
    page.push_str(&format!(
        "google.charts.load({}, {{packages: ['treemap']}});\n",
        script_json(version)?
    ));
    page.push_str("google.charts.setOnLoadCallback(function () {\n");
    page.push_str(&format!(
        "  var data = google.visualization.arrayToDataTable({});\n",
        script_json(&table.to_data_array())?
    ));
    page.push_str(&format!("  var tooltips = {};\n", script_json(tooltips)?));
    page.push_str(&format!("  var options = {};\n", script_json(options)?));
    page.push_str("  options.generateTooltip = function (row) { return tooltips[row]; };\n");
    page.push_str(&format!(
        "  var tree = new google.visualization.TreeMap(document.getElementById({}));\n",
        script_json(container.id())?
    ));
    page.push_str("  tree.draw(data, options);\n");
    page.push_str("});\n</script>\n</body>\n</html>\n");

    Ok(page)
}
