//! Configuration and constants for the CLI.

/// Current share report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Chart size used when the caller leaves width/height unspecified
pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 400;

// Three-stop gradient keyed by value (low -> mid -> high)
pub const MIN_COLOR: &str = "#009688";
pub const MID_COLOR: &str = "#f7f7f7";
pub const MAX_COLOR: &str = "#ee8100";
pub const FONT_COLOR: &str = "black";
pub const HEADER_HEIGHT: u32 = 15;

/// Prefix of the synthetic label the chart library gives collapsed siblings.
/// Matching on it is a text heuristic and breaks if the library changes its label format.
pub const OTHERS_MARKER: &str = "(Others:";

/// Display name substituted for any `(Others: ...)` label
pub const OTHERS_LABEL: &str = "(Others)";

// Google Charts loader used by the standalone page backend
pub const GOOGLE_CHARTS_LOADER: &str = "https://www.gstatic.com/charts/loader.js";
pub const GOOGLE_CHARTS_VERSION: &str = "42";

/// Column labels used when the input table has no header row
pub const DEFAULT_COLUMNS: [&str; 3] = ["Name", "Parent", "Value"];
