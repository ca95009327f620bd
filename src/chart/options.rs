//! Treemap style and behavior configuration.
//!
//! Field names serialise to the option names the chart library expects.

use crate::utils::config::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, FONT_COLOR, HEADER_HEIGHT, MAX_COLOR, MID_COLOR, MIN_COLOR,
};
use serde::{Deserialize, Serialize};

/// Options handed to the treemap library with every draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapOptions {
    pub highlight_on_mouse_over: bool,
    /// Levels shown at once
    pub max_depth: u32,
    /// Extra levels pre-rendered below `max_depth`
    pub max_post_depth: u32,
    pub min_color: String,
    pub mid_color: String,
    pub max_color: String,
    pub header_height: u32,
    pub font_color: String,
    pub show_scale: bool,
    pub use_weighted_average_for_aggregation: bool,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for TreemapOptions {
    fn default() -> Self {
        Self {
            highlight_on_mouse_over: false,
            max_depth: 1,
            max_post_depth: 2,
            min_color: MIN_COLOR.to_string(),
            mid_color: MID_COLOR.to_string(),
            max_color: MAX_COLOR.to_string(),
            header_height: HEADER_HEIGHT,
            font_color: FONT_COLOR.to_string(),
            show_scale: false,
            use_weighted_average_for_aggregation: true,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: None,
        }
    }
}

impl TreemapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chart size, keeping the defaults for anything left `None`
    pub fn with_size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width.unwrap_or(DEFAULT_WIDTH);
        self.height = height.unwrap_or(DEFAULT_HEIGHT);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
