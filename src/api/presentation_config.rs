use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};

use super::validation::validate_presentation_config;

/// Colors and label for one stacked counter series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    /// Counter key read from each `DataRow`.
    pub key: String,
    pub label: String,
    pub background: String,
    pub border: String,
}

impl SeriesStyle {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        background: impl Into<String>,
        border: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            background: background.into(),
            border: border.into(),
        }
    }
}

/// How an axis range is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisBounds {
    /// Range ends at the first and last data value.
    #[default]
    Data,
    /// Range is extended to the nearest tick.
    Ticks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Presentation settings for the stacked bar chart fed by the filtered view.
///
/// The selector never reads this; it only shapes `StackedBarFrame` output.
/// Every field has a serde default so partial JSON files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPresentationConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_show_title")]
    pub show_title: bool,
    #[serde(default)]
    pub title_align: TitleAlign,
    #[serde(default = "default_stacked")]
    pub stacked: bool,
    /// Corner radius applied to the top of each bar.
    #[serde(default = "default_bar_top_radius")]
    pub bar_top_radius: f64,
    #[serde(default)]
    pub bar_bottom_radius: f64,
    /// Fitting applied to both axes.
    #[serde(default)]
    pub axis_bounds: AxisBounds,
    #[serde(default = "default_axis_color")]
    pub axis_color: String,
    #[serde(default = "default_axis_border_width")]
    pub axis_border_width: f64,
    #[serde(default = "default_series")]
    pub series: Vec<SeriesStyle>,
}

impl Default for ChartPresentationConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_title: default_show_title(),
            title_align: TitleAlign::default(),
            stacked: default_stacked(),
            bar_top_radius: default_bar_top_radius(),
            bar_bottom_radius: 0.0,
            axis_bounds: AxisBounds::default(),
            axis_color: default_axis_color(),
            axis_border_width: default_axis_border_width(),
            series: default_series(),
        }
    }
}

impl ChartPresentationConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Vec<SeriesStyle>) -> Self {
        self.series = series;
        self
    }

    pub fn validate(&self) -> RangeResult<()> {
        validate_presentation_config(self)
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> RangeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RangeError::InvalidData(format!("failed to serialize presentation config: {e}"))
        })
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> RangeResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            RangeError::InvalidData(format!("failed to parse presentation config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_title() -> String {
    "Cikkek".to_owned()
}

fn default_show_title() -> bool {
    true
}

fn default_stacked() -> bool {
    true
}

fn default_bar_top_radius() -> f64 {
    100.0
}

fn default_axis_color() -> String {
    "black".to_owned()
}

fn default_axis_border_width() -> f64 {
    2.0
}

fn default_series() -> Vec<SeriesStyle> {
    vec![
        SeriesStyle::new("count_positive", "Positive", "#4CAF50", "#5EC16A"),
        SeriesStyle::new("count_todo", "To do", "#4B84EE", "#4B84EE"),
        SeriesStyle::new("count_negative", "Negative", "#F44336", "#F44336"),
    ]
}
