use serde::{Deserialize, Serialize};

use crate::core::DataRow;

use super::{ChartPresentationConfig, RangeSelector};

/// One stacked series, values aligned with `StackedBarFrame::labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBarDataset {
    pub key: String,
    pub label: String,
    pub background: String,
    pub border: String,
    pub values: Vec<f64>,
}

/// Chart-ready projection of a row slice: one label per row, one dataset per
/// configured series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedBarFrame {
    pub labels: Vec<String>,
    pub datasets: Vec<StackedBarDataset>,
}

impl StackedBarFrame {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn dataset(&self, key: &str) -> Option<&StackedBarDataset> {
        self.datasets.iter().find(|dataset| dataset.key == key)
    }

    /// Stack height per label across all datasets.
    #[must_use]
    pub fn column_totals(&self) -> Vec<f64> {
        (0..self.labels.len())
            .map(|column| {
                self.datasets
                    .iter()
                    .filter_map(|dataset| dataset.values.get(column))
                    .sum()
            })
            .collect()
    }
}

/// Projects `rows` into stacked series. Rows missing a counter contribute 0.
#[must_use]
pub fn build_stacked_bar_frame(
    rows: &[DataRow],
    config: &ChartPresentationConfig,
) -> StackedBarFrame {
    let labels = rows.iter().map(|row| row.date.clone()).collect();
    let datasets = config
        .series
        .iter()
        .map(|series| StackedBarDataset {
            key: series.key.clone(),
            label: series.label.clone(),
            background: series.background.clone(),
            border: series.border.clone(),
            values: rows
                .iter()
                .map(|row| row.counter(&series.key).unwrap_or(0.0))
                .collect(),
        })
        .collect();
    StackedBarFrame { labels, datasets }
}

impl RangeSelector<DataRow> {
    /// Stacked series for the currently selected rows.
    #[must_use]
    pub fn stacked_bar_frame(&self, config: &ChartPresentationConfig) -> StackedBarFrame {
        build_stacked_bar_frame(self.filtered_view(), config)
    }
}
