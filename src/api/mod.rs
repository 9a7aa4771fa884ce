mod chart_series;
mod dataset_feed;
mod json_contract;
mod observer_dispatch;
mod observer_registry;
mod presentation_config;
mod range_selector;
mod range_snapshot;
mod selection_controller;
mod selection_input_validation;
mod validation;

pub use chart_series::{StackedBarDataset, StackedBarFrame, build_stacked_bar_frame};
pub use dataset_feed::{DataSource, DatasetFeed, DatasetSubscriber};
pub use json_contract::{RANGE_SNAPSHOT_JSON_SCHEMA_V1, RangeSnapshotJsonContractV1};
pub use presentation_config::{AxisBounds, ChartPresentationConfig, SeriesStyle, TitleAlign};
pub use range_selector::RangeSelector;
pub use range_snapshot::RangeSnapshot;
pub use selection_input_validation::{index_from_f64, parse_slider_index};

pub(crate) use crate::extensions::RangeEvent;
