//! date-range-rs: contiguous date-range selection for time-ordered datasets.
//!
//! A [`RangeSelector`] owns the selection over a dataset supplied by an
//! external data source, keeps it normalized and in bounds, and exposes the
//! selected rows as a slice for chart and table views.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{DatasetFeed, RangeSelector};
pub use crate::core::{DataRow, DateRangeState, DatedRow};
pub use error::{RangeError, RangeResult};
