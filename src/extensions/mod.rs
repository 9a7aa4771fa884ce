//! Outbound hooks for code that reacts to selection changes.

pub mod observers;

pub use observers::{RangeContext, RangeEvent, RangeObserver};
