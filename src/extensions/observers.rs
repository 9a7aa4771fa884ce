use serde::{Deserialize, Serialize};

/// Read-only selection state handed to observers with every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeContext {
    pub start_index: usize,
    pub end_index: usize,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub dataset_len: usize,
    pub selected_len: usize,
}

/// Notifications emitted once a selector transition has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeEvent {
    DatasetReplaced { rows_len: usize },
    SelectionChanged { start_index: usize, end_index: usize },
}

/// Hook for presentation code that mirrors the selection (charts, tables,
/// slider widgets).
///
/// Observers read state through the context only; they cannot mutate the
/// selector from inside a callback.
pub trait RangeObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: RangeEvent, context: &RangeContext);
}
