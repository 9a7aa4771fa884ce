use std::fmt;
use std::sync::Arc;

use crate::core::{DataRow, DateRangeState, DatedRow, rows_in_index_window};
use crate::extensions::RangeObserver;

/// Selection facade consumed by host applications.
///
/// `RangeSelector` holds a shared read-only reference to the current dataset
/// and the inclusive `[start_index, end_index]` selection over it. Every public
/// transition leaves the selection valid for the dataset it was applied to:
/// indices ordered and in bounds, labels matching the rows at those indices,
/// and `filtered_view` equal to the inclusive slice between them.
pub struct RangeSelector<T: DatedRow = DataRow> {
    pub(super) dataset: Arc<[T]>,
    pub(super) state: DateRangeState,
    pub(super) observers: Vec<Box<dyn RangeObserver>>,
}

impl<T: DatedRow> RangeSelector<T> {
    /// Creates a selector in the empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dataset: Arc::from(Vec::new()),
            state: DateRangeState::empty(),
            observers: Vec::new(),
        }
    }

    /// Creates a selector already spanning `rows`.
    #[must_use]
    pub fn with_dataset(rows: impl Into<Arc<[T]>>) -> Self {
        let mut selector = Self::new();
        selector.on_dataset_changed(rows);
        selector
    }

    /// Rows between the current bounds, inclusive.
    ///
    /// Derived from the current state on every call, so it always reflects the
    /// latest transition.
    #[must_use]
    pub fn filtered_view(&self) -> &[T] {
        rows_in_index_window(&self.dataset, self.state.start_index, self.state.end_index)
    }

    #[must_use]
    pub fn start_index(&self) -> usize {
        self.state.start_index
    }

    #[must_use]
    pub fn end_index(&self) -> usize {
        self.state.end_index
    }

    #[must_use]
    pub fn start_date(&self) -> Option<&str> {
        self.state.start_date.as_deref()
    }

    #[must_use]
    pub fn end_date(&self) -> Option<&str> {
        self.state.end_date.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> &DateRangeState {
        &self.state
    }

    #[must_use]
    pub fn dataset(&self) -> &Arc<[T]> {
        &self.dataset
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    #[must_use]
    pub fn selected_len(&self) -> usize {
        self.filtered_view().len()
    }

    /// `true` when the selection covers every row of a non-empty dataset.
    #[must_use]
    pub fn is_full_range(&self) -> bool {
        !self.dataset.is_empty()
            && self.state.start_index == 0
            && self.state.end_index == self.dataset.len() - 1
    }
}

impl<T: DatedRow> Default for RangeSelector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DatedRow> fmt::Debug for RangeSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelector")
            .field("dataset_len", &self.dataset.len())
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
