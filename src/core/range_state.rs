use serde::{Deserialize, Serialize};

use crate::core::DatedRow;

/// Current selection: inclusive index bounds plus the date labels found at them.
///
/// Labels are derived from the dataset and are `None` only when the dataset is
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeState {
    pub start_index: usize,
    pub end_index: usize,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRangeState {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selection covering every row, or the empty state for an empty slice.
    #[must_use]
    pub fn spanning<T: DatedRow>(rows: &[T]) -> Self {
        match rows.len() {
            0 => Self::empty(),
            len => Self::at(rows, 0, len - 1),
        }
    }

    /// Builds a state for already-resolved bounds. A bound with no row behind it
    /// gets a `None` label instead of panicking.
    #[must_use]
    pub(crate) fn at<T: DatedRow>(rows: &[T], start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
            start_date: label_at(rows, start_index),
            end_date: label_at(rows, end_index),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    #[must_use]
    pub fn index_range(&self) -> (usize, usize) {
        (self.start_index, self.end_index)
    }
}

fn label_at<T: DatedRow>(rows: &[T], index: usize) -> Option<String> {
    rows.get(index).map(|row| row.date_label().to_owned())
}
