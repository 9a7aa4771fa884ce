use serde::{Deserialize, Serialize};

use crate::core::{DateRangeState, DatedRow};
use crate::error::{RangeError, RangeResult};

use super::RangeSelector;

/// Serializable selector state used by regression tests and host debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSnapshot {
    pub state: DateRangeState,
    pub dataset_len: usize,
    pub selected_len: usize,
}

impl RangeSnapshot {
    /// Checks that the snapshot describes a state a selector could be in.
    ///
    /// An empty dataset requires `0, 0` indices, no labels and no selected
    /// rows. Otherwise indices must be ordered and in bounds, both labels
    /// present, and `selected_len` must match the inclusive index span.
    pub fn validate(&self) -> RangeResult<()> {
        let state = &self.state;
        if self.dataset_len == 0 {
            if state.index_range() != (0, 0) || !state.is_empty() || self.selected_len != 0 {
                return Err(RangeError::InvalidData(
                    "empty-dataset snapshot must have 0,0 indices, no labels and no selection"
                        .to_owned(),
                ));
            }
            return Ok(());
        }

        if state.start_index > state.end_index {
            return Err(RangeError::InvalidData(format!(
                "snapshot start index {} is after end index {}",
                state.start_index, state.end_index
            )));
        }
        if state.end_index >= self.dataset_len {
            return Err(RangeError::InvalidData(format!(
                "snapshot end index {} is out of bounds for {} rows",
                state.end_index, self.dataset_len
            )));
        }
        if state.start_date.is_none() || state.end_date.is_none() {
            return Err(RangeError::InvalidData(
                "snapshot of a non-empty dataset must carry both date labels".to_owned(),
            ));
        }
        let span = state.end_index - state.start_index + 1;
        if self.selected_len != span {
            return Err(RangeError::InvalidData(format!(
                "snapshot selected_len {} does not match index span {span}",
                self.selected_len
            )));
        }
        Ok(())
    }
}

impl<T: DatedRow> RangeSelector<T> {
    #[must_use]
    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot {
            state: self.state.clone(),
            dataset_len: self.dataset.len(),
            selected_len: self.selected_len(),
        }
    }
}
