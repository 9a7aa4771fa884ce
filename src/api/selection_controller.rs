use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{
    DateBound, DateRangeState, DatedRow, compare_dates, is_date_label, locate_date_index,
    normalize_index_pair, resolve_selection,
};
use crate::error::RangeResult;

use super::selection_input_validation::parse_slider_index;
use super::{RangeEvent, RangeSelector};

impl<T: DatedRow> RangeSelector<T> {
    /// Replaces the dataset and resets the selection to span all of it.
    ///
    /// Both bounds are reset together, so nothing from a previous (possibly
    /// longer) dataset survives the swap.
    pub fn on_dataset_changed(&mut self, rows: impl Into<Arc<[T]>>) {
        self.dataset = rows.into();
        self.state = DateRangeState::spanning(&self.dataset);
        debug!(
            rows_len = self.dataset.len(),
            start_date = self.state.start_date.as_deref(),
            end_date = self.state.end_date.as_deref(),
            "dataset replaced, selection reset to full range"
        );
        self.emit_range_event(RangeEvent::DatasetReplaced {
            rows_len: self.dataset.len(),
        });
    }

    /// Selects the inclusive index window between two requested bounds.
    ///
    /// Bounds may arrive in either order and out of range: a reversed pair is
    /// swapped, then each bound is clamped to `[0, len - 1]`. On an empty
    /// dataset the selection stays empty.
    pub fn set_selection(&mut self, requested_start: i64, requested_end: i64) {
        let len = self.dataset.len();
        let Some((start, end)) = resolve_selection(len, requested_start, requested_end) else {
            trace!(
                requested_start,
                requested_end, "selection ignored on empty dataset"
            );
            self.apply_state(DateRangeState::empty());
            return;
        };

        let ordered = normalize_index_pair(requested_start, requested_end);
        if ordered != (requested_start, requested_end) {
            trace!(requested_start, requested_end, "reversed selection swapped");
        }
        if usize::try_from(ordered.0).ok() != Some(start)
            || usize::try_from(ordered.1).ok() != Some(end)
        {
            trace!(
                requested_start = ordered.0,
                requested_end = ordered.1,
                start,
                end,
                len,
                "selection clamped to dataset bounds"
            );
        }

        self.apply_state(DateRangeState::at(&self.dataset, start, end));
    }

    /// Parses two raw slider values and applies them as a selection.
    ///
    /// Inputs are validated before anything changes; on error the selection is
    /// left as it was.
    pub fn set_selection_from_input(&mut self, start: &str, end: &str) -> RangeResult<()> {
        let start = parse_slider_index(start)?;
        let end = parse_slider_index(end)?;
        self.set_selection(start, end);
        Ok(())
    }

    /// Selects the rows dated between `start_date` and `end_date`, inclusive.
    ///
    /// Bounds snap inward to the nearest rows. Returns `false` and leaves the
    /// selection untouched when no row falls inside the window, or when the
    /// dataset is dated and either bound is not a date.
    pub fn set_date_selection(&mut self, start_date: &str, end_date: &str) -> bool {
        let dated = self
            .dataset
            .first()
            .is_some_and(|row| is_date_label(row.date_label()));
        if dated && !(is_date_label(start_date) && is_date_label(end_date)) {
            debug!(start_date, end_date, "date window bound is not a date, selection kept");
            return false;
        }

        let (from, to) = match compare_dates(start_date, end_date) {
            Ordering::Greater => (end_date, start_date),
            _ => (start_date, end_date),
        };

        let start = locate_date_index(&self.dataset, from, DateBound::Start);
        let end = locate_date_index(&self.dataset, to, DateBound::End);
        match (start, end) {
            (Some(start), Some(end)) if start <= end => {
                self.apply_state(DateRangeState::at(&self.dataset, start, end));
                true
            }
            _ => {
                debug!(from, to, "date window contains no rows, selection kept");
                false
            }
        }
    }

    /// Re-selects the full range of the current dataset.
    pub fn reset_selection(&mut self) {
        self.apply_state(DateRangeState::spanning(&self.dataset));
    }

    /// Commits `next` and notifies observers. Returns `false` for a no-op.
    fn apply_state(&mut self, next: DateRangeState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        debug!(
            start_index = self.state.start_index,
            end_index = self.state.end_index,
            start_date = self.state.start_date.as_deref(),
            end_date = self.state.end_date.as_deref(),
            "selection changed"
        );
        self.emit_range_event(RangeEvent::SelectionChanged {
            start_index: self.state.start_index,
            end_index: self.state.end_index,
        });
        true
    }
}
