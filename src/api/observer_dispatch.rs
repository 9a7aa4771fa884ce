use crate::core::DatedRow;
use crate::extensions::RangeContext;

use super::{RangeEvent, RangeSelector};

impl<T: DatedRow> RangeSelector<T> {
    pub(super) fn observer_context(&self) -> RangeContext {
        RangeContext {
            start_index: self.state.start_index,
            end_index: self.state.end_index,
            start_date: self.state.start_date.clone(),
            end_date: self.state.end_date.clone(),
            dataset_len: self.dataset.len(),
            selected_len: self.selected_len(),
        }
    }

    pub(super) fn emit_range_event(&mut self, event: RangeEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, &context);
        }
    }
}
