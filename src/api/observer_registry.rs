use crate::core::DatedRow;
use crate::error::{RangeError, RangeResult};
use crate::extensions::RangeObserver;

use super::RangeSelector;

impl<T: DatedRow> RangeSelector<T> {
    /// Registers an observer with a unique, non-empty identifier.
    pub fn register_observer(&mut self, observer: Box<dyn RangeObserver>) -> RangeResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(RangeError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(RangeError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        match self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            Some(position) => {
                self.observers.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }
}
