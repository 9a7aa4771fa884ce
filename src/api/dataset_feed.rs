use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::DatedRow;
use crate::error::RangeResult;

use super::RangeSelector;

/// Upstream supplier of rows, e.g. an authenticated HTTP fetcher.
pub trait DataSource<T> {
    fn load(&self) -> RangeResult<Vec<T>>;
}

impl<T, F> DataSource<T> for F
where
    F: Fn() -> RangeResult<Vec<T>>,
{
    fn load(&self) -> RangeResult<Vec<T>> {
        self()
    }
}

/// Receiver of full dataset replacements.
pub trait DatasetSubscriber<T> {
    fn on_dataset_replaced(&mut self, rows: &Arc<[T]>);
}

impl<T: DatedRow> DatasetSubscriber<T> for RangeSelector<T> {
    fn on_dataset_replaced(&mut self, rows: &Arc<[T]>) {
        self.on_dataset_changed(Arc::clone(rows));
    }
}

impl<T: DatedRow> DatasetSubscriber<T> for Rc<RefCell<RangeSelector<T>>> {
    fn on_dataset_replaced(&mut self, rows: &Arc<[T]>) {
        self.borrow_mut().on_dataset_changed(Arc::clone(rows));
    }
}

/// Owner of the current dataset and the subscribers watching it.
///
/// Every delivery is a full replacement. Subscribers are notified
/// synchronously, in registration order, before `replace` returns.
pub struct DatasetFeed<T> {
    rows: Arc<[T]>,
    subscribers: Vec<Box<dyn DatasetSubscriber<T>>>,
}

impl<T> DatasetFeed<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    #[must_use]
    pub fn with_rows(rows: impl Into<Arc<[T]>>) -> Self {
        Self {
            rows: rows.into(),
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &Arc<[T]> {
        &self.rows
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Adds a subscriber and immediately hands it the current dataset.
    pub fn subscribe(&mut self, mut subscriber: Box<dyn DatasetSubscriber<T>>) {
        subscriber.on_dataset_replaced(&self.rows);
        self.subscribers.push(subscriber);
    }

    /// Swaps in a new dataset and notifies every subscriber.
    pub fn replace(&mut self, rows: impl Into<Arc<[T]>>) {
        self.rows = rows.into();
        debug!(
            rows_len = self.rows.len(),
            subscribers = self.subscribers.len(),
            "dataset feed replaced"
        );
        for subscriber in &mut self.subscribers {
            subscriber.on_dataset_replaced(&self.rows);
        }
    }

    /// Loads from `source` and replaces the dataset. Returns the new row count.
    ///
    /// A failed load keeps the current dataset and notifies nobody.
    pub fn refresh(&mut self, source: &dyn DataSource<T>) -> RangeResult<usize> {
        let rows = source.load().inspect_err(|err| {
            warn!(error = %err, "data source load failed, keeping current dataset");
        })?;
        let rows_len = rows.len();
        self.replace(rows);
        Ok(rows_len)
    }
}

impl<T> Default for DatasetFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DatasetFeed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetFeed")
            .field("rows_len", &self.rows.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
