use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{RangeError, RangeResult};

/// Row types the selector can window over.
///
/// Rows are expected in ascending date order; the selector never re-sorts.
pub trait DatedRow {
    fn date_label(&self) -> &str;
}

/// One dated record with named numeric counters.
///
/// Counters are flattened on the wire, so
/// `{"date": "2024-03-01", "count_positive": 4, "total_count": 9}` decodes with
/// `count_positive` and `total_count` as counters, in that order. Extra fields
/// that are `null` or not numbers are dropped rather than failing the row;
/// chart projections read a dropped counter as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireDataRow")]
pub struct DataRow {
    pub date: String,
    #[serde(flatten)]
    pub counters: IndexMap<String, f64>,
}

impl DataRow {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            counters: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_counter(mut self, key: impl Into<String>, value: f64) -> Self {
        self.counters.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn counter(&self, key: &str) -> Option<f64> {
        self.counters.get(key).copied()
    }
}

#[derive(Deserialize)]
struct WireDataRow {
    date: String,
    #[serde(flatten)]
    fields: IndexMap<String, Value>,
}

impl From<WireDataRow> for DataRow {
    fn from(wire: WireDataRow) -> Self {
        let mut counters = IndexMap::with_capacity(wire.fields.len());
        for (key, value) in wire.fields {
            match value.as_f64() {
                Some(number) => {
                    counters.insert(key, number);
                }
                None => trace!(date = %wire.date, key = %key, "non-numeric row field skipped"),
            }
        }
        Self {
            date: wire.date,
            counters,
        }
    }
}

impl DatedRow for DataRow {
    fn date_label(&self) -> &str {
        &self.date
    }
}

impl DatedRow for String {
    fn date_label(&self) -> &str {
        self
    }
}

impl DatedRow for &str {
    fn date_label(&self) -> &str {
        self
    }
}

/// Decodes the row array delivered by a data source.
///
/// Only structural problems fail: input that is not an array of objects, or a
/// row without a string `date`. Counter values are not validated.
pub fn parse_rows_json(input: &str) -> RangeResult<Vec<DataRow>> {
    serde_json::from_str(input)
        .map_err(|e| RangeError::InvalidData(format!("failed to parse data rows: {e}")))
}
