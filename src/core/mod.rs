pub mod range_state;
pub mod types;
pub mod windowing;

pub use range_state::DateRangeState;
pub use types::{DataRow, DatedRow, parse_rows_json};
pub use windowing::{
    DateBound, clamp_index, compare_dates, is_date_label, locate_date_index,
    normalize_index_pair, resolve_selection, rows_in_index_window,
};
