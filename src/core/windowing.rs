use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};

use crate::core::DatedRow;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;
const TIME_FORMAT: &str = "%H:%M:%S";

/// Which edge of a date window a lookup resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// First row dated on or after the requested date.
    Start,
    /// Last row dated on or before the requested date.
    End,
}

/// Orders a requested `(start, end)` pair.
///
/// Only the two requested values are compared, never partially updated state.
#[must_use]
pub fn normalize_index_pair(start: i64, end: i64) -> (i64, i64) {
    if start <= end { (start, end) } else { (end, start) }
}

/// Clamps `value` into `[0, len - 1]`. Returns 0 for an empty dataset.
#[must_use]
pub fn clamp_index(value: i64, len: usize) -> usize {
    let Some(last) = len.checked_sub(1) else {
        return 0;
    };
    if value <= 0 {
        return 0;
    }
    usize::try_from(value).map_or(last, |index| index.min(last))
}

/// Normalizes then clamps a requested selection against `len` rows.
///
/// Returns `None` when there are no rows to select.
#[must_use]
pub fn resolve_selection(len: usize, start: i64, end: i64) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let (start, end) = normalize_index_pair(start, end);
    Some((clamp_index(start, len), clamp_index(end, len)))
}

/// Returns the inclusive slice `rows[start..=end]`.
///
/// Out-of-range or reversed bounds yield an empty slice rather than a panic.
#[must_use]
pub fn rows_in_index_window<T>(rows: &[T], start: usize, end: usize) -> &[T] {
    if start > end || end >= rows.len() {
        return &[];
    }
    &rows[start..=end]
}

/// Locates the row index bounding `date` on the given side.
///
/// Rows must be sorted ascending by date. Returns `None` when no row satisfies
/// the bound (the date lies entirely before or after the dataset).
#[must_use]
pub fn locate_date_index<T: DatedRow>(rows: &[T], date: &str, bound: DateBound) -> Option<usize> {
    match bound {
        DateBound::Start => {
            let index =
                rows.partition_point(|row| compare_dates(row.date_label(), date) == Ordering::Less);
            (index < rows.len()).then_some(index)
        }
        DateBound::End => {
            let after = rows
                .partition_point(|row| compare_dates(row.date_label(), date) != Ordering::Greater);
            after.checked_sub(1)
        }
    }
}

/// Compares date labels as calendar dates when both parse, otherwise as text.
#[must_use]
pub fn compare_dates(left: &str, right: &str) -> Ordering {
    match (parse_date(left), parse_date(right)) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => left.cmp(right),
    }
}

/// `true` when `label` reads as `YYYY-MM-DD`, optionally followed by a time.
#[must_use]
pub fn is_date_label(label: &str) -> bool {
    parse_date(label).is_some()
}

fn parse_date(label: &str) -> Option<NaiveDate> {
    let trimmed = label.trim();
    let date_part = match trimmed.get(DATE_LEN..) {
        None | Some("") => trimmed,
        // a suffix is only allowed when it is a time component
        Some(rest) if rest.starts_with(['T', ' ']) && is_time_suffix(&rest[1..]) => {
            &trimmed[..DATE_LEN]
        }
        Some(_) => return None,
    };
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

fn is_time_suffix(rest: &str) -> bool {
    let time = rest.get(..8).unwrap_or(rest);
    NaiveTime::parse_from_str(time, TIME_FORMAT).is_ok()
        && rest[time.len()..]
            .bytes()
            .all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b':' | b'+' | b'-' | b'Z'))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{
        DateBound, clamp_index, compare_dates, is_date_label, locate_date_index,
        normalize_index_pair, resolve_selection, rows_in_index_window,
    };

    const ROWS: [&str; 5] = [
        "2024-01-01",
        "2024-01-03",
        "2024-01-05",
        "2024-01-07",
        "2024-01-09",
    ];

    #[test]
    fn normalize_swaps_only_reversed_pairs() {
        assert_eq!(normalize_index_pair(3, 1), (1, 3));
        assert_eq!(normalize_index_pair(1, 3), (1, 3));
        assert_eq!(normalize_index_pair(2, 2), (2, 2));
        assert_eq!(normalize_index_pair(i64::MAX, i64::MIN), (i64::MIN, i64::MAX));
    }

    #[test]
    fn clamp_handles_extremes_and_empty() {
        assert_eq!(clamp_index(-2, 5), 0);
        assert_eq!(clamp_index(10, 5), 4);
        assert_eq!(clamp_index(i64::MAX, 5), 4);
        assert_eq!(clamp_index(3, 5), 3);
        assert_eq!(clamp_index(3, 0), 0);
    }

    #[test]
    fn resolve_selection_is_none_for_empty_dataset() {
        assert_eq!(resolve_selection(0, 1, 2), None);
        assert_eq!(resolve_selection(5, 10, -2), Some((0, 4)));
    }

    #[test]
    fn index_window_is_inclusive_and_never_panics() {
        assert_eq!(rows_in_index_window(&ROWS, 1, 3), &ROWS[1..4]);
        assert_eq!(rows_in_index_window(&ROWS, 4, 4), &ROWS[4..]);
        assert!(rows_in_index_window(&ROWS, 3, 1).is_empty());
        assert!(rows_in_index_window(&ROWS, 0, 5).is_empty());
        assert!(rows_in_index_window::<&str>(&[], 0, 0).is_empty());
    }

    #[test]
    fn locate_date_index_snaps_inward_between_rows() {
        assert_eq!(locate_date_index(&ROWS, "2024-01-04", DateBound::Start), Some(2));
        assert_eq!(locate_date_index(&ROWS, "2024-01-04", DateBound::End), Some(1));
        assert_eq!(locate_date_index(&ROWS, "2024-01-05", DateBound::Start), Some(2));
        assert_eq!(locate_date_index(&ROWS, "2024-01-05", DateBound::End), Some(2));
    }

    #[test]
    fn locate_date_index_outside_dataset() {
        assert_eq!(locate_date_index(&ROWS, "2023-12-31", DateBound::End), None);
        assert_eq!(locate_date_index(&ROWS, "2023-12-31", DateBound::Start), Some(0));
        assert_eq!(locate_date_index(&ROWS, "2024-02-01", DateBound::Start), None);
        assert_eq!(locate_date_index(&ROWS, "2024-02-01", DateBound::End), Some(4));
    }

    #[test]
    fn compare_dates_uses_calendar_order_when_parseable() {
        assert_eq!(compare_dates("2024-01-09", "2024-01-10T00:00:00"), Ordering::Less);
        assert_eq!(compare_dates("2024-01-09", "2024-01-09"), Ordering::Equal);
        assert_eq!(compare_dates("week 2", "week 10"), Ordering::Greater);
        assert_eq!(compare_dates("2024-01-09 08:30:00", "2024-01-09"), Ordering::Equal);
        assert_eq!(compare_dates("2024-01-09T08:30:00.125Z", "2024-01-09"), Ordering::Equal);
    }

    #[test]
    fn compare_dates_treats_trailing_junk_as_text() {
        assert_eq!(compare_dates("2024-01-05junk", "2024-01-05"), Ordering::Greater);
        assert_eq!(compare_dates("2024-01-05Tnoon", "2024-01-05"), Ordering::Greater);
        assert!(!is_date_label("2024-01-05junk"));
        assert!(is_date_label(" 2024-01-05 "));
        assert_eq!(
            locate_date_index(&ROWS, "2024-01-01zzz", DateBound::End),
            Some(0)
        );
        assert_eq!(
            locate_date_index(&ROWS, "2024-01-01zzz", DateBound::Start),
            Some(1)
        );
    }
}
