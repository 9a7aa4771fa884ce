use crate::error::{RangeError, RangeResult};

// 2^63, the first f64 past i64::MAX.
const I64_UPPER_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;

/// Parses a raw slider value into a strict integer index.
///
/// Accepts surrounding whitespace and an optional sign; rejects decimals,
/// exponents, empty strings and anything that does not fit in `i64`.
pub fn parse_slider_index(input: &str) -> RangeResult<i64> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid_index(input));
    }
    trimmed.parse::<i64>().map_err(|_| invalid_index(input))
}

/// Converts a numeric widget value into an index without silent truncation.
pub fn index_from_f64(value: f64) -> RangeResult<i64> {
    if !value.is_finite()
        || value.fract() != 0.0
        || value < -I64_UPPER_EXCLUSIVE
        || value >= I64_UPPER_EXCLUSIVE
    {
        return Err(invalid_index(&value.to_string()));
    }
    Ok(value as i64)
}

fn invalid_index(input: &str) -> RangeError {
    RangeError::InvalidIndex {
        input: input.to_owned(),
    }
}
