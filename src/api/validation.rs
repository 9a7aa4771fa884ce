use std::collections::HashSet;

use crate::error::{RangeError, RangeResult};

use super::ChartPresentationConfig;

// CSS basic color keywords plus `orange`, `grey` and `transparent`.
const NAMED_COLORS: [&str; 20] = [
    "aqua",
    "black",
    "blue",
    "fuchsia",
    "gray",
    "green",
    "grey",
    "lime",
    "maroon",
    "navy",
    "olive",
    "orange",
    "purple",
    "red",
    "silver",
    "teal",
    "transparent",
    "white",
    "yellow",
    "cyan",
];

pub(super) fn validate_presentation_config(config: &ChartPresentationConfig) -> RangeResult<()> {
    validate_non_negative("bar top radius", config.bar_top_radius)?;
    validate_non_negative("bar bottom radius", config.bar_bottom_radius)?;
    validate_non_negative("axis border width", config.axis_border_width)?;
    validate_color("axis color", &config.axis_color)?;

    let mut seen = HashSet::with_capacity(config.series.len());
    for series in &config.series {
        if series.key.trim().is_empty() {
            return Err(RangeError::InvalidData(
                "series key must not be empty".to_owned(),
            ));
        }
        if !seen.insert(series.key.as_str()) {
            return Err(RangeError::InvalidData(format!(
                "series key `{}` is configured more than once",
                series.key
            )));
        }
        validate_color("series background color", &series.background)?;
        validate_color("series border color", &series.border)?;
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> RangeResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RangeError::InvalidData(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn validate_color(field: &str, value: &str) -> RangeResult<()> {
    if is_hex_color(value) || is_color_name(value) {
        return Ok(());
    }
    Err(RangeError::InvalidData(format!(
        "{field} must be #RGB, #RRGGBB or a basic CSS color name, got `{value}`"
    )))
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|byte| byte.is_ascii_hexdigit())
    })
}

fn is_color_name(value: &str) -> bool {
    NAMED_COLORS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(value))
}
