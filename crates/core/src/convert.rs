// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric suffix conversion (`1K`, `5m`, `2d`).

use regex::Regex;
use std::sync::LazyLock;

/// Leading signed decimal with an optional one-letter multiplier.
#[allow(clippy::expect_used)]
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<value>[-+]?[0-9]+(?:\.[0-9]*)?)(?P<mult>[KMGTsmhdw]?)")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static WHOLE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<value>[-+]?[0-9]+(?:\.[0-9]*)?)(?P<mult>[KMGTsmhdw]?)\s*$")
        .expect("constant regex pattern is valid")
});

/// Multiplier for a size (`K`..`T`, powers of 1024) or time (`s`..`w`) suffix.
pub fn suffix_multiplier(suffix: char) -> Option<f64> {
    let m = match suffix {
        'K' => 1024.0,
        'M' => 1024.0 * 1024.0,
        'G' => 1024.0 * 1024.0 * 1024.0,
        'T' => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        's' => 1.0,
        'm' => 60.0,
        'h' => 3600.0,
        'd' => 86400.0,
        'w' => 604800.0,
        _ => return None,
    };
    Some(m)
}

fn apply(caps: &regex::Captures<'_>) -> Option<f64> {
    let value: f64 = caps.name("value")?.as_str().parse().ok()?;
    let mult = caps
        .name("mult")
        .and_then(|m| m.as_str().chars().next())
        .and_then(suffix_multiplier)
        .unwrap_or(1.0);
    Some(value * mult)
}

/// Convert a leading suffixed number to a plain number.
///
/// Text without leading digits is returned unchanged. Anything after the
/// number and its suffix is dropped.
pub fn convert(value: &str) -> String {
    LEADING_NUMBER
        .captures(value)
        .and_then(|caps| apply(&caps))
        .map(format_number)
        .unwrap_or_else(|| value.to_string())
}

/// Parse text that is exactly one number with an optional suffix.
pub fn parse_number(value: &str) -> Option<f64> {
    WHOLE_NUMBER.captures(value).and_then(|caps| apply(&caps))
}

/// Render a number without a trailing `.0` when it is integral.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
