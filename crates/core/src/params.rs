// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Function parameter text helpers.

/// Normalize one raw parameter.
///
/// Surrounding whitespace is trimmed. A parameter that starts with a double
/// quote loses its quotes and has `\"` unescaped; anything else is returned
/// as-is.
pub fn unquote_param(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix('"') else {
        return trimmed.to_string();
    };
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\\\"", "\"")
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
