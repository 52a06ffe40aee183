// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "warn";

// --- Catalog ---

/// Catalog snapshot path from TREX_CATALOG
pub fn catalog_path() -> Option<PathBuf> {
    std::env::var("TREX_CATALOG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Scanner limits ---

/// Nesting limit from TREX_MAX_DEPTH; unparsable values are ignored
pub fn max_depth() -> Option<usize> {
    std::env::var("TREX_MAX_DEPTH")
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
}

// --- Logging ---

/// Log filter directive: TREX_LOG > "warn"
pub fn log_filter() -> String {
    std::env::var("TREX_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
