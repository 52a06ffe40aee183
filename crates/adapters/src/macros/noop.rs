// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op macro resolver.

use super::{ItemFields, MacroResolver};

/// Macro resolver that leaves everything as written.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpMacroResolver;

impl NoOpMacroResolver {
    pub fn new() -> Self {
        Self
    }
}

impl MacroResolver for NoOpMacroResolver {
    fn resolve_in_item(&self, item: ItemFields) -> ItemFields {
        item
    }

    fn resolve_in_trigger_expression(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
