// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Macro resolver backed by a fixed name/value map.

use super::{ItemFields, MacroResolver};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static USER_MACRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\$([A-Z0-9_.]+)\}").expect("constant regex pattern is valid")
});

/// Replaces `{$NAME}` with a configured value; unknown macros stay as written.
#[derive(Clone, Debug, Default)]
pub struct MapMacroResolver {
    values: HashMap<String, String>,
}

impl MapMacroResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `{$name}`. `name` is given without braces.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn expand(&self, text: &str) -> String {
        USER_MACRO
            .replace_all(text, |caps: &Captures<'_>| {
                self.values
                    .get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

impl FromIterator<(String, String)> for MapMacroResolver {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl MacroResolver for MapMacroResolver {
    fn resolve_in_item(&self, item: ItemFields) -> ItemFields {
        ItemFields {
            host: item.host,
            key: self.expand(&item.key),
            parameter: self.expand(&item.parameter),
        }
    }

    fn resolve_in_trigger_expression(&self, text: &str) -> String {
        self.expand(text)
    }
}

#[cfg(test)]
#[path = "map_tests.rs"]
mod tests;
