// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request-local parse memoization.

use crate::error::SyntaxError;
use crate::parsed::ParsedExpression;
use crate::scanner::{parse_with_config, ScanConfig};
use crate::tree::ExpressionTree;
use std::collections::hash_map::{Entry as Slot, HashMap};
use std::sync::Arc;

/// Parse outcome for one text, plus its tree once asked for.
#[derive(Debug)]
struct Entry {
    parsed: Result<Arc<ParsedExpression>, SyntaxError>,
    tree: Option<Arc<ExpressionTree>>,
}

/// Memoizes parse results, and the trees built from them, by exact
/// expression text.
///
/// Entries are never invalidated. Create one cache per unit of work and
/// drop it afterwards; it is not meant to be shared between threads.
#[derive(Debug, Default)]
pub struct ExpressionCache {
    config: ScanConfig,
    entries: HashMap<String, Entry>,
    hits: u64,
}

impl ExpressionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    fn entry(&mut self, text: &str) -> &mut Entry {
        match self.entries.entry(text.to_string()) {
            Slot::Occupied(slot) => {
                self.hits += 1;
                tracing::debug!(len = text.len(), "parse cache hit");
                slot.into_mut()
            }
            Slot::Vacant(slot) => {
                tracing::debug!(len = text.len(), "parse cache miss");
                slot.insert(Entry {
                    parsed: parse_with_config(text, &self.config).map(Arc::new),
                    tree: None,
                })
            }
        }
    }

    /// Parse `text`, reusing an earlier result for the same string.
    ///
    /// Failed parses are cached too.
    pub fn parse(&mut self, text: &str) -> Result<Arc<ParsedExpression>, SyntaxError> {
        self.entry(text).parsed.clone()
    }

    /// Parse `text` and build its tree, both reused on later calls.
    pub fn tree(
        &mut self,
        text: &str,
    ) -> Result<(Arc<ParsedExpression>, Arc<ExpressionTree>), SyntaxError> {
        let entry = self.entry(text);
        let parsed = entry.parsed.clone()?;
        let tree = entry
            .tree
            .get_or_insert_with(|| Arc::new(ExpressionTree::build(&parsed)))
            .clone();
        Ok((parsed, tree))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
