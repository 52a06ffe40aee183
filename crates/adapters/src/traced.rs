// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::catalog::{Catalog, CatalogError, FunctionRow, ItemRecord};
use crate::macros::{ItemFields, MacroResolver};
use std::time::Instant;
use trex_core::{FunctionId, ItemId, TriggerId};

/// Wrapper that adds tracing to any Catalog
#[derive(Clone)]
pub struct TracedCatalog<C> {
    inner: C,
}

impl<C> TracedCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Catalog> Catalog for TracedCatalog<C> {
    fn host_exists(&self, host: &str) -> bool {
        let exists = self.inner.host_exists(host);
        tracing::trace!(host, exists, "host checked");
        exists
    }

    fn lookup_item(&self, host: &str, key: &str) -> Option<ItemRecord> {
        tracing::info_span!("catalog.lookup_item", host, key).in_scope(|| {
            let start = Instant::now();
            let result = self.inner.lookup_item(host, key);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Some(item) => tracing::debug!(item_id = %item.item_id, elapsed_ms, "item found"),
                None => tracing::debug!(elapsed_ms, "item not found"),
            }
            result
        })
    }

    fn lookup_function(&self, id: FunctionId) -> Option<FunctionRow> {
        tracing::info_span!("catalog.lookup_function", function_id = %id).in_scope(|| {
            let start = Instant::now();
            let result = self.inner.lookup_function(id);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Some(row) => {
                    tracing::debug!(host = row.host.as_str(), elapsed_ms, "function found")
                }
                None => tracing::warn!(elapsed_ms, "dangling function reference"),
            }
            result
        })
    }

    fn insert_function_reference(
        &self,
        item_id: ItemId,
        trigger_id: TriggerId,
        function: &str,
        parameter: &str,
    ) -> Result<FunctionId, CatalogError> {
        tracing::info_span!("catalog.insert", %item_id, %trigger_id, function).in_scope(|| {
            let start = Instant::now();
            let result = self
                .inner
                .insert_function_reference(item_id, trigger_id, function, parameter);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(id) => {
                    tracing::info!(function_id = %id, elapsed_ms, "function reference stored")
                }
                Err(e) => tracing::error!(elapsed_ms, error = %e, "insert failed"),
            }
            result
        })
    }
}

/// Wrapper that adds tracing to any MacroResolver
#[derive(Clone)]
pub struct TracedMacroResolver<M> {
    inner: M,
}

impl<M> TracedMacroResolver<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: MacroResolver> MacroResolver for TracedMacroResolver<M> {
    fn resolve_in_item(&self, item: ItemFields) -> ItemFields {
        let before = item.key.clone();
        let resolved = self.inner.resolve_in_item(item);
        if resolved.key != before {
            tracing::debug!(
                key = before.as_str(),
                resolved = resolved.key.as_str(),
                "item key resolved"
            );
        }
        resolved
    }

    fn resolve_in_trigger_expression(&self, text: &str) -> String {
        let resolved = self.inner.resolve_in_trigger_expression(text);
        tracing::trace!(changed = resolved != text, "expression macros resolved");
        resolved
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
