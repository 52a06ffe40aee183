// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake catalog for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{
    Catalog, CatalogError, FunctionRow, ItemKind, ItemOrigin, ItemRecord, ItemStatus,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use trex_core::{FunctionId, IdSequence, ItemId, TriggerId, ValueType};

/// Recorded catalog call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    HostExists {
        host: String,
    },
    LookupItem {
        host: String,
        key: String,
    },
    LookupFunction {
        id: FunctionId,
    },
    Insert {
        item_id: ItemId,
        trigger_id: TriggerId,
        function: String,
        parameter: String,
    },
}

#[derive(Default)]
struct FakeCatalogState {
    items: HashMap<(String, String), ItemRecord>,
    functions: HashMap<FunctionId, FunctionRow>,
    calls: Vec<CatalogCall>,
    fail_inserts: bool,
}

/// Fake catalog for testing
#[derive(Clone)]
pub struct FakeCatalog {
    inner: Arc<Mutex<FakeCatalogState>>,
    item_ids: IdSequence,
    function_ids: IdSequence,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeCatalogState::default())),
            item_ids: IdSequence::starting_at(100),
            function_ids: IdSequence::starting_at(1000),
        }
    }
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active item and return its id.
    pub fn add_item(&self, host: &str, key: &str, value_type: ValueType) -> ItemId {
        let item_id = ItemId::new(self.item_ids.next());
        self.put_item(
            host,
            key,
            ItemRecord {
                item_id,
                value_type,
                status: ItemStatus::Active,
                kind: ItemKind::Regular,
                origin: ItemOrigin::Plain,
            },
        );
        item_id
    }

    /// Add or replace an item with explicit fields.
    pub fn put_item(&self, host: &str, key: &str, record: ItemRecord) {
        self.inner
            .lock()
            .items
            .insert((host.to_string(), key.to_string()), record);
    }

    /// Make every later insert fail.
    pub fn fail_inserts(&self) {
        self.inner.lock().fail_inserts = true;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<CatalogCall> {
        self.inner.lock().calls.clone()
    }

    /// Stored function rows, ordered by id.
    pub fn functions(&self) -> Vec<FunctionRow> {
        let mut rows: Vec<_> = self.inner.lock().functions.values().cloned().collect();
        rows.sort_by_key(|r| r.function_id.get());
        rows
    }
}

impl Catalog for FakeCatalog {
    fn host_exists(&self, host: &str) -> bool {
        let mut state = self.inner.lock();
        state.calls.push(CatalogCall::HostExists {
            host: host.to_string(),
        });
        state.items.keys().any(|(h, _)| h == host)
    }

    fn lookup_item(&self, host: &str, key: &str) -> Option<ItemRecord> {
        let mut state = self.inner.lock();
        state.calls.push(CatalogCall::LookupItem {
            host: host.to_string(),
            key: key.to_string(),
        });
        state.items.get(&(host.to_string(), key.to_string())).cloned()
    }

    fn lookup_function(&self, id: FunctionId) -> Option<FunctionRow> {
        let mut state = self.inner.lock();
        state.calls.push(CatalogCall::LookupFunction { id });
        state.functions.get(&id).cloned()
    }

    fn insert_function_reference(
        &self,
        item_id: ItemId,
        trigger_id: TriggerId,
        function: &str,
        parameter: &str,
    ) -> Result<FunctionId, CatalogError> {
        let mut state = self.inner.lock();
        state.calls.push(CatalogCall::Insert {
            item_id,
            trigger_id,
            function: function.to_string(),
            parameter: parameter.to_string(),
        });
        if state.fail_inserts {
            return Err(CatalogError::WriteFailed("injected failure".to_string()));
        }
        let ((host, key), item) = state
            .items
            .iter()
            .find(|(_, record)| record.item_id == item_id)
            .map(|(k, v)| (k.clone(), v.clone()))
            .ok_or(CatalogError::UnknownItem(item_id))?;

        let function_id = FunctionId::new(self.function_ids.next());
        state.functions.insert(
            function_id,
            FunctionRow {
                function_id,
                trigger_id,
                item_id,
                host,
                key,
                function: function.to_string(),
                parameter: parameter.to_string(),
                status: item.status,
                kind: item.kind,
                origin: item.origin,
            },
        );
        Ok(function_id)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
