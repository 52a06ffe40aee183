// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory catalog of hosts, items and function references

use crate::snapshot::{CatalogSnapshot, FunctionEntry, HostEntry, ItemEntry, SnapshotError};
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use trex_adapters::{Catalog, CatalogError, FunctionRow, ItemRecord, ItemStatus};
use trex_core::{FunctionId, IdSequence, ItemId, TriggerId, ValueType};

/// Errors building a catalog from a snapshot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("duplicate host '{0}'")]
    DuplicateHost(String),
    #[error("duplicate item '{key}' on host '{host}'")]
    DuplicateItem { host: String, key: String },
    #[error("item id {0} is used twice")]
    DuplicateItemId(ItemId),
    #[error("function id {0} is used twice")]
    DuplicateFunctionId(FunctionId),
    #[error("function {function_id} references unknown item {item_id}")]
    DanglingFunction {
        function_id: FunctionId,
        item_id: ItemId,
    },
}

#[derive(Default)]
struct CatalogState {
    /// host -> key -> item, in insertion order
    hosts: IndexMap<String, IndexMap<String, ItemRecord>>,
    /// item id -> (host, key)
    item_index: HashMap<ItemId, (String, String)>,
    functions: BTreeMap<FunctionId, FunctionEntry>,
}

/// Catalog held in memory, shared between clones.
#[derive(Clone)]
pub struct MemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
    item_ids: IdSequence,
    function_ids: IdSequence,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(CatalogState::default())),
            item_ids: IdSequence::starting_at(1),
            function_ids: IdSequence::starting_at(1),
        }
    }

    /// Build a catalog from a snapshot, checking ids and references.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, StorageError> {
        let catalog = Self::new();
        {
            let mut state = catalog.state.lock();
            for host in snapshot.hosts {
                if state.hosts.contains_key(&host.name) {
                    return Err(StorageError::DuplicateHost(host.name));
                }
                let mut items = IndexMap::new();
                for item in host.items {
                    if items.contains_key(&item.key) {
                        return Err(StorageError::DuplicateItem {
                            host: host.name,
                            key: item.key,
                        });
                    }
                    if state.item_index.contains_key(&item.item_id) {
                        return Err(StorageError::DuplicateItemId(item.item_id));
                    }
                    catalog.item_ids.observe(item.item_id.get());
                    state
                        .item_index
                        .insert(item.item_id, (host.name.clone(), item.key.clone()));
                    items.insert(
                        item.key,
                        ItemRecord {
                            item_id: item.item_id,
                            value_type: item.value_type,
                            status: item.status,
                            kind: item.kind,
                            origin: item.origin,
                        },
                    );
                }
                state.hosts.insert(host.name, items);
            }

            for function in snapshot.functions {
                if !state.item_index.contains_key(&function.item_id) {
                    return Err(StorageError::DanglingFunction {
                        function_id: function.function_id,
                        item_id: function.item_id,
                    });
                }
                if state.functions.contains_key(&function.function_id) {
                    return Err(StorageError::DuplicateFunctionId(function.function_id));
                }
                catalog.function_ids.observe(function.function_id.get());
                state.functions.insert(function.function_id, function);
            }

            tracing::debug!(
                hosts = state.hosts.len(),
                items = state.item_index.len(),
                functions = state.functions.len(),
                "catalog loaded"
            );
        }
        Ok(catalog)
    }

    /// Load from `path`; a missing file gives an empty catalog.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        match CatalogSnapshot::load(path)? {
            Some(snapshot) => Self::from_snapshot(snapshot),
            None => {
                tracing::info!(path = %path.display(), "no catalog snapshot, starting empty");
                Ok(Self::new())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        self.snapshot().save(path)?;
        Ok(())
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.lock();
        let hosts = state
            .hosts
            .iter()
            .map(|(name, items)| HostEntry {
                name: name.clone(),
                items: items
                    .iter()
                    .map(|(key, record)| ItemEntry {
                        item_id: record.item_id,
                        key: key.clone(),
                        value_type: record.value_type,
                        status: record.status,
                        kind: record.kind,
                        origin: record.origin,
                    })
                    .collect(),
            })
            .collect();
        CatalogSnapshot {
            hosts,
            functions: state.functions.values().cloned().collect(),
            ..CatalogSnapshot::default()
        }
    }

    /// Register a host with no items. Existing hosts are left as they are.
    pub fn add_host(&self, host: &str) {
        self.state.lock().hosts.entry(host.to_string()).or_default();
    }

    /// Add an active item, creating the host when needed.
    ///
    /// An existing item with the same host and key keeps its id and gets the
    /// new value type.
    pub fn add_item(&self, host: &str, key: &str, value_type: ValueType) -> ItemId {
        let mut state = self.state.lock();
        let items = state.hosts.entry(host.to_string()).or_default();
        if let Some(existing) = items.get_mut(key) {
            existing.value_type = value_type;
            return existing.item_id;
        }
        let item_id = ItemId::new(self.item_ids.next());
        items.insert(
            key.to_string(),
            ItemRecord {
                item_id,
                value_type,
                status: ItemStatus::Active,
                kind: Default::default(),
                origin: Default::default(),
            },
        );
        state
            .item_index
            .insert(item_id, (host.to_string(), key.to_string()));
        item_id
    }

    pub fn set_item_status(&self, item_id: ItemId, status: ItemStatus) -> Result<(), CatalogError> {
        let mut state = self.state.lock();
        let (host, key) = state
            .item_index
            .get(&item_id)
            .cloned()
            .ok_or(CatalogError::UnknownItem(item_id))?;
        let record = state
            .hosts
            .get_mut(&host)
            .and_then(|items| items.get_mut(&key))
            .ok_or(CatalogError::UnknownItem(item_id))?;
        record.status = status;
        Ok(())
    }

    /// Function ids stored for a trigger, ascending.
    pub fn functions_for_trigger(&self, trigger_id: TriggerId) -> Vec<FunctionId> {
        self.state
            .lock()
            .functions
            .values()
            .filter(|f| f.trigger_id == trigger_id)
            .map(|f| f.function_id)
            .collect()
    }

    /// Drop every function reference of a trigger, returning how many went.
    pub fn remove_trigger(&self, trigger_id: TriggerId) -> usize {
        let mut state = self.state.lock();
        let before = state.functions.len();
        state.functions.retain(|_, f| f.trigger_id != trigger_id);
        before - state.functions.len()
    }

    pub fn host_names(&self) -> Vec<String> {
        self.state.lock().hosts.keys().cloned().collect()
    }
}

impl Catalog for MemoryCatalog {
    fn host_exists(&self, host: &str) -> bool {
        self.state.lock().hosts.contains_key(host)
    }

    fn lookup_item(&self, host: &str, key: &str) -> Option<ItemRecord> {
        self.state.lock().hosts.get(host)?.get(key).cloned()
    }

    fn lookup_function(&self, id: FunctionId) -> Option<FunctionRow> {
        let state = self.state.lock();
        let entry = state.functions.get(&id)?;
        let (host, key) = state.item_index.get(&entry.item_id)?;
        let item = state.hosts.get(host)?.get(key)?;
        Some(FunctionRow {
            function_id: entry.function_id,
            trigger_id: entry.trigger_id,
            item_id: entry.item_id,
            host: host.clone(),
            key: key.clone(),
            function: entry.function.clone(),
            parameter: entry.parameter.clone(),
            status: item.status,
            kind: item.kind,
            origin: item.origin,
        })
    }

    fn insert_function_reference(
        &self,
        item_id: ItemId,
        trigger_id: TriggerId,
        function: &str,
        parameter: &str,
    ) -> Result<FunctionId, CatalogError> {
        let mut state = self.state.lock();
        if !state.item_index.contains_key(&item_id) {
            return Err(CatalogError::UnknownItem(item_id));
        }
        let function_id = FunctionId::new(self.function_ids.next());
        state.functions.insert(
            function_id,
            FunctionEntry {
                function_id,
                trigger_id,
                item_id,
                function: function.to_string(),
                parameter: parameter.to_string(),
            },
        );
        Ok(function_id)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
