// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host/item/function catalog

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CatalogCall, FakeCatalog};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trex_core::{FunctionId, ItemId, TriggerId, ValueType};

/// Errors from catalog writes.
///
/// Lookups never fail; a missing row is `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item {0} does not exist")]
    UnknownItem(ItemId),
    #[error("catalog write failed: {0}")]
    WriteFailed(String),
}

/// Whether an item is being collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Active,
    Disabled,
    NotSupported,
}

/// How an item collects data, as far as rendering cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Regular,
    /// Owned by a web scenario; not editable on its own.
    WebScenario,
}

/// Where an item came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrigin {
    #[default]
    Plain,
    Prototype,
    /// Created by low-level discovery; not editable on its own.
    Discovered,
}

/// An item as seen by host and key lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item_id: ItemId,
    pub value_type: ValueType,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub origin: ItemOrigin,
}

/// A stored function reference joined with its item and host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRow {
    pub function_id: FunctionId,
    pub trigger_id: TriggerId,
    pub item_id: ItemId,
    pub host: String,
    pub key: String,
    /// Function name without parameters.
    pub function: String,
    /// Raw parameter text between the parentheses.
    pub parameter: String,
    pub status: ItemStatus,
    pub kind: ItemKind,
    pub origin: ItemOrigin,
}

/// Persisted hosts, items and trigger function references.
pub trait Catalog: Clone + Send + Sync + 'static {
    fn host_exists(&self, host: &str) -> bool;

    fn lookup_item(&self, host: &str, key: &str) -> Option<ItemRecord>;

    fn lookup_function(&self, id: FunctionId) -> Option<FunctionRow>;

    /// Store a function reference for `trigger_id` and return its new id.
    fn insert_function_reference(
        &self,
        item_id: ItemId,
        trigger_id: TriggerId,
        function: &str,
        parameter: &str,
    ) -> Result<FunctionId, CatalogError>;
}
