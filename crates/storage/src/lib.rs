// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Storage layer for trigger expressions

mod catalog;
mod snapshot;

pub use catalog::{MemoryCatalog, StorageError};
pub use snapshot::{
    CatalogSnapshot, FunctionEntry, HostEntry, ItemEntry, SnapshotError, SnapshotFormat,
    CURRENT_SNAPSHOT_VERSION,
};
