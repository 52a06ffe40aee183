// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog snapshot persistence.
//!
//! A snapshot is the whole catalog as one serde document. The format follows
//! the file extension: `.toml` is TOML, anything else is JSON. Saves write a
//! `.tmp` sibling first and rename it over the target.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use trex_adapters::{ItemKind, ItemOrigin, ItemStatus};
use trex_core::{FunctionId, ItemId, TriggerId, ValueType};

/// Snapshot format version written by this build.
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

/// Errors from snapshot load and save
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("snapshot version {found} is newer than supported version {supported}")]
    TooNew { found: u32, supported: u32 },
}

/// Serialization format of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SnapshotFormat::Toml,
            _ => SnapshotFormat::Json,
        }
    }
}

/// One item of a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub item_id: ItemId,
    pub key: String,
    pub value_type: ValueType,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub origin: ItemOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

/// A stored trigger function reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEntry {
    pub function_id: FunctionId,
    pub trigger_id: TriggerId,
    pub item_id: ItemId,
    pub function: String,
    #[serde(default)]
    pub parameter: String,
}

/// The complete catalog at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub hosts: Vec<HostEntry>,
    #[serde(default)]
    pub functions: Vec<FunctionEntry>,
}

fn current_version() -> u32 {
    CURRENT_SNAPSHOT_VERSION
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self {
            version: CURRENT_SNAPSHOT_VERSION,
            hosts: Vec::new(),
            functions: Vec::new(),
        }
    }
}

impl CatalogSnapshot {
    /// Load a snapshot; a missing file is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, SnapshotError> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        let snapshot = Self::from_str_as(&text, SnapshotFormat::for_path(path))?;
        Ok(Some(snapshot))
    }

    pub fn from_str_as(text: &str, format: SnapshotFormat) -> Result<Self, SnapshotError> {
        let snapshot: Self = match format {
            SnapshotFormat::Json => serde_json::from_str(text)?,
            SnapshotFormat::Toml => toml::from_str(text)?,
        };
        if snapshot.version > CURRENT_SNAPSHOT_VERSION {
            return Err(SnapshotError::TooNew {
                found: snapshot.version,
                supported: CURRENT_SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    pub fn to_string_as(&self, format: SnapshotFormat) -> Result<String, SnapshotError> {
        Ok(match format {
            SnapshotFormat::Json => serde_json::to_string_pretty(self)?,
            SnapshotFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    /// Save snapshot atomically (write to .tmp, then rename).
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = self.to_string_as(SnapshotFormat::for_path(path))?;
        let tmp_path = path.with_extension("tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(text.as_bytes())?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, path)?;

        tracing::debug!(
            path = %path.display(),
            hosts = self.hosts.len(),
            functions = self.functions.len(),
            "snapshot saved"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
