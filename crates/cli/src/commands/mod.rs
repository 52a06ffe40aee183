// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations

pub mod check;
pub mod compile;
pub mod convert;
pub mod copy;
pub mod edit;
pub mod expand;
pub mod tree;

use crate::exit_error::ExitError;
use crate::output::OutputFormat;
use anyhow::{anyhow, Context as _, Result};
use std::path::PathBuf;
use trex_adapters::{MapMacroResolver, TracedCatalog, TracedMacroResolver};
use trex_engine::{Engine, EngineError};
use trex_expression::ScanConfig;
use trex_storage::MemoryCatalog;

/// Engine wired to the on-disk catalog.
pub type CatalogEngine =
    Engine<TracedCatalog<MemoryCatalog>, TracedMacroResolver<MapMacroResolver>>;

/// Settings shared by every subcommand.
pub struct Context {
    pub format: OutputFormat,
    pub catalog: Option<PathBuf>,
    pub config: ScanConfig,
}

/// A catalog loaded from disk.
pub struct OpenCatalog {
    pub catalog: MemoryCatalog,
    pub path: PathBuf,
}

impl OpenCatalog {
    pub fn save(&self) -> Result<()> {
        self.catalog
            .save(&self.path)
            .with_context(|| format!("failed to save catalog {}", self.path.display()))
    }
}

impl Context {
    pub fn open_catalog(&self) -> Result<OpenCatalog> {
        let path = self
            .catalog
            .clone()
            .ok_or_else(|| anyhow!("no catalog given: pass --catalog or set TREX_CATALOG"))?;
        let catalog = MemoryCatalog::open(&path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?;
        Ok(OpenCatalog { catalog, path })
    }

    pub fn engine(&self, catalog: &MemoryCatalog, macros: MapMacroResolver) -> CatalogEngine {
        Engine::with_macros(
            TracedCatalog::new(catalog.clone()),
            TracedMacroResolver::new(macros),
        )
        .with_config(self.config.clone())
    }
}

/// Diagnostics for `text` when the engine rejected it, one per problem.
pub fn diagnostics(err: &EngineError, text: &str) -> Vec<String> {
    match err {
        EngineError::Syntax(e) => vec![format!("[{}] {}", e.code(), e.diagnostic(text))],
        EngineError::Semantic(errors) => errors
            .iter()
            .map(|e| format!("[{}] {}", e.code(), e.diagnostic(text)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Print diagnostics for syntax and semantic failures and exit 1 quietly.
/// Other engine errors pass through unchanged.
pub fn report(err: EngineError, text: &str) -> anyhow::Error {
    let lines = diagnostics(&err, text);
    if lines.is_empty() {
        return err.into();
    }
    for line in lines {
        eprintln!("{line}");
    }
    ExitError::silent(1).into()
}

/// Split `NAME=VALUE` at the first `=`.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
