// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine over the catalog and macro collaborators

use crate::EngineError;
use std::collections::HashMap;
use std::sync::Arc;
use trex_adapters::{Catalog, MacroResolver, NoOpMacroResolver};
use trex_core::FunctionTable;
use trex_expression::{
    parse_with_config, test_expression, validate_expression, ExpressionCache, ExpressionTree,
    ItemLookup, ItemResolver, ParsedExpression, ScanConfig, TestReport,
};

/// Runs expression operations against a catalog.
pub struct Engine<C, M = NoOpMacroResolver> {
    pub(crate) catalog: C,
    pub(crate) macros: M,
    pub(crate) config: ScanConfig,
    pub(crate) table: &'static FunctionTable,
}

impl<C: Catalog> Engine<C> {
    /// Create an engine that leaves macros untouched
    pub fn new(catalog: C) -> Self {
        Self::with_macros(catalog, NoOpMacroResolver::new())
    }
}

impl<C, M> Engine<C, M>
where
    C: Catalog,
    M: MacroResolver,
{
    pub fn with_macros(catalog: C, macros: M) -> Self {
        Self {
            catalog,
            macros,
            config: ScanConfig::default(),
            table: FunctionTable::standard(),
        }
    }

    /// Bound input length and nesting depth of every parse
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn parse(&self, text: &str) -> Result<ParsedExpression, EngineError> {
        Ok(parse_with_config(text, &self.config)?)
    }

    /// Parse and validate `text`.
    ///
    /// With `live` set, hosts and items are checked against the catalog and
    /// value types are compared with each function's allowed set.
    pub fn check(&self, text: &str, live: bool) -> Result<ParsedExpression, EngineError> {
        let parsed = self.parse(text)?;
        self.validate(&parsed, live)?;
        Ok(parsed)
    }

    /// [`Engine::check`] with parsing memoized in `cache`.
    ///
    /// The cache's own limits apply to the parse.
    pub fn check_cached(
        &self,
        cache: &mut ExpressionCache,
        text: &str,
        live: bool,
    ) -> Result<Arc<ParsedExpression>, EngineError> {
        let parsed = cache.parse(text)?;
        self.validate(&parsed, live)?;
        Ok(parsed)
    }

    fn validate(&self, parsed: &ParsedExpression, live: bool) -> Result<(), EngineError> {
        let items = CatalogItems::new(&self.catalog);
        let resolver: Option<&dyn ItemResolver> = if live { Some(&items) } else { None };
        validate_expression(parsed, self.table, resolver)?;
        Ok(())
    }

    /// Evaluate `text` with sample values for each referenced clause.
    pub fn test(
        &self,
        text: &str,
        values: &HashMap<String, String>,
    ) -> Result<TestReport, EngineError> {
        let parsed = self.parse(text)?;
        let tree = ExpressionTree::build(&parsed);
        Ok(test_expression(&parsed, &tree, values)?)
    }
}

/// Item lookups over a catalog, for live validation.
pub struct CatalogItems<'a, C> {
    catalog: &'a C,
}

impl<'a, C: Catalog> CatalogItems<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }
}

impl<C: Catalog> ItemResolver for CatalogItems<'_, C> {
    fn resolve_item(&self, host: &str, key: &str) -> ItemLookup {
        match self.catalog.lookup_item(host, key) {
            Some(item) => ItemLookup::Found(item.value_type),
            None if self.catalog.host_exists(host) => ItemLookup::UnknownItem,
            None => ItemLookup::UnknownHost,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
