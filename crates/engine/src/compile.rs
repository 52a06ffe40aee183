// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display text to stored form

use crate::{Engine, EngineError, ExpandOptions};
use indexmap::IndexMap;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use trex_adapters::{Catalog, Fragment, ItemRecord, MacroResolver};
use trex_core::{FunctionId, ItemId, TriggerId};
use trex_expression::{
    validate_expression, ItemLookup, ItemResolver, SemanticError, SemanticErrorKind, Span,
};

/// Result of compiling an expression for one trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledExpression {
    /// Stored form with `{<function id>}` placeholders.
    pub expression: String,
    /// Ids allocated for this trigger, one per distinct clause, in order.
    pub functions: Vec<FunctionId>,
}

/// Item lookups that remember every item they found.
struct RecordingItems<'a, C> {
    catalog: &'a C,
    found: RefCell<HashMap<(String, String), ItemRecord>>,
}

impl<C: Catalog> ItemResolver for RecordingItems<'_, C> {
    fn resolve_item(&self, host: &str, key: &str) -> ItemLookup {
        let pair = (host.to_string(), key.to_string());
        if let Some(item) = self.found.borrow().get(&pair) {
            return ItemLookup::Found(item.value_type);
        }
        let Some(item) = self.catalog.lookup_item(host, key) else {
            return if self.catalog.host_exists(host) {
                ItemLookup::UnknownItem
            } else {
                ItemLookup::UnknownHost
            };
        };
        let lookup = ItemLookup::Found(item.value_type);
        self.found.borrow_mut().insert(pair, item);
        lookup
    }
}

/// One row to insert.
struct Planned {
    item_id: ItemId,
    function: String,
    parameter: String,
}

impl<C, M> Engine<C, M>
where
    C: Catalog,
    M: MacroResolver,
{
    /// Compile human-entered text into stored form for `trigger_id`.
    ///
    /// Every host and item must exist and every function must accept its
    /// item's value type. Nothing is inserted unless all calls resolve.
    /// Identical clauses share one function id.
    pub fn compile(
        &self,
        text: &str,
        trigger_id: TriggerId,
    ) -> Result<CompiledExpression, EngineError> {
        let parsed = self.parse(text)?;
        let items = RecordingItems {
            catalog: &self.catalog,
            found: RefCell::new(HashMap::new()),
        };
        validate_expression(&parsed, self.table, Some(&items))?;
        let found = items.found.into_inner();

        let mut plan: IndexMap<&str, Planned> = IndexMap::new();
        for call in parsed.function_calls() {
            if plan.contains_key(call.expression.as_str()) {
                continue;
            }
            let pair = (call.host.clone(), call.item.clone());
            let Some(item) = found.get(&pair) else {
                let kind = SemanticErrorKind::ItemNotFound {
                    host: call.host.clone(),
                    key: call.item.clone(),
                };
                return Err(EngineError::Semantic(vec![SemanticError::new(kind, call.span)]));
            };
            plan.insert(
                &call.expression,
                Planned {
                    item_id: item.item_id,
                    function: call.function_name.clone(),
                    parameter: call.function_param.clone(),
                },
            );
        }

        let mut ids: HashMap<&str, FunctionId> = HashMap::new();
        let mut functions = Vec::with_capacity(plan.len());
        for (clause, row) in &plan {
            let id = self.catalog.insert_function_reference(
                row.item_id,
                trigger_id,
                &row.function,
                &row.parameter,
            )?;
            ids.insert(clause, id);
            functions.push(id);
        }

        let mut expression = String::with_capacity(text.len());
        let mut pos = 0;
        for call in parsed.function_calls() {
            let Some(id) = ids.get(call.expression.as_str()) else {
                continue;
            };
            expression.push_str(&parsed.text(Span::new(pos, call.span.start)));
            expression.push_str(&format!("{{{id}}}"));
            pos = call.span.end;
        }
        let end = text.chars().count();
        expression.push_str(&parsed.text(Span::new(pos, end)));

        tracing::info!(
            %trigger_id,
            functions = functions.len(),
            "expression compiled"
        );
        Ok(CompiledExpression {
            expression,
            functions,
        })
    }

    /// Copy a stored expression to another host under a new trigger.
    ///
    /// References to `from_host` are moved to `to_host`; references to other
    /// hosts keep their host. Fails if any reference cannot be resolved.
    pub fn copy_expression(
        &self,
        stored: &str,
        from_host: &str,
        to_host: &str,
        trigger_id: TriggerId,
    ) -> Result<CompiledExpression, EngineError> {
        let options = ExpandOptions::default().substituting(from_host, to_host);
        let fragments = self.expand_rich(stored, &options);
        if fragments.iter().any(|f| matches!(f, Fragment::Error)) {
            return Err(EngineError::Unexpandable(stored.to_string()));
        }
        let text: String = fragments.iter().map(Fragment::plain).collect();
        tracing::debug!(from_host, to_host, expression = text.as_str(), "copying expression");
        self.compile(&text, trigger_id)
    }

    /// Function ids referenced by a stored expression, first occurrence order.
    pub fn stored_references(&self, stored: &str) -> Result<Vec<FunctionId>, EngineError> {
        let parsed = self.parse(stored)?;
        let mut refs: Vec<FunctionId> = Vec::new();
        for id in parsed.function_refs() {
            if !refs.contains(&id) {
                refs.push(id);
            }
        }
        Ok(refs)
    }
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
