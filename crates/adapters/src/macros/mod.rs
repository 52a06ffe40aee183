// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Macro resolution

mod map;
mod noop;

pub use map::MapMacroResolver;
pub use noop::NoOpMacroResolver;

use serde::{Deserialize, Serialize};

/// The item-side fields of a function reference that may contain macros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub host: String,
    pub key: String,
    pub parameter: String,
}

/// Resolves user macros in item fields and in expression text.
pub trait MacroResolver: Send + Sync {
    fn resolve_in_item(&self, item: ItemFields) -> ItemFields;

    fn resolve_in_trigger_expression(&self, text: &str) -> String;
}
