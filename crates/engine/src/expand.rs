// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stored form to display text.
//!
//! Stored expressions keep each function call as a `{<function id>}`
//! placeholder. Expansion looks every id up in the catalog and writes the
//! `{host:key.function(parameter)}` form back. References that cannot be
//! resolved become [`Fragment::Error`] instead of failing the whole text.

use crate::Engine;
use trex_adapters::{
    Catalog, Fragment, FunctionRow, ItemFields, ItemKind, ItemOrigin, ItemStatus, Link,
    MacroResolver, Presenter, Style,
};
use trex_core::FunctionId;

/// Replace one host name with another while expanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSubstitution {
    pub from: String,
    pub to: String,
}

impl HostSubstitution {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Resolve user macros through the engine's macro resolver.
    pub resolve_macros: bool,
    pub substitute: Option<HostSubstitution>,
}

impl ExpandOptions {
    pub fn resolving_macros(mut self) -> Self {
        self.resolve_macros = true;
        self
    }

    pub fn substituting(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitute = Some(HostSubstitution::new(from, to));
        self
    }
}

/// Collects fragments, merging adjacent text.
#[derive(Default)]
struct Fragments {
    items: Vec<Fragment>,
}

impl Fragments {
    fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Fragment::Text { text: last }) = self.items.last_mut() {
            last.push_str(text);
        } else {
            self.items.push(Fragment::text(text));
        }
    }

    fn push(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Text { text } => self.push_str(&text),
            other => self.items.push(other),
        }
    }
}

fn style(status: ItemStatus) -> Style {
    match status {
        ItemStatus::Active => Style::Enabled,
        ItemStatus::Disabled => Style::Disabled,
        ItemStatus::NotSupported => Style::Unknown,
    }
}

fn link(row: &FunctionRow) -> Link {
    match (row.origin, row.kind) {
        (ItemOrigin::Discovered, _) | (_, ItemKind::WebScenario) => Link::None,
        (ItemOrigin::Prototype, _) => Link::Prototype,
        _ => Link::Item,
    }
}

impl<C, M> Engine<C, M>
where
    C: Catalog,
    M: MacroResolver,
{
    /// Expand a stored expression to plain text.
    pub fn expand(&self, stored: &str, options: &ExpandOptions) -> String {
        self.expand_rich(stored, options)
            .iter()
            .map(Fragment::plain)
            .collect()
    }

    /// Expand and hand the fragments to a presenter.
    pub fn expand_with<P: Presenter>(
        &self,
        stored: &str,
        options: &ExpandOptions,
        presenter: &P,
    ) -> String {
        presenter.present(&self.expand_rich(stored, options))
    }

    /// Expand a stored expression into ordered fragments.
    pub fn expand_rich(&self, stored: &str, options: &ExpandOptions) -> Vec<Fragment> {
        let chars: Vec<char> = stored.chars().collect();
        let mut out = Fragments::default();
        let mut pos = 0;

        while pos < chars.len() {
            let c = chars[pos];
            if c != '{' {
                out.push_str(c.encode_utf8(&mut [0; 4]));
                pos += 1;
                continue;
            }
            let Some(len) = chars[pos + 1..].iter().position(|&c| c == '}') else {
                tracing::warn!(position = pos, "unterminated reference in stored expression");
                out.push(Fragment::Error);
                break;
            };
            let inner: String = chars[pos + 1..pos + 1 + len].iter().collect();
            self.expand_reference(&inner, options, &mut out);
            pos += len + 2;
        }

        out.items
    }

    fn expand_reference(&self, inner: &str, options: &ExpandOptions, out: &mut Fragments) {
        if inner == "TRIGGER.VALUE" || inner.starts_with('#') {
            out.push_str(&format!("{{{inner}}}"));
            return;
        }
        if inner.starts_with('$') {
            let text = format!("{{{inner}}}");
            if options.resolve_macros {
                out.push_str(&self.macros.resolve_in_trigger_expression(&text));
            } else {
                out.push_str(&text);
            }
            return;
        }

        let row = inner
            .parse::<FunctionId>()
            .ok()
            .and_then(|id| self.catalog.lookup_function(id));
        let Some(row) = row else {
            tracing::warn!(reference = inner, "unresolved reference, rendering error marker");
            out.push(Fragment::Error);
            return;
        };

        let mut fields = ItemFields {
            host: row.host.clone(),
            key: row.key.clone(),
            parameter: row.parameter.clone(),
        };
        if options.resolve_macros {
            fields = self.macros.resolve_in_item(fields);
        }
        if let Some(sub) = &options.substitute {
            if fields.host == sub.from {
                fields.host = sub.to.clone();
            }
        }

        out.push_str("{");
        out.push(Fragment::Reference {
            text: format!("{}:{}", fields.host, fields.key),
            item_id: row.item_id,
            style: style(row.status),
            link: link(&row),
        });
        out.push_str(&format!(".{}({})}}", row.function, fields.parameter));
    }
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
