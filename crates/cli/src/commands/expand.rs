// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `trex expand` - Render a stored expression for display

use super::{parse_key_value, Context};
use crate::color::{ColorPresenter, Palette};
use crate::exit_error::ExitError;
use crate::output::emit;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use trex_adapters::{Fragment, MapMacroResolver, PlainPresenter, Presenter};
use trex_core::FunctionId;
use trex_engine::ExpandOptions;

#[derive(Args)]
pub struct ExpandArgs {
    /// Stored expression, e.g. `{12}>5`
    pub stored: String,

    /// Color references by item state
    #[arg(long)]
    pub rich: bool,

    /// Resolve user macros (see --macro)
    #[arg(long)]
    pub resolve_macros: bool,

    /// Macro value as NAME=VALUE; NAME may be written as `{$NAME}`
    #[arg(long = "macro", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub macros: Vec<(String, String)>,

    /// Host to replace while expanding
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Replacement host for --from
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

impl ExpandArgs {
    pub fn options(&self) -> ExpandOptions {
        let mut options = ExpandOptions::default();
        if self.resolve_macros {
            options = options.resolving_macros();
        }
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            options = options.substituting(from, to);
        }
        options
    }
}

/// Macro values keyed by bare name.
pub fn macro_resolver(macros: &[(String, String)]) -> MapMacroResolver {
    macros
        .iter()
        .map(|(name, value)| (bare_macro_name(name).to_string(), value.clone()))
        .collect()
}

/// `{$NAME}` or `$NAME` to `NAME`.
pub fn bare_macro_name(name: &str) -> &str {
    let name = name.trim();
    let name = name
        .strip_prefix("{$")
        .and_then(|n| n.strip_suffix('}'))
        .unwrap_or(name);
    name.strip_prefix('$').unwrap_or(name)
}

#[derive(Serialize)]
struct ExpandOutput<'a> {
    stored: &'a str,
    expanded: String,
    references: Vec<FunctionId>,
    fragments: Vec<Fragment>,
}

pub fn expand(args: ExpandArgs, ctx: &Context) -> Result<()> {
    let open = ctx.open_catalog()?;
    let engine = ctx.engine(&open.catalog, macro_resolver(&args.macros));
    let options = args.options();

    let fragments = engine.expand_rich(&args.stored, &options);
    let failed = fragments.iter().any(|f| matches!(f, Fragment::Error));
    let output = ExpandOutput {
        stored: &args.stored,
        expanded: fragments.iter().map(Fragment::plain).collect(),
        references: engine.stored_references(&args.stored).unwrap_or_default(),
        fragments,
    };
    emit(ctx.format, &output, || {
        if args.rich {
            ColorPresenter::new(Palette::detect()).present(&output.fragments)
        } else {
            PlainPresenter.present(&output.fragments)
        }
    })?;

    if failed {
        return Err(ExitError::silent(1).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
