// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `trex copy` - Copy a stored expression to another host

use super::{report, Context};
use crate::output::emit;
use anyhow::Result;
use clap::Args;
use trex_adapters::MapMacroResolver;
use trex_core::TriggerId;
use trex_engine::ExpandOptions;

#[derive(Args)]
pub struct CopyArgs {
    /// Stored expression to copy, e.g. `{12}>5`
    pub stored: String,

    /// Host whose references move
    #[arg(long)]
    pub from: String,

    /// Host the references move to
    #[arg(long)]
    pub to: String,

    /// Trigger that owns the copied function references
    #[arg(long)]
    pub trigger: u64,
}

pub fn copy(args: CopyArgs, ctx: &Context) -> Result<()> {
    let open = ctx.open_catalog()?;
    let engine = ctx.engine(&open.catalog, MapMacroResolver::new());
    let compiled = engine
        .copy_expression(&args.stored, &args.from, &args.to, TriggerId::new(args.trigger))
        .map_err(|e| {
            // Spans refer to the expanded text that was compiled.
            let options = ExpandOptions::default().substituting(&args.from, &args.to);
            report(e, &engine.expand(&args.stored, &options))
        })?;
    open.save()?;
    emit(ctx.format, &compiled, || compiled.expression.clone())
}
