// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `trex compile` - Store an expression against the catalog

use super::{report, Context};
use crate::output::emit;
use anyhow::Result;
use clap::Args;
use trex_adapters::MapMacroResolver;
use trex_core::TriggerId;

#[derive(Args)]
pub struct CompileArgs {
    /// Expression in display form, e.g. `{web:cpu.load.avg(5m)}>2`
    pub expression: String,

    /// Trigger that owns the new function references
    #[arg(long)]
    pub trigger: u64,
}

pub fn compile(args: CompileArgs, ctx: &Context) -> Result<()> {
    let open = ctx.open_catalog()?;
    let engine = ctx.engine(&open.catalog, MapMacroResolver::new());
    let compiled = engine
        .compile(&args.expression, TriggerId::new(args.trigger))
        .map_err(|e| report(e, &args.expression))?;
    open.save()?;
    emit(ctx.format, &compiled, || compiled.expression.clone())
}
