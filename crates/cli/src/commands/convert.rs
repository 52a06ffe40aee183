// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `trex convert` - Expand unit suffixes in numeric values

use super::Context;
use crate::output::emit;
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Args)]
pub struct ConvertArgs {
    /// Values such as `5m`, `1K` or `2.5h`
    #[arg(required = true)]
    pub values: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

pub fn conversions(values: &[String]) -> Vec<Conversion> {
    values
        .iter()
        .map(|v| Conversion {
            input: v.clone(),
            output: trex_core::convert(v),
        })
        .collect()
}

pub fn convert(args: ConvertArgs, ctx: &Context) -> Result<()> {
    let results = conversions(&args.values);
    emit(ctx.format, &results, || {
        results
            .iter()
            .map(|c| c.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    })
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
