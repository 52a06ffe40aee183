// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `trex tree` - Show the `&`/`|` structure of an expression

use super::Context;
use crate::color::Palette;
use crate::output::emit;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use trex_expression::{
    parse_with_config, Connector, ExpressionTree, LabelFragment, TreeEntry,
};

#[derive(Args)]
pub struct TreeArgs {
    /// Expression to outline
    pub expression: String,
}

#[derive(Serialize)]
struct TreeOutput<'a> {
    expression: &'a str,
    outline: String,
    entries: Vec<TreeEntry>,
}

pub fn tree(args: TreeArgs, ctx: &Context) -> Result<()> {
    let parsed = parse_with_config(&args.expression, &ctx.config)?;
    let tree = ExpressionTree::build(&parsed);
    let output = TreeOutput {
        expression: &args.expression,
        outline: tree.outline(),
        entries: tree.entries(),
    };
    emit(ctx.format, &output, || {
        render(&output.outline, &output.entries, &Palette::detect())
    })
}

fn connector_glyph(connector: Connector) -> &'static str {
    match connector {
        Connector::Blank => "   ",
        Connector::Vertical => "│  ",
        Connector::Branch => "├─ ",
        Connector::LastBranch => "└─ ",
    }
}

pub fn render_entry(entry: &TreeEntry, palette: &Palette) -> String {
    let mut line: String = entry.connectors.iter().map(|c| connector_glyph(*c)).collect();
    let label: Vec<String> = entry
        .label
        .iter()
        .map(|fragment| match fragment {
            LabelFragment::Operator(op) => palette.header(&op.to_string()),
            LabelFragment::Letter(letter) => palette.literal(letter),
            LabelFragment::Clause(text) => palette.muted(text),
        })
        .collect();
    line.push_str(&label.join("  "));
    line
}

pub fn render(outline: &str, entries: &[TreeEntry], palette: &Palette) -> String {
    let mut out = format!("{}\n", palette.header(outline));
    for entry in entries {
        out.push_str(&render_entry(entry, palette));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
