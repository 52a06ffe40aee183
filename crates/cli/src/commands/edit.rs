// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `trex edit` - Structural edits on the expression tree

use super::Context;
use crate::output::emit;
use anyhow::{anyhow, Result};
use clap::{ArgGroup, Args};
use serde::Serialize;
use trex_expression::{
    parse_with_config, rebuild, EditAction, ExpressionTree, NodeId, NodeKind,
};

#[derive(Args)]
#[command(group(ArgGroup::new("action").required(true)))]
pub struct EditArgs {
    /// Expression to edit
    pub expression: String,

    /// Target node, as `start_end` or a leaf letter from `trex tree`
    #[arg(long)]
    pub node: String,

    /// Remove the node
    #[arg(long, group = "action")]
    pub remove: bool,

    /// Replace the node with CLAUSE
    #[arg(long, value_name = "CLAUSE", group = "action")]
    pub replace: Option<String>,

    /// Combine the node with CLAUSE using `&`
    #[arg(long = "and", value_name = "CLAUSE", group = "action")]
    pub and: Option<String>,

    /// Combine the node with CLAUSE using `|`
    #[arg(long = "or", value_name = "CLAUSE", group = "action")]
    pub or: Option<String>,
}

impl EditArgs {
    pub fn action(&self) -> Option<EditAction> {
        if self.remove {
            return Some(EditAction::Remove);
        }
        if let Some(clause) = &self.replace {
            return Some(EditAction::Replace(clause.clone()));
        }
        if let Some(clause) = &self.and {
            return Some(EditAction::AddAnd(clause.clone()));
        }
        self.or.clone().map(EditAction::AddOr)
    }
}

#[derive(Serialize)]
struct EditOutput<'a> {
    expression: &'a str,
    node: NodeId,
    edit: &'a EditAction,
    result: &'a str,
}

pub fn edit(args: EditArgs, ctx: &Context) -> Result<()> {
    let action = args
        .action()
        .ok_or_else(|| anyhow!("one of --remove, --replace, --and or --or is required"))?;
    let parsed = parse_with_config(&args.expression, &ctx.config)?;
    let tree = ExpressionTree::build(&parsed);
    let node = resolve_node(&tree, &args.node)?;
    let result = rebuild(&tree, &node, &action)?;

    let output = EditOutput {
        expression: &args.expression,
        node,
        edit: &action,
        result: &result,
    };
    emit(ctx.format, &output, || result.clone())
}

/// Accept either a node id or the letter of a leaf.
pub fn resolve_node(tree: &ExpressionTree, target: &str) -> Result<NodeId> {
    if let Ok(id) = target.parse::<NodeId>() {
        return Ok(id);
    }
    tree.leaves()
        .find(|leaf| {
            matches!(&leaf.kind, NodeKind::Leaf { letter } if letter.eq_ignore_ascii_case(target))
        })
        .map(|leaf| leaf.id)
        .ok_or_else(|| anyhow!("no node '{target}' in expression"))
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
