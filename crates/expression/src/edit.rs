// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural edits on the expression tree.
//!
//! Edits never mutate the tree. The new text is rebuilt bottom-up: removed
//! branches drop out together with the operator that joined them, and
//! parentheses are only emitted where `|` sits under `&`.

use crate::error::SyntaxError;
use crate::scanner::parse;
use crate::tree::{ExpressionTree, LogicalOp, NodeId, NodeKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "clause", rename_all = "snake_case")]
pub enum EditAction {
    Remove,
    Replace(String),
    /// Combine the target with a new clause using `&`.
    AddAnd(String),
    /// Combine the target with a new clause using `|`.
    AddOr(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
    #[error("expression does not parse: {0}")]
    Syntax(#[from] SyntaxError),
}

/// A rebuilt branch and the operator at its top level.
struct Fragment {
    text: String,
    op: Option<LogicalOp>,
}

impl Fragment {
    fn clause(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            op: top_level_operator(text),
        }
    }

    /// Text ready to be placed under `parent`.
    fn under(self, parent: LogicalOp) -> String {
        if parent == LogicalOp::And && self.op == Some(LogicalOp::Or) {
            format!("({})", self.text)
        } else {
            self.text
        }
    }
}

fn join(left: Fragment, op: LogicalOp, right: Fragment) -> Fragment {
    let mut text = left.under(op);
    text.push(' ');
    text.push(op.symbol());
    text.push(' ');
    text.push_str(&right.under(op));
    Fragment { text, op: Some(op) }
}

/// First `&`/`|` outside brackets and quotes; `|` wins over `&`.
fn top_level_operator(text: &str) -> Option<LogicalOp> {
    let mut depth = 0usize;
    let mut quoted = false;
    let mut escaped = false;
    let mut found = None;
    for c in text.chars() {
        if quoted {
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => quoted = false,
                _ => escaped = false,
            }
            continue;
        }
        match c {
            '"' => quoted = true,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => return Some(LogicalOp::Or),
            '&' if depth == 0 => found = Some(LogicalOp::And),
            _ => {}
        }
    }
    found
}

/// Apply `action` to the node `target` and return the new expression text.
///
/// Removing the last remaining clause yields an empty string.
pub fn rebuild(
    tree: &ExpressionTree,
    target: &NodeId,
    action: &EditAction,
) -> Result<String, EditError> {
    if tree.find(target).is_none() {
        return Err(EditError::NodeNotFound(*target));
    }
    let text = tree
        .root_index()
        .and_then(|root| render(tree, root, target, action))
        .map(|f| f.text)
        .unwrap_or_default();
    tracing::debug!(target = %target, ?action, "expression rebuilt");
    Ok(text)
}

/// Parse `source`, build its tree and apply one edit.
pub fn edit_expression(
    source: &str,
    target: &NodeId,
    action: &EditAction,
) -> Result<String, EditError> {
    let parsed = parse(source)?;
    rebuild(&ExpressionTree::build(&parsed), target, action)
}

/// Rebuild the branch under `root` children first, applying `action` when
/// the target node comes up.
fn render(
    tree: &ExpressionTree,
    root: usize,
    target: &NodeId,
    action: &EditAction,
) -> Option<Fragment> {
    let mut done: Vec<Option<Fragment>> = Vec::new();
    done.resize_with(tree.nodes().len(), || None);
    let mut stack = vec![(root, false)];
    while let Some((index, expanded)) = stack.pop() {
        let Some(node) = tree.node(index) else {
            continue;
        };
        if !expanded {
            stack.push((index, true));
            for child in [node.right, node.left].into_iter().flatten() {
                stack.push((child, false));
            }
            continue;
        }
        let current = match node.kind {
            NodeKind::Leaf { .. } => Some(Fragment::clause(&node.text)),
            NodeKind::Operator(op) => {
                let left = node.left.and_then(|i| done[i].take());
                let right = node.right.and_then(|i| done[i].take());
                match (left, right) {
                    (Some(l), Some(r)) => Some(join(l, op, r)),
                    (Some(only), None) | (None, Some(only)) => Some(only),
                    (None, None) => None,
                }
            }
        };
        done[index] = if node.id == *target {
            apply(current, action)
        } else {
            current
        };
    }
    done.get_mut(root).and_then(Option::take)
}

fn apply(current: Option<Fragment>, action: &EditAction) -> Option<Fragment> {
    match action {
        EditAction::Remove => None,
        EditAction::Replace(clause) => Some(Fragment::clause(clause)),
        EditAction::AddAnd(clause) => {
            Some(join(current?, LogicalOp::And, Fragment::clause(clause)))
        }
        EditAction::AddOr(clause) => {
            Some(join(current?, LogicalOp::Or, Fragment::clause(clause)))
        }
    }
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
