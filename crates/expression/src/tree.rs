// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `&`/`|` expression tree.
//!
//! Nodes live in a flat arena and refer to each other by index. A node's
//! [`NodeId`] is derived from its source offsets, so ids stay stable until
//! the text is parsed again.
//!
//! ```text
//! {a}=0 & ({b}=1 | {c}=2)
//!
//! &
//! ├ A {a}=0
//! └ |
//!   ├ B {b}=1
//!   └ C {c}=2
//! ```

use crate::grammar::Rule;
use crate::parsed::{ParsedExpression, RegionId};
use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOp {
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
}

impl LogicalOp {
    pub fn symbol(self) -> char {
        match self {
            LogicalOp::And => '&',
            LogicalOp::Or => '|',
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Stable node key, rendered `start_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NodeId {
    pub start: usize,
    pub end: usize,
}

impl From<Span> for NodeId {
    fn from(span: Span) -> Self {
        Self {
            start: span.start,
            end: span.end,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.start, self.end)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid node id '{0}', expected start_end")]
pub struct NodeIdError(String);

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NodeIdError(s.to_string());
        let (start, end) = s.split_once('_').ok_or_else(invalid)?;
        Ok(Self {
            start: start.parse().map_err(|_| invalid())?,
            end: end.parse().map_err(|_| invalid())?,
        })
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = NodeIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Operator(LogicalOp),
    Leaf { letter: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub span: Span,
    /// Clause text of a leaf, whitespace trimmed. Empty for operators,
    /// whose text is the span sliced from the source.
    pub text: String,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    /// Produced by stepping into a parenthesized group.
    pub grouped: bool,
}

impl TreeNode {
    pub fn op(&self) -> Option<LogicalOp> {
        match self.kind {
            NodeKind::Operator(op) => Some(op),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// Indentation glyph in front of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    /// Ancestor level with no further siblings.
    Blank,
    /// Ancestor level with more siblings below.
    Vertical,
    /// This node, more siblings follow.
    Branch,
    /// This node, last sibling.
    LastBranch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LabelFragment {
    Operator(LogicalOp),
    Letter(String),
    Clause(String),
}

/// One row of the rendered outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    pub id: NodeId,
    pub depth: usize,
    pub connectors: Vec<Connector>,
    pub label: Vec<LabelFragment>,
    pub span: Span,
}

/// Letters for the `n`-th leaf: `A`..`Z`, then `AA`, `AB`, ...
pub fn leaf_letter(n: usize) -> String {
    let mut n = n + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionTree {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl ExpressionTree {
    pub fn build(parsed: &ParsedExpression) -> Self {
        let mut builder = Builder {
            parsed,
            chars: parsed.chars(),
            nodes: Vec::new(),
            leaves: 0,
        };
        let root = builder.build(0, parsed.root().span);
        Self {
            nodes: builder.nodes,
            root,
        }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.and_then(|i| self.nodes.get(i))
    }

    pub fn root_index(&self) -> Option<usize> {
        self.root
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    pub fn find(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == *id)
    }

    /// Leaves in left-to-right order.
    pub fn leaves(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Operands shown directly under `index`. Ungrouped chains of the same
    /// operator are flattened.
    fn display_children(&self, index: usize) -> Vec<usize> {
        let Some(op) = self.nodes[index].op() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        self.collect_operands(index, op, &mut out);
        out
    }

    fn collect_operands(&self, index: usize, op: LogicalOp, out: &mut Vec<usize>) {
        let node = &self.nodes[index];
        let mut stack: Vec<usize> = [node.right, node.left].into_iter().flatten().collect();
        while let Some(child) = stack.pop() {
            let c = &self.nodes[child];
            if c.op() == Some(op) && !c.grouped {
                stack.extend([c.right, c.left].into_iter().flatten());
            } else {
                out.push(child);
            }
        }
    }

    /// Lettered outline, e.g. `A & (B | C)`.
    pub fn outline(&self) -> String {
        self.root.map(|r| self.outline_of(r)).unwrap_or_default()
    }

    fn outline_of(&self, index: usize) -> String {
        let node = &self.nodes[index];
        match &node.kind {
            NodeKind::Leaf { letter } => letter.clone(),
            NodeKind::Operator(op) => self
                .display_children(index)
                .into_iter()
                .map(|child| {
                    let text = self.outline_of(child);
                    if self.nodes[child].grouped && !self.nodes[child].is_leaf() {
                        format!("({text})")
                    } else {
                        text
                    }
                })
                .collect::<Vec<_>>()
                .join(&format!(" {op} ")),
        }
    }

    /// Flat, depth-first list of outline rows.
    pub fn entries(&self) -> Vec<TreeEntry> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.walk(root, &mut Vec::new(), true, &mut out);
        }
        out
    }

    fn walk(&self, index: usize, ancestors: &mut Vec<bool>, last: bool, out: &mut Vec<TreeEntry>) {
        let node = &self.nodes[index];
        let depth = ancestors.len();
        let mut connectors: Vec<Connector> = ancestors
            .iter()
            .skip(1)
            .map(|&more| {
                if more {
                    Connector::Vertical
                } else {
                    Connector::Blank
                }
            })
            .collect();
        if depth > 0 {
            connectors.push(if last {
                Connector::LastBranch
            } else {
                Connector::Branch
            });
        }
        let label = match &node.kind {
            NodeKind::Operator(op) => vec![LabelFragment::Operator(*op)],
            NodeKind::Leaf { letter } => vec![
                LabelFragment::Letter(letter.clone()),
                LabelFragment::Clause(node.text.clone()),
            ],
        };
        out.push(TreeEntry {
            id: node.id,
            depth,
            connectors,
            label,
            span: node.span,
        });

        let children = self.display_children(index);
        ancestors.push(!last);
        for (i, child) in children.iter().enumerate() {
            self.walk(*child, ancestors, i + 1 == children.len(), out);
        }
        ancestors.pop();
    }
}

struct Builder<'a> {
    parsed: &'a ParsedExpression,
    chars: &'a [char],
    nodes: Vec<TreeNode>,
    leaves: usize,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// A span waiting to become a node.
struct Pending {
    container: RegionId,
    span: Span,
    link: Option<(usize, Side)>,
    grouped: bool,
    /// Remaining split points of a same-operator chain, last first.
    chain: Option<(LogicalOp, Vec<usize>)>,
}

impl Builder<'_> {
    /// Build the subtree for `span` depth first, left before right, so the
    /// arena stays in pre-order and leaves are lettered left to right.
    fn build(&mut self, container: RegionId, span: Span) -> Option<usize> {
        let mut root = None;
        let mut pending = vec![Pending {
            container,
            span,
            link: None,
            grouped: false,
            chain: None,
        }];
        while let Some(task) = pending.pop() {
            let link = task.link;
            let Some(index) = self.place(task, &mut pending) else {
                continue;
            };
            match link {
                None => root = Some(index),
                Some((parent, Side::Left)) => self.nodes[parent].left = Some(index),
                Some((parent, Side::Right)) => self.nodes[parent].right = Some(index),
            }
        }
        root
    }

    /// Push the node for `task` and queue its operands.
    fn place(&mut self, task: Pending, pending: &mut Vec<Pending>) -> Option<usize> {
        let Pending {
            mut container,
            span,
            link,
            mut grouped,
            chain,
        } = task;
        let mut span = self.trim(span);
        if span.is_empty() {
            return None;
        }

        let chain = match chain {
            Some(chain) => Some(chain),
            None => {
                while let Some(group) = self.covering_group(container, span) {
                    let inner = self
                        .parsed
                        .region(group)
                        .map(|r| r.inner())
                        .unwrap_or(span);
                    container = group;
                    span = self.trim(inner);
                    grouped = true;
                    if span.is_empty() {
                        return None;
                    }
                }
                self.find_splits(container, span)
            }
        };

        let index = self.nodes.len();
        let kind = match &chain {
            Some((op, _)) => NodeKind::Operator(*op),
            None => {
                let letter = leaf_letter(self.leaves);
                self.leaves += 1;
                NodeKind::Leaf { letter }
            }
        };
        let text = match kind {
            NodeKind::Leaf { .. } => self.parsed.text(span),
            NodeKind::Operator(_) => String::new(),
        };
        self.nodes.push(TreeNode {
            id: span.into(),
            kind,
            span,
            text,
            parent: link.map(|(parent, _)| parent),
            left: None,
            right: None,
            grouped,
        });

        if let Some((op, mut rest)) = chain {
            if let Some(at) = rest.pop() {
                let right_chain = if rest.is_empty() {
                    None
                } else {
                    Some((op, rest))
                };
                pending.push(Pending {
                    container,
                    span: Span::new(at + 1, span.end),
                    link: Some((index, Side::Right)),
                    grouped: false,
                    chain: right_chain,
                });
                pending.push(Pending {
                    container,
                    span: Span::new(span.start, at),
                    link: Some((index, Side::Left)),
                    grouped: false,
                    chain: None,
                });
            }
        }
        Some(index)
    }

    fn trim(&self, span: Span) -> Span {
        let (mut start, mut end) = (span.start, span.end);
        while start < end && self.chars[start].is_whitespace() {
            start += 1;
        }
        while end > start && self.chars[end - 1].is_whitespace() {
            end -= 1;
        }
        Span::new(start, end)
    }

    fn children(&self, container: RegionId) -> &[RegionId] {
        self.parsed
            .region(container)
            .map(|r| r.children.as_slice())
            .unwrap_or(&[])
    }

    /// A grouping of `container` spanning exactly `span`.
    fn covering_group(&self, container: RegionId, span: Span) -> Option<RegionId> {
        self.children(container).iter().copied().find(|&id| {
            self.parsed
                .region(id)
                .is_some_and(|r| r.rule == Rule::Grouping && r.span == span)
        })
    }

    /// Top-level `|` positions, else top-level `&` positions, outside child
    /// regions. Returned last first.
    fn find_splits(&self, container: RegionId, span: Span) -> Option<(LogicalOp, Vec<usize>)> {
        let children = self.children(container);
        let first = children.partition_point(|&id| {
            self.parsed
                .region(id)
                .is_some_and(|r| r.span.start < span.start)
        });
        let mut regions = children[first..]
            .iter()
            .filter_map(|&id| self.parsed.region(id))
            .filter(|r| !r.span.is_empty())
            .peekable();

        let (mut ors, mut ands) = (Vec::new(), Vec::new());
        let mut pos = span.start;
        while pos < span.end {
            while regions.next_if(|r| r.span.start < pos).is_some() {}
            if let Some(region) = regions.next_if(|r| r.span.start == pos) {
                pos = region.span.end;
                continue;
            }
            match self.chars[pos] {
                '|' => ors.push(pos),
                '&' => ands.push(pos),
                _ => {}
            }
            pos += 1;
        }
        let (op, mut splits) = if !ors.is_empty() {
            (LogicalOp::Or, ors)
        } else if !ands.is_empty() {
            (LogicalOp::And, ands)
        } else {
            return None;
        };
        splits.reverse();
        Some((op, splits))
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
