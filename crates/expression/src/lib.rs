// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! trex-expression: trigger expression language
//!
//! The scanner turns expression text into a flat list of nested regions
//! driven by a static grammar table. On top of the parse result sit the
//! `&`/`|` tree used for outlines and structural edits, the semantic
//! validator, and a small evaluator for testing expressions against sample
//! values.

pub mod cache;
pub mod edit;
pub mod error;
pub mod eval;
pub mod grammar;
pub mod parsed;
pub mod scanner;
pub mod span;
pub mod tester;
pub mod tree;
pub mod validate;

pub use cache::ExpressionCache;
pub use edit::{edit_expression, rebuild, EditAction, EditError};
pub use error::{SemanticError, SemanticErrorKind, SyntaxError, SyntaxErrorKind};
pub use eval::{evaluate, evaluate_bool, EvalError};
pub use grammar::{GrammarRule, Rule};
pub use parsed::{FunctionCall, ParsedExpression, Region, RegionId};
pub use scanner::{parse, parse_with_config, ScanConfig};
pub use span::Span;
pub use tester::{test_expression, test_inputs, LeafResult, TestError, TestReport};
pub use tree::{
    leaf_letter, Connector, ExpressionTree, LabelFragment, LogicalOp, NodeId, NodeIdError,
    NodeKind, TreeEntry, TreeNode,
};
pub use validate::{validate_call, validate_expression, ItemLookup, ItemResolver};
