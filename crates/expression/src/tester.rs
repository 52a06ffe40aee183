// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluate an expression against sample values.
//!
//! Every function call and macro at operand level is replaced by a value
//! supplied by the caller, keyed by the reference's source text. The result
//! is reported for the whole expression and for each tree leaf.

use crate::eval::{evaluate_bool, EvalError};
use crate::parsed::ParsedExpression;
use crate::span::Span;
use crate::tree::{ExpressionTree, NodeId, NodeKind};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use trex_core::{format_number, parse_number};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TestError {
    #[error("no value given for {reference}")]
    MissingValue { reference: String },
    #[error("value '{value}' for {reference} is not numeric")]
    NotNumeric { reference: String, value: String },
    #[error("cannot evaluate '{text}': {source}")]
    Eval {
        text: String,
        #[source]
        source: EvalError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafResult {
    pub letter: String,
    pub id: NodeId,
    pub clause: String,
    /// Clause with sample values substituted.
    pub substituted: String,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestReport {
    pub expression: String,
    pub substituted: String,
    pub result: bool,
    pub leaves: Vec<LeafResult>,
}

/// Distinct reference texts that need a sample value, in source order.
pub fn test_inputs(parsed: &ParsedExpression) -> Vec<String> {
    let mut inputs: Vec<String> = Vec::new();
    for region in parsed.operand_references() {
        let text = parsed.text(region.span);
        if !inputs.contains(&text) {
            inputs.push(text);
        }
    }
    inputs
}

/// Substitute `values` into `parsed` and evaluate it.
pub fn test_expression(
    parsed: &ParsedExpression,
    tree: &ExpressionTree,
    values: &HashMap<String, String>,
) -> Result<TestReport, TestError> {
    let mut replacements = Vec::new();
    for region in parsed.operand_references() {
        let reference = parsed.text(region.span);
        let raw = values
            .get(&reference)
            .ok_or_else(|| TestError::MissingValue {
                reference: reference.clone(),
            })?;
        let number = parse_number(raw).ok_or_else(|| TestError::NotNumeric {
            reference: reference.clone(),
            value: raw.clone(),
        })?;
        let text = if number < 0.0 {
            format!("({})", format_number(number))
        } else {
            format_number(number)
        };
        replacements.push((region.span, text));
    }

    let chars: Vec<char> = parsed.source().chars().collect();
    let whole = Span::new(0, chars.len());
    let substituted = substitute(&chars, whole, &replacements);
    let result = run(&substituted)?;

    let mut leaves = Vec::new();
    for node in tree.leaves() {
        let NodeKind::Leaf { letter } = &node.kind else {
            continue;
        };
        let text = substitute(&chars, node.span, &replacements);
        leaves.push(LeafResult {
            letter: letter.clone(),
            id: node.id,
            clause: node.text.clone(),
            result: run(&text)?,
            substituted: text,
        });
    }

    tracing::debug!(result, leaves = leaves.len(), "expression tested");
    Ok(TestReport {
        expression: parsed.source().to_string(),
        substituted,
        result,
        leaves,
    })
}

fn run(text: &str) -> Result<bool, TestError> {
    evaluate_bool(text).map_err(|source| TestError::Eval {
        text: text.to_string(),
        source,
    })
}

/// Text of `span` with every replacement inside it applied.
fn substitute(chars: &[char], span: Span, replacements: &[(Span, String)]) -> String {
    let mut out = String::new();
    let mut pos = span.start;
    while pos < span.end {
        if let Some((region, text)) = replacements
            .iter()
            .find(|(r, _)| r.start == pos && r.end <= span.end)
        {
            out.push_str(text);
            pos = region.end;
        } else {
            out.push(chars[pos]);
            pos += 1;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
#[path = "tester_tests.rs"]
mod tests;
