// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Every binary operator against signed operands, with and without spacing.

use super::{assert_invalid_kind, assert_valid};
use trex_expression::SyntaxErrorKind;

const OPERATORS: [char; 10] = ['*', '/', '+', '-', '=', '#', '<', '>', '&', '|'];

/// (space before operator, space after operator)
const SPACING: [(&str, &str); 4] = [(" ", " "), ("", " "), (" ", ""), ("", "")];

fn combinations(operand: &str) -> Vec<String> {
    let mut out = Vec::new();
    for op in OPERATORS {
        for (before, after) in SPACING {
            out.push(format!("{{host:key.last(1)}}{before}{op}{after}{operand}"));
        }
    }
    out
}

#[test]
fn negative_operands_are_accepted() {
    for operand in ["(-1)", "-1", "(- 1)", "- 1", "-1.173640", "-{$MACRO}"] {
        for input in combinations(operand) {
            assert_valid(&input);
        }
    }
}

#[test]
fn unsigned_operands_are_accepted() {
    for operand in ["1", "1.173640", "{host:key.diff()}", "{TRIGGER.VALUE}"] {
        for input in combinations(operand) {
            assert_valid(&input);
        }
    }
}

#[test]
fn unary_plus_is_rejected() {
    for operand in ["+1", "+ 1"] {
        for input in combinations(operand) {
            assert_invalid_kind(&input, SyntaxErrorKind::DisallowedBefore);
        }
    }
    for operand in ["(+1)", "(+ 1)"] {
        for input in combinations(operand) {
            assert_invalid_kind(&input, SyntaxErrorKind::DisallowedBefore);
        }
    }
}

#[test]
fn operators_between_references() {
    for op in OPERATORS {
        assert_valid(&format!("{{host:key.diff()}} {op} 1 | {{host:key.diff()}}"));
        assert_valid(&format!("{{host:key.diff()}} = 1 {op} {{host:key.diff()}}"));
    }
}

#[test]
fn leading_minus_is_the_only_unary_operator() {
    assert_valid("- {host:key.diff()}");
    for op in OPERATORS.iter().filter(|&&op| op != '-') {
        assert_invalid_kind(
            &format!("{op} {{host:key.diff()}}"),
            SyntaxErrorKind::DisallowedBefore,
        );
    }
}
