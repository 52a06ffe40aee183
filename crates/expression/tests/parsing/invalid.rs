// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expressions the scanner rejects.

use super::{assert_invalid, assert_invalid_kind};
use similar_asserts::assert_eq;
use trex_expression::SyntaxErrorKind;
use yare::parameterized;

#[parameterized(
    empty = { "" },
    lone_plus = { "+" },
    bare_word = { "abc" },
    host_only = { "{host}" },
    no_function = { "{host:key}" },
    no_parentheses = { "{host:key.str}" },
    lowercase_trigger_value = { "{host:key.last(0)}+{trigger.value}" },
    lowercase_user_macro = { "{$usermacro}" },
    constant = { "{constant}" },
    spaced_constant = { "{cons tant}" },
    no_braces = { "host:key.str()" },
    unclosed_brace = { "{host:key.str()" },
    no_open_brace = { "host:key.str()}" },
    no_colon = { "{hostkey.last(0)}=0" },
    no_dot = { "{host:keylast(0)}=0" },
    empty_host = { "{:key.diff()}" },
    empty_key = { "{host:.diff()}" },
    comma_key = { "{host:,.diff()}" },
    semicolon_key = { "{host:;.diff()}" },
    colon_key = { "{host::.diff()}" },
    empty_function_name = { "{host:key.()}" },
)]
fn malformed_references(input: &str) {
    assert_invalid(input);
}

#[parameterized(
    paren_inside_brace = { "{(host:key.diff()})" },
    brace_closes_late = { "({host:key.diff())}" },
    both_inside = { "{(host:key.diff())}" },
    dangling_compare = { "({host:key.diff()}=)0" },
    number_after_group = { "({host:key.diff()})0" },
    group_after_number = { "0({host:key.diff()})" },
    empty_group_first = { "()0={host:key.diff()}" },
    empty_group_after_number = { "0()={host:key.diff()}" },
    empty_group_operand = { "0=()={host:key.diff()}" },
    empty_group_in_brace = { "0={()host:key.diff()}" },
    stacked_groups = { "0={host:key.diff()}+()()()()5" },
    nested_empty = { "0={host:key.diff()}+((((()))))5" },
    operator_before_close = { "(0+)={host:key.diff()}" },
    unbalanced_divisor = { "(({host:key.diff()}) * 1w) / (1d * ({host:key.diff()})" },
    missing_brace = { "(({host:key.diff()}) * 1w) / (1d * host:key.diff()}))" },
    unclosed_group = { "({host:key.str(aaa()}=0" },
    stray_close = { "{host:key.str(aaa()}=0)" },
)]
fn unbalanced_groupings(input: &str) {
    assert_invalid(input);
}

#[parameterized(
    unterminated = { "{host:key.str(\")}=0" },
    unterminated_padded = { "{host:key.str(  \")}=0" },
    triple_quote = { "{host:key.str(\"\"\")}=0" },
    quadruple_quote = { "{host:key.str(\"\"\"\")}=0" },
    escaped_close = { "{host:key.str(\"\\\")}=0" },
    text_after_quote = { "0={host:key[].str(\"a\"b)}" },
    text_after_quote_in_key = { "0={host:key[\"a\"b].str()}" },
    text_after_second_param = { "0={host:key[].str(,\"a\"b,)}" },
    extra_close = { "{host:key.str(param))}=0" },
    operator_after_params = { "{host:key.str(-5)*1}" },
    key_after_params = { "{host:key[param].diff()].diff()}" },
    unclosed_nested_array = { "{host:key[a,,\"b\",,[c,d,,\"e\",,,[f]].count(1,,\"b\",3)}" },
    extra_array_close = { "{host:key[a,,\"b\",,[c,d,,\"e\",],,f]].count(1,,\"b\",3)}" },
)]
fn bad_parameters(input: &str) {
    assert_invalid(input);
}

#[parameterized(
    double_plus = { "{host:key.diff()} ++ 1" },
    double_slash = { "{host:key.diff()} // 1" },
    double_star = { "{host:key.diff()} ** 1" },
    double_equal = { "{host:key.diff()} == 1" },
    double_hash = { "{host:key.diff()} ## 1" },
    double_and = { "{host:key.diff()} && 1" },
    double_or = { "{host:key.diff()} || 1" },
    not_equal_angle = { "{host:key.str()}<>0" },
    or_of_groups = { "({host:key.diff()}=0) || ({host:key.diff()}=0)" },
    leading_plus = { "+ {host:key.diff()}" },
    leading_slash = { "/ {host:key.diff()}" },
    leading_and = { "& {host:key.diff()}" },
)]
fn doubled_and_leading_operators(input: &str) {
    assert_invalid_kind(input, SyntaxErrorKind::DisallowedBefore);
}

#[parameterized(
    trailing_plus = { "{host:key.diff()} +" },
    trailing_or = { "{host:key.diff()} |" },
    trailing_compare = { "{host:key.last(0)}=" },
    unclosed_params = { "{host:key.last(0}=0" },
)]
fn truncated(input: &str) {
    assert_invalid_kind(input, SyntaxErrorKind::UnexpectedEnd);
}

#[parameterized(
    two_numbers = { "{host:key.diff()}=0 0" },
    two_numbers_then_ref = { "{host:key.diff()}=0 0={host:key.diff()}" },
    unit_then_letter = { "(({host:key.diff()}) * 1w) / 1Ks" },
    letter_after_number = { "1z={host:key.str()}" },
)]
fn junk_after_operand(input: &str) {
    assert_invalid_kind(input, SyntaxErrorKind::DisallowedAfter);
}

#[test]
fn stray_closing_brace() {
    assert_invalid_kind("{host:key.last()}#0}", SyntaxErrorKind::UnnecessaryClosing);
}

#[test]
fn errors_point_at_offending_character() {
    let input = "{host:key.diff()} || 1";
    let err = assert_invalid(input);
    assert_eq!(err.span().start, 19);
    assert!(err.diagnostic(input).contains('^'));
}
