// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Function and key parameter lists.

use super::{assert_invalid, assert_valid};
use similar_asserts::assert_eq;
use yare::parameterized;

#[parameterized(
    trailing_comma = { "{host:key.count(1,)}=0" },
    leading_space = { "{host:key.count( 1,)}=0" },
    space_after_comma = { "{host:key.count(1, )}=0" },
    empty_quoted = { "{host:key.str(\"\")}=0" },
    padded_empty_quoted = { "{host:key.str(  \"\")}=0" },
    second_empty_quoted = { "{host:key.count(1, \"\")}=0" },
    two_empty_quoted = { "{host:key.count(1,\"\", \"\")}=0" },
    escaped_quote = { "{host:key.str(\"\\\"\")}=0" },
    double_backslash = { "{host:key.str(\"\\\\\"\")}=0" },
    bare_escaped_quote = { "{host:key.str(\\\")}=0" },
    bare_quote_after_text = { "{host:key.str(param\")}=0" },
    open_paren = { "{host:key.str(()}=0" },
    text_open_paren = { "{host:key.str( param()}=0" },
    quoted_open_paren = { "{host:key.str(\"param(\")}=0" },
    quoted_close_paren = { "{host:key.str(\")\")}=0" },
    empty = { "{host:key.str()}=0" },
    blank = { "{host:key.str( )}=0" },
    quoted_space = { "{host:key.str(\" \")}=0" },
    single_quotes = { "{host:key.str('abc')}=0" },
    plus_sign = { "{host:key.str(+5)}" },
    open_bracket = { "{host:key.str([-5)}" },
    close_bracket = { "{host:key.str(-5])}" },
    inner_quotes = { "0={host:key[].str(a\"b\"c)}" },
    quoted_brace = { "0={host:key[].str(\")}\")}" },
)]
fn function_parameters(input: &str) {
    assert_valid(input);
}

#[parameterized(
    nested_arrays = { "{host:key[a,,\"b\",,[c,d,,\"e\",],,[f]].count(1,,\"b\",3)}" },
    deeper_arrays = { "{host:key[a,,\"b\",,[[c,d,,\"e\"],[]],,[f]].count(1,,\"b\",3)}" },
    open_bracket_in_text = { "{host:key[asd[].str(aaa()}=0" },
    quoted_function_text = { "{host:key[\"param].diff()\"].diff()}=0" },
    several_brackets = { "{host:key[asd[,asd[,[]].str(aaa()}=0" },
    empty_arrays = { "{host:key[[],[],[]].str()}=0" },
    arrays_as_function_params = { "{host:key[].count(1,[],[])}=0" },
)]
fn key_parameters(input: &str) {
    assert_valid(input);
}

#[test]
fn parameter_lists_are_unquoted() {
    let parsed = assert_valid(r#"{host:key.count(1,"",  "a\"b" , x"y)}=0"#);
    let call = &parsed.function_calls()[0];
    assert_eq!(call.params, vec!["1", "", "a\"b", "x\"y"]);
    assert_eq!(call.function_param, r#"1,"",  "a\"b" , x"y"#);
}

#[test]
fn nested_key_arrays_stay_in_item() {
    let parsed = assert_valid(r#"{host:key[a,[b,"c"]].last(0)}=0"#);
    let call = &parsed.function_calls()[0];
    assert_eq!(call.item, r#"key[a,[b,"c"]]"#);
    assert_eq!(call.function, "last(0)");
}

#[test]
fn parameter_closing_twice_is_rejected() {
    for input in [
        "{host:key.str())}=0",
        "{host:key.str( ))}=0",
        "{host:key.str(  param))}=0",
    ] {
        assert_invalid(input);
    }
}
