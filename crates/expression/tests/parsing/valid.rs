// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expressions the scanner accepts.

use super::{assert_valid, leaf_count};
use similar_asserts::assert_eq;
use yare::parameterized;

#[parameterized(
    number = { "1" },
    sum = { "1+1" },
    trigger_value = { "{TRIGGER.VALUE}" },
    user_macro = { "{$USERMACRO}" },
    trigger_value_compared = { "{TRIGGER.VALUE}=1" },
    user_macro_compared = { "{$USERMACRO}=1" },
    diff = { "{host:key.diff()}" },
    plus_trigger_value = { "{host:key.last(0)}+{TRIGGER.VALUE}" },
    and_macro = { "{host:key.diff()} & {TRIGGER.VALUE}" },
    and_tight = { "{host:key.diff()}&{TRIGGER.VALUE}" },
    and_negated_macro = { "{host:key.diff()}&-{TRIGGER.VALUE}" },
    and_spaced_negation = { "{host:key.diff()} & - {$USERMACRO}" },
    leading_zero = { "{host:key.diff()}=00" },
    chained_compare = { "{host:key.diff()} = 00 = {host:key.diff()}" },
    host_charset = { "{abcdefghijklmnopqrstuvwxyz. _-ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890:key.diff()}" },
    key_charset = { "{host:abcdefghijklmnopqrstuvwxyz._-ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890.diff()}" },
    surrounding_space = { " {host:key.diff()} " },
    space_in_host = { "{ host:key.str()}" },
    space_before_colon = { "{host :key.str()}" },
)]
fn simple(input: &str) {
    assert_valid(input);
}

#[parameterized(
    grouped = { "({host:key.diff()})" },
    padded = { "( {host:key.diff()} )" },
    padded_outside = { " ( {host:key.diff()} ) " },
    double = { "(( {host:key.diff()} ))" },
    triple = { "((( {host:key.diff()} )))" },
    triple_padded = { " ( ( ( {host:key.diff()} ) ) ) " },
    seven = { "((((((({host:key.str(\"\")})))))))" },
    constant_group = { "(0)={host:key.diff()}" },
    negative_group = { "(-5)={host:key.diff()}" },
    arithmetic_group = { "(15 - 5.25 - 1)={host:key.diff()}" },
    compare_in_group = { "(({host:key.diff()})=0)" },
    spaced_compare_in_group = { "( ( {host:key.diff()} ) = 0 )" },
    scaled = { "(({host:key.diff()}) * 100) / 95" },
    kilo = { "(({host:key.diff()}) * 5.25K) / 95.0" },
    weeks_over_days = { "(({host:key.diff()}) * 1w) / 1d" },
    nested_divisor = { "(({host:key.diff()}) * 1w) / (1d * ({host:key.diff()}))" },
    or_of_groups = { "({host:key.diff()}=0) | ({host:key.diff()}=0)" },
    and_of_groups = { "({hostA:keyA.str(\"abc\")}=0) & ({hostB:keyB.last(123)}=0)" },
    ratio = { "({hostA:keyA.str(\"abc\")}) / ({hostB:keyB.last(123)})=(0)" },
)]
fn groupings(input: &str) {
    assert_valid(input);
}

#[parameterized(
    kilo = { "K" },
    mega = { "M" },
    giga = { "G" },
    tera = { "T" },
    seconds = { "s" },
    minutes = { "m" },
    hours = { "h" },
    days = { "d" },
    weeks = { "w" },
)]
fn suffixed_numbers(suffix: &str) {
    assert_valid(&format!("{{host:key.diff()}}=1{suffix}"));
    assert_valid(&format!("{{host:key.diff()}}=1.56{suffix}"));
}

#[test]
fn mixed_expression() {
    let input = "({host1:key1.last(0)}/{host2:key2.last(5)})/10+2*{TRIGGER.VALUE}&{$USERMACRO1}+(-{$USERMACRO2})+-{$USERMACRO3}*-12K+12.5m";
    let parsed = assert_valid(input);
    let calls = parsed.function_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].span.start, 1);
    assert_eq!(calls[0].host, "host1");
    assert_eq!(calls[0].item, "key1");
    assert_eq!(calls[0].function, "last(0)");
    assert_eq!(calls[0].function_param, "0");
    assert_eq!(calls[0].params, vec!["0"]);
    assert_eq!(calls[1].span.start, 22);
    assert_eq!(calls[1].host, "host2");
    assert_eq!(parsed.macros(), vec!["{TRIGGER.VALUE}"]);
    assert_eq!(
        parsed.user_macros(),
        vec!["{$USERMACRO1}", "{$USERMACRO2}", "{$USERMACRO3}"]
    );
}

#[test]
fn deep_parentheses_collapse_to_one_leaf() {
    assert_eq!(leaf_count("((((((({host:key.str(\"\")})))))))"), 1);
    assert_eq!(leaf_count("({host:key.diff()}=0) | ({host:key.diff()}=0)"), 2);
}
