// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-ASCII hosts, keys and parameters.

use super::{assert_invalid, assert_valid};
use similar_asserts::assert_eq;
use trex_expression::Span;
use yare::parameterized;

#[parameterized(
    cyrillic_param = { "{host:key.str(ГУГЛ)}=0" },
    cyrillic_quoted = { "{host:key.str(\"ГУГЛ\")}=0" },
    cyrillic_key_param = { "{host:key[ГУГЛ].str(ГУГЛ)}=0" },
    cyrillic_both_quoted = { "{host:key[\"ГУГЛ\"].str(\"ГУГЛ\")}=0" },
    japanese_quoted = { "{host:key.str(\"こんにちは、世界\")}" },
    japanese_bare = { "{host:key.str(こんにちは、世界)}" },
    japanese_key_quoted = { "{host:key[\"こんにちは、世界\"].str(\"こんにちは、世界\")}" },
    japanese_key_bare = { "{host:key[こんにちは、世界].str(こんにちは、世界)}" },
    cyrillic_host = { "{хост:ключ.last(0)}=1" },
)]
fn accepted(input: &str) {
    assert_valid(input);
}

#[test]
fn positions_are_character_offsets() {
    let input = "{host:key.str(\"ГУГЛ\")}=0 | {ホスト:キー.last(0)}=1";
    let parsed = assert_valid(input);
    let calls = parsed.function_calls();
    assert_eq!(calls[0].span, Span::new(0, 22));
    assert_eq!(calls[0].params, vec!["ГУГЛ"]);
    assert_eq!(calls[1].span, Span::new(27, 43));
    assert_eq!(calls[1].host, "ホスト");
    assert_eq!(calls[1].span.slice(input), calls[1].expression);
}

#[test]
fn error_offsets_are_character_offsets() {
    let err = assert_invalid("{хост:ключ.last(0)}=1 ||");
    assert_eq!(err.span().start, 23);
}
