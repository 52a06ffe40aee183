// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn span_basics() {
    let span = Span::new(2, 5);
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
    assert!(span.contains(2));
    assert!(!span.contains(5));
    assert!(Span::empty(4).is_empty());
    assert_eq!(span.merge(Span::new(4, 9)), Span::new(2, 9));
    assert!(Span::new(0, 10).covers(span));
    assert!(!span.covers(Span::new(0, 3)));
}

#[parameterized(
    ascii = { "{host:key.last(0)}", 1, 5, "host" },
    cyrillic = { "{хост:key.last(0)}", 1, 5, "хост" },
    japanese = { "{ホスト:キー.last(0)}", 5, 7, "キー" },
    to_end = { "abc", 1, 3, "bc" },
    empty = { "abc", 1, 1, "" },
)]
fn slice_counts_characters(source: &str, start: usize, end: usize, expected: &str) {
    assert_eq!(Span::new(start, end).slice(source), expected);
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(7, 9).slice("abc"), "");
}

#[test]
fn context_snippet_points_at_character_column() {
    let snippet = context_snippet("{хост:key}", Span::new(9, 10), 20);
    assert_eq!(snippet, "{хост:key}\n         ^");
}

#[test]
fn locate_span_on_second_line() {
    let (line, col, content) = locate_span("1+1\n& {TRIGGER.VALUE}", Span::new(6, 21));
    assert_eq!(line, 2);
    assert_eq!(col, 2);
    assert_eq!(content, "& {TRIGGER.VALUE}");
}

#[test]
fn diagnostic_context_includes_location() {
    let diag = diagnostic_context("1 || 2", Span::new(3, 4), "unexpected '|'");
    assert!(diag.contains("error: unexpected '|'"));
    assert!(diag.contains("line 1, column 4"));
    assert!(diag.contains("  1 | 1 || 2"));
}
