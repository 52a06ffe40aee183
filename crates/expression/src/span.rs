// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for expression text.

use serde::{Deserialize, Serialize};

/// A span representing a range in the source text.
///
/// Offsets count characters, not bytes, so positions stay meaningful for
/// host and key names written in Cyrillic or Japanese.
///
/// # Examples
///
/// ```ignore
/// use trex_expression::Span;
///
/// let source = "{хост:key.last(0)}";
/// let span = Span::new(1, 5);
/// assert_eq!(span.slice(source), "хост");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns the length of the span in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `start <= pos < end`.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Returns true if `other` lies entirely within this span.
    #[inline]
    pub fn covers(&self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Merge two spans into one that covers both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        let Some(start) = byte_offset(source, self.start) else {
            return "";
        };
        let end = byte_offset(source, self.end).unwrap_or(source.len());
        source.get(start..end).unwrap_or("")
    }
}

/// Byte offset of the `index`-th character, or `len` for one past the end.
fn byte_offset(source: &str, index: usize) -> Option<usize> {
    source
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(source.len()))
        .nth(index)
}

/// Generate a context snippet showing the error location in source text.
///
/// ```text
/// {host:key.str(")}
///               ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    let at = span.start.min(chars.len());
    let start = at.saturating_sub(context_chars);
    let end = (at + context_chars + 1).min(chars.len());
    let snippet: String = chars[start..end].iter().collect();
    let caret_len = span.len().max(1);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(at - start),
        "^".repeat(caret_len)
    )
}

/// Locate a span in source, returning (line_number, column, line_content).
///
/// Line numbers are 1-indexed, columns are 0-indexed characters.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let mut line_num = 1;
    let mut line_start = 0;
    let mut col = 0;

    for (n, (i, ch)) in source.char_indices().enumerate() {
        if n >= span.start {
            break;
        }
        if ch == '\n' {
            line_num += 1;
            line_start = i + 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    (line_num, col, &source[line_start..line_end])
}

/// Generate a rich diagnostic message with line/column info.
///
/// ```text
/// error: unexpected end of input
///   --> line 1, column 15
///    |
///  1 | {host:key.str(")}
///    |               ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let span_len = span.len().max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(span_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
