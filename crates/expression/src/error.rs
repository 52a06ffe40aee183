// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax and semantic error types.
//!
//! Errors carry a kind, a numeric code and a character span. Rendering
//! prose for end users is left to the caller; [`SyntaxError::context`] and
//! [`SyntaxError::diagnostic`] only add a caret snippet.

use crate::grammar::Rule;
use crate::span::{context_snippet, diagnostic_context, Span};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use trex_core::ValueType;

/// Grammar violation classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxErrorKind {
    /// Input ended while a region was still open or an operand was expected.
    UnexpectedEnd,
    /// A symbol that no rule accepts at this position.
    DisallowedSymbol,
    /// A closing symbol with nothing to close.
    UnnecessaryClosing,
    /// An operator where an operand must come first.
    DisallowedBefore,
    /// Something other than a separator right after a completed element.
    DisallowedAfter,
    /// A region with no content whose rule requires some.
    EmptyElement,
    TooLong,
    TooDeep,
}

impl SyntaxErrorKind {
    pub fn code(self) -> u8 {
        match self {
            SyntaxErrorKind::UnexpectedEnd => 1,
            SyntaxErrorKind::DisallowedSymbol => 2,
            SyntaxErrorKind::UnnecessaryClosing => 3,
            SyntaxErrorKind::DisallowedBefore => 4,
            SyntaxErrorKind::DisallowedAfter => 5,
            SyntaxErrorKind::EmptyElement => 7,
            SyntaxErrorKind::TooLong => 17,
            SyntaxErrorKind::TooDeep => 18,
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SyntaxErrorKind::UnexpectedEnd => "unexpected end of element",
            SyntaxErrorKind::DisallowedSymbol => "disallowed symbol",
            SyntaxErrorKind::UnnecessaryClosing => "unnecessary closing symbol",
            SyntaxErrorKind::DisallowedBefore => "disallowed symbol before element",
            SyntaxErrorKind::DisallowedAfter => "disallowed symbol after element",
            SyntaxErrorKind::EmptyElement => "empty element",
            SyntaxErrorKind::TooLong => "expression too long",
            SyntaxErrorKind::TooDeep => "expression nested too deeply",
        };
        f.write_str(text)
    }
}

/// A grammar violation at a specific offset.
///
/// `rule` names the region that was open when the violation was found.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{kind} at position {} in {rule}", span.start)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
    pub rule: Rule,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span, rule: Rule) -> Self {
        Self { kind, span, rule }
    }

    pub fn code(&self) -> u8 {
        self.kind.code()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Caret snippet around the offending position.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span, context_chars)
    }

    /// Compiler-style diagnostic with line and column.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span, &self.to_string())
    }
}

/// Function-level problems found after a successful parse.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SemanticErrorKind {
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },
    #[error("function '{name}' takes at most {max} parameters, {given} given")]
    TooManyArguments {
        name: String,
        max: usize,
        given: usize,
    },
    #[error("function '{name}' is missing mandatory parameter {}", index + 1)]
    MissingMandatoryArgument { name: String, index: usize },
    #[error("parameter {} of '{name}' must be a number of seconds or a macro, got '{value}'", index + 1)]
    InvalidSeconds {
        name: String,
        index: usize,
        value: String,
    },
    #[error("parameter {} of '{name}' must be seconds, a #count or a macro, got '{value}'", index + 1)]
    InvalidSecondsOrCount {
        name: String,
        index: usize,
        value: String,
    },
    #[error("function '{name}' does not accept parameters")]
    ParametersNotAccepted { name: String },
    #[error("function '{name}' cannot be applied to {value_type} items")]
    ValueTypeMismatch {
        name: String,
        value_type: ValueType,
        allowed: Vec<ValueType>,
    },
    #[error("host '{host}' does not exist")]
    HostNotFound { host: String },
    #[error("item '{key}' does not exist on host '{host}'")]
    ItemNotFound { host: String, key: String },
    #[error("expression does not reference any item")]
    NoItemReferenced,
}

impl SemanticErrorKind {
    pub fn code(&self) -> u8 {
        match self {
            SemanticErrorKind::UnknownFunction { .. } => 6,
            SemanticErrorKind::HostNotFound { .. } => 8,
            SemanticErrorKind::ItemNotFound { .. } => 9,
            SemanticErrorKind::ValueTypeMismatch { .. } => 10,
            SemanticErrorKind::MissingMandatoryArgument { .. } => 11,
            SemanticErrorKind::InvalidSeconds { .. } => 12,
            SemanticErrorKind::InvalidSecondsOrCount { .. } => 13,
            SemanticErrorKind::ParametersNotAccepted { .. } => 14,
            SemanticErrorKind::NoItemReferenced => 16,
            SemanticErrorKind::TooManyArguments { .. } => 19,
        }
    }
}

/// A semantic problem attached to the span of the clause that caused it.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{kind} at position {}", span.start)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub span: Span,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn code(&self) -> u8 {
        self.kind.code()
    }

    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span, &self.kind.to_string())
    }
}
