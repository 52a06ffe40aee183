// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rule-driven expression scanner.
//!
//! Scans left to right keeping a stack of open regions. Opening and closing
//! go through [`Scanner::open`] and [`Scanner::close`], which enforce the
//! grammar table: parent linkage, delimiters, escapes and emptiness. The
//! body routines only decide which rule comes next.

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::grammar::{Close, Open, Rule};
use crate::parsed::{ParsedExpression, Region, RegionId};
use crate::span::Span;

/// Limits applied while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum input length in characters (0 = unlimited).
    pub max_length: usize,
    /// Maximum region nesting depth (0 = unlimited).
    pub max_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_length: 0,
            max_depth: 64,
        }
    }
}

const TRIGGER_VALUE: &str = "{TRIGGER.VALUE}";
const NUMBER_SUFFIXES: &str = "KMGTsmhdw";

/// Parse an expression with the default limits.
///
/// # Example
///
/// ```ignore
/// use trex_expression::parse;
///
/// let parsed = parse("{host:key.last(0)}>5")?;
/// assert_eq!(parsed.function_calls()[0].host, "host");
/// assert!(parse("{host:key.last(0)}||1").is_err());
/// ```
pub fn parse(input: &str) -> Result<ParsedExpression, SyntaxError> {
    parse_with_config(input, &ScanConfig::default())
}

pub fn parse_with_config(
    input: &str,
    config: &ScanConfig,
) -> Result<ParsedExpression, SyntaxError> {
    let result = Scanner::new(input, config).run();
    match &result {
        Ok(parsed) => tracing::debug!(
            regions = parsed.regions().len(),
            calls = parsed.function_calls().len(),
            "expression parsed"
        ),
        Err(e) => tracing::debug!(code = e.code(), error = %e, "expression rejected"),
    }
    result
}

pub(crate) fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '=' | '#' | '<' | '>' | '&' | '|')
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_host_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-')
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn is_macro_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '_' | '.')
}

type ScanResult<T = ()> = Result<T, SyntaxError>;

struct Scanner<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
    regions: Vec<Region>,
    stack: Vec<RegionId>,
    config: &'a ScanConfig,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, config: &'a ScanConfig) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let root = Region {
            rule: Rule::Independent,
            span: Span::new(0, chars.len()),
            open: None,
            close: None,
            parent: None,
            children: Vec::new(),
        };
        Self {
            input,
            chars,
            pos: 0,
            regions: vec![root],
            stack: vec![0],
            config,
        }
    }

    fn run(mut self) -> ScanResult<ParsedExpression> {
        let len = self.chars.len();
        if self.config.max_length > 0 && len > self.config.max_length {
            return Err(SyntaxError::new(
                SyntaxErrorKind::TooLong,
                Span::new(self.config.max_length, len),
                Rule::Independent,
            ));
        }
        self.sequence(None)?;
        Ok(ParsedExpression::new(self.input, self.chars, self.regions))
    }

    // -- cursor --

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn skip_ws(&mut self) {
        self.skip_while(is_space);
    }

    fn lookahead(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c))
    }

    // -- errors --

    fn top(&self) -> RegionId {
        self.stack.last().copied().unwrap_or(0)
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        let span = if self.pos < self.chars.len() {
            Span::new(self.pos, self.pos + 1)
        } else {
            Span::empty(self.pos)
        };
        SyntaxError::new(kind, span, self.regions[self.top()].rule)
    }

    /// End of input, or a symbol the current rule does not accept.
    fn unexpected(&self) -> SyntaxError {
        match self.peek() {
            None => self.error(SyntaxErrorKind::UnexpectedEnd),
            Some(_) => self.error(SyntaxErrorKind::DisallowedSymbol),
        }
    }

    // -- grammar-table driven region handling --

    fn open(&mut self, rule: Rule) -> ScanResult<RegionId> {
        let parent = self.top();
        if !rule.can_nest_in(self.regions[parent].rule) {
            return Err(self.error(SyntaxErrorKind::DisallowedSymbol));
        }
        if self.config.max_depth > 0 && self.stack.len() > self.config.max_depth {
            return Err(self.error(SyntaxErrorKind::TooDeep));
        }

        let start = self.pos;
        let open = match rule.grammar().open {
            Open::Symbol(symbol) => {
                if self.peek() != Some(symbol) {
                    return Err(self.unexpected());
                }
                self.bump();
                Some(symbol)
            }
            Open::Brace => {
                if self.peek() != Some('{') {
                    return Err(self.unexpected());
                }
                self.bump();
                Some('{')
            }
            Open::Root | Open::Implicit => None,
        };

        let id = self.regions.len();
        self.regions.push(Region {
            rule,
            span: Span::new(start, self.pos),
            open,
            close: None,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.regions[parent].children.push(id);
        self.stack.push(id);
        Ok(id)
    }

    fn close(&mut self) -> ScanResult {
        let id = self.top();
        let rule = self.regions[id].rule;
        let grammar = rule.grammar();

        let close = match grammar.close {
            Close::Symbol(symbol) => {
                if self.peek() != Some(symbol) {
                    return Err(self.unexpected());
                }
                self.bump();
                Some(symbol)
            }
            Close::Before(symbols) => match self.peek() {
                Some(c) if symbols.contains(&c) => None,
                _ => return Err(self.unexpected()),
            },
            Close::EndOfInput => None,
        };

        let region = &mut self.regions[id];
        region.span.end = self.pos;
        region.close = close;
        if !grammar.allow_empty && region.inner().is_empty() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::EmptyElement,
                region.span,
                rule,
            ));
        }
        self.stack.pop();
        Ok(())
    }

    /// Consume the body of a symbol-closed rule up to its close symbol.
    ///
    /// The rule's escape symbol hides a close symbol placed right after it.
    fn delimited(&mut self, rule: Rule) -> ScanResult {
        let grammar = rule.grammar();
        let Close::Symbol(close) = grammar.close else {
            return Ok(());
        };
        loop {
            match self.peek() {
                None => return Err(self.error(SyntaxErrorKind::UnexpectedEnd)),
                Some(c) if c == close => return Ok(()),
                Some(c) if Some(c) == grammar.escape && self.peek_at(1) == Some(close) => {
                    self.pos += 2;
                }
                Some(_) => self.bump(),
            }
        }
    }

    // -- operand level: independent and grouping --

    fn sequence(&mut self, terminator: Option<char>) -> ScanResult {
        loop {
            self.skip_ws();
            self.operand()?;
            self.skip_ws();
            match self.peek() {
                None if terminator.is_none() => return Ok(()),
                None => return Err(self.error(SyntaxErrorKind::UnexpectedEnd)),
                Some(c) if Some(c) == terminator => return Ok(()),
                Some(c) if is_operator(c) => self.bump(),
                Some(')' | ']' | '}') => {
                    return Err(self.error(SyntaxErrorKind::UnnecessaryClosing))
                }
                Some(_) => return Err(self.error(SyntaxErrorKind::DisallowedAfter)),
            }
        }
    }

    fn operand(&mut self) -> ScanResult {
        if self.peek() == Some('-') {
            self.bump();
            self.skip_ws();
        }
        match self.peek() {
            None => Err(self.error(SyntaxErrorKind::UnexpectedEnd)),
            Some('(') => self.grouping(),
            Some('{') => self.brace(),
            Some(c) if c.is_ascii_digit() => {
                self.number();
                Ok(())
            }
            Some(c) if is_operator(c) => Err(self.error(SyntaxErrorKind::DisallowedBefore)),
            Some(_) => Err(self.error(SyntaxErrorKind::DisallowedSymbol)),
        }
    }

    fn grouping(&mut self) -> ScanResult {
        let start = self.pos;
        self.open(Rule::Grouping)?;
        self.skip_ws();
        if self.peek() == Some(')') {
            return Err(SyntaxError::new(
                SyntaxErrorKind::EmptyElement,
                Span::new(start, self.pos + 1),
                Rule::Grouping,
            ));
        }
        self.sequence(Some(')'))?;
        self.close()
    }

    fn number(&mut self) {
        self.skip_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.bump();
            self.skip_while(|c| c.is_ascii_digit());
        }
        if self.peek().is_some_and(|c| NUMBER_SUFFIXES.contains(c)) {
            self.bump();
        }
    }

    // -- brace constructs --

    fn brace(&mut self) -> ScanResult {
        if self.lookahead(TRIGGER_VALUE) {
            return self.trigger_macro();
        }
        match self.peek_at(1) {
            Some('$') => self.user_macro(),
            Some(c) if c.is_ascii_digit() && self.is_function_ref() => self.function_ref(),
            _ => self.expression(),
        }
    }

    fn is_function_ref(&self) -> bool {
        let mut offset = 1;
        while self.peek_at(offset).is_some_and(|c| c.is_ascii_digit()) {
            offset += 1;
        }
        offset > 1 && self.peek_at(offset) == Some('}')
    }

    fn trigger_macro(&mut self) -> ScanResult {
        self.open(Rule::Macro)?;
        self.pos += TRIGGER_VALUE.len() - 2;
        self.close()
    }

    fn function_ref(&mut self) -> ScanResult {
        self.open(Rule::MacroNum)?;
        self.skip_while(|c| c.is_ascii_digit());
        self.close()
    }

    fn user_macro(&mut self) -> ScanResult {
        let start = self.pos;
        self.open(Rule::CustomMacro)?;
        self.bump();
        let name_start = self.pos;
        self.skip_while(is_macro_char);
        if self.pos == name_start && self.peek() == Some('}') {
            return Err(SyntaxError::new(
                SyntaxErrorKind::EmptyElement,
                Span::new(start, self.pos + 1),
                Rule::CustomMacro,
            ));
        }
        self.close()
    }

    // -- {host:key[params].function(params)} --

    fn expression(&mut self) -> ScanResult {
        self.open(Rule::Expression)?;
        self.open(Rule::Server)?;
        self.skip_while(is_host_char);
        self.close()?;
        self.key()?;
        self.close()
    }

    fn key(&mut self) -> ScanResult {
        self.open(Rule::Key)?;
        self.key_name()?;
        if self.peek() == Some('[') {
            self.key_params()?;
        }
        self.function_name()?;
        self.function_params()?;
        self.close()
    }

    fn key_name(&mut self) -> ScanResult {
        self.open(Rule::KeyName)?;
        let start = self.pos;
        self.skip_while(is_key_char);
        match self.peek() {
            Some(',') if self.pos > start => self.check_port()?,
            Some('(') => {
                // Without [params] the function name is the last dotted segment.
                match (start..self.pos).rev().find(|&i| self.chars[i] == '.') {
                    Some(dot) => self.pos = dot,
                    None => return Err(self.error(SyntaxErrorKind::DisallowedSymbol)),
                }
            }
            _ => {}
        }
        self.close()
    }

    fn check_port(&mut self) -> ScanResult {
        self.open(Rule::CheckPort)?;
        if self.lookahead("{$") {
            self.user_macro()?;
        } else {
            self.skip_while(|c| c.is_ascii_digit());
        }
        self.close()
    }

    fn key_params(&mut self) -> ScanResult {
        self.open(Rule::KeyParams)?;
        self.param_list(Rule::KeyParam, ']')?;
        self.close()
    }

    fn function_name(&mut self) -> ScanResult {
        self.open(Rule::KeyFunctionName)?;
        self.skip_while(|c| c.is_ascii_alphabetic());
        self.close()
    }

    fn function_params(&mut self) -> ScanResult {
        self.open(Rule::KeyFunctionParams)?;
        self.param_list(Rule::KeyFunctionParam, ')')?;
        self.close()
    }

    fn param_list(&mut self, rule: Rule, terminator: char) -> ScanResult {
        if self.peek() == Some(terminator) {
            return Ok(());
        }
        loop {
            self.open(rule)?;
            self.skip_ws();
            match self.peek() {
                Some('"') => {
                    self.quoted_string()?;
                    self.skip_ws();
                }
                Some('[') if rule == Rule::KeyParam => {
                    self.key_params()?;
                    self.skip_ws();
                }
                _ => self.skip_while(|c| c != ',' && c != terminator),
            }
            match self.peek() {
                Some(',') => {
                    self.close()?;
                    self.bump();
                }
                Some(c) if c == terminator => return self.close(),
                None => return Err(self.error(SyntaxErrorKind::UnexpectedEnd)),
                Some(_) => return Err(self.error(SyntaxErrorKind::DisallowedAfter)),
            }
        }
    }

    fn quoted_string(&mut self) -> ScanResult {
        self.open(Rule::QuotedString)?;
        self.delimited(Rule::QuotedString)?;
        self.close()
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
