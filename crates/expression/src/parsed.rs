// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scanner output: region arena plus extracted function calls.

use crate::grammar::Rule;
use crate::span::Span;
use serde::Serialize;
use trex_core::FunctionId;

/// Index of a region in [`ParsedExpression::regions`]. The root is 0.
pub type RegionId = usize;

/// One recognized construct.
///
/// `span` includes the open and close symbols when the rule consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub rule: Rule,
    pub span: Span,
    pub open: Option<char>,
    pub close: Option<char>,
    pub parent: Option<RegionId>,
    pub children: Vec<RegionId>,
}

impl Region {
    /// The span between the delimiters.
    pub fn inner(&self) -> Span {
        let start = self.span.start + self.rule.open_len();
        let end = self.span.end.saturating_sub(self.rule.close_len()).max(start);
        Span::new(start, end)
    }
}

/// A `{host:key.function(params)}` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCall {
    /// The whole reference including braces.
    pub expression: String,
    pub span: Span,
    pub host: String,
    /// Item key including any `[params]`.
    pub item: String,
    /// `name(params)` as written.
    pub function: String,
    pub function_name: String,
    /// Raw text between the function's parentheses.
    pub function_param: String,
    /// Unquoted parameters.
    pub params: Vec<String>,
}

/// A successfully scanned expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedExpression {
    source: String,
    #[serde(skip)]
    chars: Vec<char>,
    regions: Vec<Region>,
    calls: Vec<FunctionCall>,
}

impl ParsedExpression {
    pub(crate) fn new(source: &str, chars: Vec<char>, regions: Vec<Region>) -> Self {
        let mut parsed = Self {
            source: source.to_string(),
            chars,
            regions,
            calls: Vec::new(),
        };
        parsed.calls = parsed
            .elements(Rule::Expression)
            .filter_map(|region| parsed.function_call(region))
            .collect();
        parsed
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Text covered by `span`.
    pub fn text(&self, span: Span) -> String {
        let end = span.end.min(self.chars.len());
        let start = span.start.min(end);
        self.chars[start..end].iter().collect()
    }

    pub fn root(&self) -> &Region {
        &self.regions[0]
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All regions of one rule, in source order.
    pub fn elements(&self, rule: Rule) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(move |r| r.rule == rule)
    }

    fn child(&self, region: &Region, rule: Rule) -> Option<&Region> {
        region
            .children
            .iter()
            .filter_map(|&id| self.regions.get(id))
            .find(|r| r.rule == rule)
    }

    fn function_call(&self, region: &Region) -> Option<FunctionCall> {
        let server = self.child(region, Rule::Server)?;
        let key = self.child(region, Rule::Key)?;
        let key_name = self.child(key, Rule::KeyName)?;
        let name = self.child(key, Rule::KeyFunctionName)?;
        let params = self.child(key, Rule::KeyFunctionParams)?;

        let item = Span::new(key_name.span.start, name.span.start);
        let function = Span::new(name.inner().start, params.span.end);
        let param_list = params
            .children
            .iter()
            .filter_map(|&id| self.regions.get(id))
            .map(|p| trex_core::unquote_param(&self.text(p.span)))
            .collect();

        Some(FunctionCall {
            expression: self.text(region.span),
            span: region.span,
            host: self.text(server.span).trim().to_string(),
            item: self.text(item),
            function: self.text(function),
            function_name: self.text(name.inner()),
            function_param: self.text(params.inner()),
            params: param_list,
        })
    }

    pub fn function_calls(&self) -> &[FunctionCall] {
        &self.calls
    }

    /// Text of every `{TRIGGER.VALUE}`-style macro.
    pub fn macros(&self) -> Vec<String> {
        self.elements(Rule::Macro).map(|r| self.text(r.span)).collect()
    }

    /// Text of every `{$MACRO}` user macro, including those in check ports.
    pub fn user_macros(&self) -> Vec<String> {
        self.elements(Rule::CustomMacro)
            .map(|r| self.text(r.span))
            .collect()
    }

    /// Ids of stored `{12}` function references.
    pub fn function_refs(&self) -> Vec<FunctionId> {
        self.elements(Rule::MacroNum)
            .filter_map(|r| self.text(r.inner()).parse().ok())
            .collect()
    }

    /// Regions standing for a value at operand level: function calls and
    /// macros directly inside the root or a grouping.
    pub fn operand_references(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(|r| {
            matches!(
                r.rule,
                Rule::Expression | Rule::Macro | Rule::MacroNum | Rule::CustomMacro
            ) && r
                .parent
                .and_then(|p| self.regions.get(p))
                .is_some_and(|p| matches!(p.rule, Rule::Independent | Rule::Grouping))
        })
    }
}
