// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grammar rule table.
//!
//! Each [`Rule`] names one delimited construct of the expression language.
//! [`Rule::grammar`] returns its static [`GrammarRule`]: how it opens and
//! closes, whether it may be empty or nest, and which rules may contain it.
//! The scanner consults this table whenever it opens or closes a region.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Independent,
    Grouping,
    Macro,
    MacroNum,
    CustomMacro,
    Expression,
    Server,
    Key,
    KeyName,
    CheckPort,
    KeyParams,
    KeyParam,
    KeyFunctionName,
    KeyFunctionParams,
    KeyFunctionParam,
    QuotedString,
}

/// How a region opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Open {
    /// The root; never opened explicitly.
    Root,
    /// Starts at the current position without consuming a symbol.
    Implicit,
    /// Consumes this symbol.
    Symbol(char),
    /// Consumes `{`; the rule is chosen by looking at what follows.
    Brace,
}

/// How a region closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Close {
    /// Runs to the end of input.
    EndOfInput,
    /// Consumes this symbol.
    Symbol(char),
    /// Ends in front of one of these symbols, which belong to the parent.
    Before(&'static [char]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarRule {
    pub open: Open,
    pub close: Close,
    /// Symbol that suppresses the close symbol when placed right before it.
    pub escape: Option<char>,
    /// May appear inside a region of the same rule.
    pub nesting: bool,
    /// May have no content between its delimiters.
    pub allow_empty: bool,
    pub parents: &'static [Rule],
}

const TOP: &[Rule] = &[Rule::Independent, Rule::Grouping];

const fn rule(
    open: Open,
    close: Close,
    nesting: bool,
    allow_empty: bool,
    parents: &'static [Rule],
) -> GrammarRule {
    GrammarRule {
        open,
        close,
        escape: None,
        nesting,
        allow_empty,
        parents,
    }
}

static INDEPENDENT: GrammarRule = rule(Open::Root, Close::EndOfInput, false, false, &[]);
static GROUPING: GrammarRule = rule(Open::Symbol('('), Close::Symbol(')'), true, false, TOP);
static MACRO: GrammarRule = rule(Open::Brace, Close::Symbol('}'), false, false, TOP);
static MACRO_NUM: GrammarRule = rule(Open::Brace, Close::Symbol('}'), false, false, TOP);
static CUSTOM_MACRO: GrammarRule = rule(
    Open::Brace,
    Close::Symbol('}'),
    false,
    false,
    &[Rule::Independent, Rule::Grouping, Rule::CheckPort],
);
static EXPRESSION: GrammarRule = rule(Open::Brace, Close::Symbol('}'), false, false, TOP);
static SERVER: GrammarRule = rule(
    Open::Implicit,
    Close::Before(&[':']),
    false,
    false,
    &[Rule::Expression],
);
static KEY: GrammarRule = rule(
    Open::Symbol(':'),
    Close::Before(&['}']),
    false,
    false,
    &[Rule::Expression],
);
static KEY_NAME: GrammarRule = rule(
    Open::Implicit,
    Close::Before(&['[', '.']),
    false,
    false,
    &[Rule::Key],
);
static CHECK_PORT: GrammarRule = rule(
    Open::Symbol(','),
    Close::Before(&['.']),
    false,
    false,
    &[Rule::KeyName],
);
static KEY_PARAMS: GrammarRule = rule(
    Open::Symbol('['),
    Close::Symbol(']'),
    true,
    true,
    &[Rule::Key, Rule::KeyParam],
);
static KEY_PARAM: GrammarRule = rule(
    Open::Implicit,
    Close::Before(&[',', ']']),
    false,
    true,
    &[Rule::KeyParams],
);
static KEY_FUNCTION_NAME: GrammarRule = rule(
    Open::Symbol('.'),
    Close::Before(&['(']),
    false,
    false,
    &[Rule::Key],
);
static KEY_FUNCTION_PARAMS: GrammarRule = rule(
    Open::Symbol('('),
    Close::Symbol(')'),
    false,
    true,
    &[Rule::Key],
);
static KEY_FUNCTION_PARAM: GrammarRule = rule(
    Open::Implicit,
    Close::Before(&[',', ')']),
    false,
    true,
    &[Rule::KeyFunctionParams],
);
static QUOTED_STRING: GrammarRule = GrammarRule {
    escape: Some('\\'),
    ..rule(
        Open::Symbol('"'),
        Close::Symbol('"'),
        false,
        true,
        &[Rule::KeyParam, Rule::KeyFunctionParam],
    )
};

impl Rule {
    pub const ALL: &'static [Rule] = &[
        Rule::Independent,
        Rule::Grouping,
        Rule::Macro,
        Rule::MacroNum,
        Rule::CustomMacro,
        Rule::Expression,
        Rule::Server,
        Rule::Key,
        Rule::KeyName,
        Rule::CheckPort,
        Rule::KeyParams,
        Rule::KeyParam,
        Rule::KeyFunctionName,
        Rule::KeyFunctionParams,
        Rule::KeyFunctionParam,
        Rule::QuotedString,
    ];

    pub fn grammar(self) -> &'static GrammarRule {
        match self {
            Rule::Independent => &INDEPENDENT,
            Rule::Grouping => &GROUPING,
            Rule::Macro => &MACRO,
            Rule::MacroNum => &MACRO_NUM,
            Rule::CustomMacro => &CUSTOM_MACRO,
            Rule::Expression => &EXPRESSION,
            Rule::Server => &SERVER,
            Rule::Key => &KEY,
            Rule::KeyName => &KEY_NAME,
            Rule::CheckPort => &CHECK_PORT,
            Rule::KeyParams => &KEY_PARAMS,
            Rule::KeyParam => &KEY_PARAM,
            Rule::KeyFunctionName => &KEY_FUNCTION_NAME,
            Rule::KeyFunctionParams => &KEY_FUNCTION_PARAMS,
            Rule::KeyFunctionParam => &KEY_FUNCTION_PARAM,
            Rule::QuotedString => &QUOTED_STRING,
        }
    }

    /// Whether a region of this rule may be opened directly inside `parent`.
    pub fn can_nest_in(self, parent: Rule) -> bool {
        if self == parent && !self.grammar().nesting {
            return false;
        }
        self.grammar().parents.contains(&parent)
    }

    /// Length of the symbol consumed when the region opens.
    pub fn open_len(self) -> usize {
        match self.grammar().open {
            Open::Symbol(_) | Open::Brace => 1,
            Open::Root | Open::Implicit => 0,
        }
    }

    /// Length of the symbol consumed when the region closes.
    pub fn close_len(self) -> usize {
        match self.grammar().close {
            Close::Symbol(_) => 1,
            Close::EndOfInput | Close::Before(_) => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Independent => "independent",
            Rule::Grouping => "grouping",
            Rule::Macro => "macro",
            Rule::MacroNum => "macroNum",
            Rule::CustomMacro => "customMacro",
            Rule::Expression => "expression",
            Rule::Server => "server",
            Rule::Key => "key",
            Rule::KeyName => "keyName",
            Rule::CheckPort => "checkPort",
            Rule::KeyParams => "keyParams",
            Rule::KeyParam => "keyParam",
            Rule::KeyFunctionName => "keyFunctionName",
            Rule::KeyFunctionParams => "keyFunctionParams",
            Rule::KeyFunctionParam => "keyFunctionParam",
            Rule::QuotedString => "quotedString",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
