// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger function descriptors.
//!
//! The table is built once and never mutated. Callers receive it as
//! `&FunctionTable` and pass it on explicitly.

use crate::value_type::ValueType;
use indexmap::IndexMap;
use std::sync::LazyLock;

/// How a single argument is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Free text, not checked.
    Str,
    /// A duration: number with an optional `s/m/h/d/w` suffix.
    Sec,
    /// A duration, or a sample count written `#N`.
    SecNum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub kind: ArgKind,
    pub mandatory: bool,
}

impl ArgSpec {
    const fn required(kind: ArgKind) -> Self {
        Self {
            kind,
            mandatory: true,
        }
    }

    const fn optional(kind: ArgKind) -> Self {
        Self {
            kind,
            mandatory: false,
        }
    }
}

/// Parameter shape of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Params {
    /// A single legacy argument is tolerated and ignored.
    Ignored,
    /// Positional arguments, checked in order.
    Args(&'static [ArgSpec]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub params: Params,
    /// Item value types the function may be applied to.
    pub value_types: &'static [ValueType],
}

impl FunctionDescriptor {
    pub fn accepts(&self, value_type: ValueType) -> bool {
        self.value_types.contains(&value_type)
    }

    /// Number of positional arguments the function declares.
    pub fn arity(&self) -> usize {
        match self.params {
            Params::Ignored => 1,
            Params::Args(args) => args.len(),
        }
    }
}

const SEC_NUM_PERIOD: &[ArgSpec] = &[
    ArgSpec::required(ArgKind::SecNum),
    ArgSpec::optional(ArgKind::Sec),
];
const COUNT: &[ArgSpec] = &[
    ArgSpec::required(ArgKind::SecNum),
    ArgSpec::optional(ArgKind::Str),
    ArgSpec::optional(ArgKind::Str),
    ArgSpec::optional(ArgKind::Sec),
];
const SEC: &[ArgSpec] = &[ArgSpec::required(ArgKind::Sec)];
const PATTERN: &[ArgSpec] = &[
    ArgSpec::required(ArgKind::Str),
    ArgSpec::optional(ArgKind::SecNum),
];
const STR: &[ArgSpec] = &[ArgSpec::required(ArgKind::Str)];

/// (names sharing one schema, params, value types)
const SCHEMAS: &[(&[&str], Params, &[ValueType])] = &[
    (
        &[
            "abschange",
            "change",
            "date",
            "dayofmonth",
            "dayofweek",
            "diff",
            "now",
            "prev",
            "time",
        ],
        Params::Ignored,
        ValueType::ALL,
    ),
    (
        &["avg", "delta", "max", "min", "sum"],
        Params::Args(SEC_NUM_PERIOD),
        ValueType::NUMERIC,
    ),
    (&["count"], Params::Args(COUNT), ValueType::ALL),
    (&["fuzzytime"], Params::Args(SEC), ValueType::NUMERIC),
    (
        &["iregexp", "regexp", "str"],
        Params::Args(PATTERN),
        ValueType::CHARACTER,
    ),
    (&["last"], Params::Args(SEC_NUM_PERIOD), ValueType::ALL),
    (&["logeventid"], Params::Args(STR), ValueType::LOG),
    (&["logseverity"], Params::Ignored, ValueType::LOG),
    (&["logsource"], Params::Args(STR), ValueType::LOG),
    (&["nodata"], Params::Args(SEC), ValueType::ALL),
    (&["strlen"], Params::Args(SEC_NUM_PERIOD), ValueType::CHARACTER),
];

static STANDARD: LazyLock<FunctionTable> = LazyLock::new(FunctionTable::build);

/// Immutable map from lower-case function name to its descriptor.
#[derive(Debug, Clone)]
pub struct FunctionTable {
    functions: IndexMap<&'static str, FunctionDescriptor>,
}

impl FunctionTable {
    /// The table of supported trigger functions, built on first use.
    pub fn standard() -> &'static FunctionTable {
        &STANDARD
    }

    fn build() -> Self {
        let mut functions = IndexMap::new();
        for (names, params, value_types) in SCHEMAS {
            for &name in names.iter() {
                functions.insert(
                    name,
                    FunctionDescriptor {
                        name,
                        params: *params,
                        value_types: *value_types,
                    },
                );
            }
        }
        functions.sort_keys();
        Self { functions }
    }

    /// Look up a function; the name is matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.functions.get(name.to_ascii_lowercase().as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Function names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
#[path = "function_tests.rs"]
mod tests;
