// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic checks over a parsed expression.
//!
//! [`validate_call`] checks one function call against its descriptor.
//! [`validate_expression`] runs it for every call and, when a resolver is
//! supplied, also checks that each referenced host and item exists.
//! Problems are collected rather than returned on the first hit.

use crate::error::{SemanticError, SemanticErrorKind};
use crate::parsed::{FunctionCall, ParsedExpression};
use crate::span::Span;
use regex::Regex;
use std::sync::LazyLock;
use trex_core::{ArgKind, FunctionTable, Params, ValueType};

#[allow(clippy::expect_used)]
static SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)?[smhdw]?$").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\d+$").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static USER_MACRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\$[A-Z0-9_.]+\}$").expect("constant regex pattern is valid")
});

/// Outcome of looking up the item behind a function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLookup {
    Found(ValueType),
    UnknownHost,
    UnknownItem,
}

/// Live existence checks against a host/item catalog.
pub trait ItemResolver {
    fn resolve_item(&self, host: &str, key: &str) -> ItemLookup;
}

fn is_seconds(value: &str) -> bool {
    SECONDS.is_match(value) || USER_MACRO.is_match(value)
}

fn is_seconds_or_count(value: &str) -> bool {
    is_seconds(value) || COUNT.is_match(value)
}

/// Check one function call.
///
/// `value_type` is the type of the target item when known; `None` skips the
/// value type check.
pub fn validate_call(
    table: &FunctionTable,
    name: &str,
    params: &[String],
    value_type: Option<ValueType>,
) -> Result<(), Vec<SemanticErrorKind>> {
    let Some(descriptor) = table.get(name) else {
        return Err(vec![SemanticErrorKind::UnknownFunction {
            name: name.to_string(),
        }]);
    };
    let name = descriptor.name.to_string();
    let mut errors = Vec::new();

    // Trailing empty parameters do not count as given.
    let given = params
        .iter()
        .rposition(|p| !p.trim().is_empty())
        .map_or(0, |i| i + 1);

    match descriptor.params {
        Params::Ignored => {
            if given > 1 {
                errors.push(SemanticErrorKind::ParametersNotAccepted { name: name.clone() });
            }
        }
        Params::Args(specs) => {
            if given > specs.len() {
                errors.push(SemanticErrorKind::TooManyArguments {
                    name: name.clone(),
                    max: specs.len(),
                    given,
                });
            }
            for (index, spec) in specs.iter().enumerate() {
                let value = params.get(index).map(|p| p.trim());
                let missing = match (spec.kind, value) {
                    (_, None) => true,
                    // A quoted empty string is a real pattern argument.
                    (ArgKind::Str, Some(_)) => false,
                    (_, Some(v)) => v.is_empty(),
                };
                if missing {
                    if spec.mandatory {
                        errors.push(SemanticErrorKind::MissingMandatoryArgument {
                            name: name.clone(),
                            index,
                        });
                    }
                    continue;
                }
                let value = value.unwrap_or_default();
                match spec.kind {
                    ArgKind::Str => {}
                    ArgKind::Sec if !is_seconds(value) => {
                        errors.push(SemanticErrorKind::InvalidSeconds {
                            name: name.clone(),
                            index,
                            value: value.to_string(),
                        });
                    }
                    ArgKind::SecNum if !is_seconds_or_count(value) => {
                        errors.push(SemanticErrorKind::InvalidSecondsOrCount {
                            name: name.clone(),
                            index,
                            value: value.to_string(),
                        });
                    }
                    ArgKind::Sec | ArgKind::SecNum => {}
                }
            }
        }
    }

    if let Some(value_type) = value_type {
        if !descriptor.accepts(value_type) {
            errors.push(SemanticErrorKind::ValueTypeMismatch {
                name,
                value_type,
                allowed: descriptor.value_types.to_vec(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn resolve(
    call: &FunctionCall,
    resolver: Option<&dyn ItemResolver>,
    errors: &mut Vec<SemanticError>,
) -> Option<ValueType> {
    match resolver?.resolve_item(&call.host, &call.item) {
        ItemLookup::Found(value_type) => Some(value_type),
        ItemLookup::UnknownHost => {
            let kind = SemanticErrorKind::HostNotFound {
                host: call.host.clone(),
            };
            errors.push(SemanticError::new(kind, call.span));
            None
        }
        ItemLookup::UnknownItem => {
            let kind = SemanticErrorKind::ItemNotFound {
                host: call.host.clone(),
                key: call.item.clone(),
            };
            errors.push(SemanticError::new(kind, call.span));
            None
        }
    }
}

/// Validate every function call of `parsed`.
pub fn validate_expression(
    parsed: &ParsedExpression,
    table: &FunctionTable,
    resolver: Option<&dyn ItemResolver>,
) -> Result<(), Vec<SemanticError>> {
    let mut errors = Vec::new();
    let calls = parsed.function_calls();

    if calls.is_empty() && parsed.function_refs().is_empty() {
        let whole = Span::new(0, parsed.source().chars().count());
        errors.push(SemanticError::new(SemanticErrorKind::NoItemReferenced, whole));
    }

    for call in calls {
        let value_type = resolve(call, resolver, &mut errors);
        if let Err(kinds) = validate_call(table, &call.function_name, &call.params, value_type) {
            errors.extend(kinds.into_iter().map(|k| SemanticError::new(k, call.span)));
        }
    }

    tracing::debug!(
        calls = calls.len(),
        errors = errors.len(),
        "expression validated"
    );
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
