// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Item value types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    #[error("unknown value type code {0}")]
    UnknownCode(u8),
    #[error("unknown value type '{0}'")]
    UnknownName(String),
}

/// The type of data an item collects.
///
/// Discriminants are the catalog's numeric value-type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Float = 0,
    Str = 1,
    Log = 2,
    Uint64 = 3,
    Text = 4,
}

impl ValueType {
    pub const ALL: &'static [ValueType] = &[
        ValueType::Float,
        ValueType::Uint64,
        ValueType::Str,
        ValueType::Text,
        ValueType::Log,
    ];
    pub const NUMERIC: &'static [ValueType] = &[ValueType::Float, ValueType::Uint64];
    pub const CHARACTER: &'static [ValueType] = &[ValueType::Str, ValueType::Text, ValueType::Log];
    pub const LOG: &'static [ValueType] = &[ValueType::Log];

    pub fn from_code(code: u8) -> Result<Self, ValueTypeError> {
        match code {
            0 => Ok(ValueType::Float),
            1 => Ok(ValueType::Str),
            2 => Ok(ValueType::Log),
            3 => Ok(ValueType::Uint64),
            4 => Ok(ValueType::Text),
            other => Err(ValueTypeError::UnknownCode(other)),
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::Log => "log",
            ValueType::Uint64 => "uint64",
            ValueType::Text => "text",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ValueType::Float | ValueType::Uint64)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ValueType {
    type Err = ValueTypeError;

    /// Accepts either the name or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        ValueType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueTypeError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
#[path = "value_type_tests.rs"]
mod tests;
