// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use thiserror::Error;
use trex_adapters::CatalogError;
use trex_expression::{SemanticError, SyntaxError, TestError};

/// Errors from engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("{} semantic error(s), first: {}", .0.len(), first_message(.0))]
    Semantic(Vec<SemanticError>),
    #[error("stored expression cannot be expanded: {0}")]
    Unexpandable(String),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("test error: {0}")]
    Test(#[from] TestError),
}

impl From<Vec<SemanticError>> for EngineError {
    fn from(errors: Vec<SemanticError>) -> Self {
        EngineError::Semantic(errors)
    }
}

fn first_message(errors: &[SemanticError]) -> String {
    errors
        .first()
        .map(|e| e.to_string())
        .unwrap_or_default()
}

impl EngineError {
    /// Numeric error code for syntax and semantic errors.
    ///
    /// Semantic errors report the code of the first error.
    pub fn code(&self) -> Option<u8> {
        match self {
            EngineError::Syntax(e) => Some(e.code()),
            EngineError::Semantic(errors) => errors.first().map(SemanticError::code),
            _ => None,
        }
    }
}
