// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `trex check` - Validate expressions

use super::Context;
use crate::exit_error::ExitError;
use crate::output::emit;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, BufRead};
use trex_adapters::{Catalog, MacroResolver, MapMacroResolver};
use trex_engine::{Engine, EngineError};
use trex_expression::{ExpressionCache, SemanticError, SyntaxError};
use trex_storage::MemoryCatalog;

#[derive(Args)]
pub struct CheckArgs {
    /// Expression to check (reads one per line from stdin when omitted)
    pub expression: Option<String>,

    /// Also resolve hosts and items against the catalog
    #[arg(long)]
    pub live: bool,
}

#[derive(Debug, Serialize)]
pub struct Problem {
    pub code: u8,
    pub message: String,
    pub start: usize,
    pub end: usize,
    #[serde(skip)]
    pub diagnostic: String,
}

impl Problem {
    fn syntax(error: &SyntaxError, text: &str) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            start: error.span.start,
            end: error.span.end,
            diagnostic: error.diagnostic(text),
        }
    }

    fn semantic(error: &SemanticError, text: &str) -> Self {
        Self {
            code: error.code(),
            message: error.kind.to_string(),
            start: error.span.start,
            end: error.span.end,
            diagnostic: error.diagnostic(text),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub expression: String,
    pub valid: bool,
    pub problems: Vec<Problem>,
}

pub fn check(args: CheckArgs, ctx: &Context) -> Result<()> {
    let expressions = match args.expression {
        Some(text) => vec![text],
        None => read_expressions(io::stdin().lock())?,
    };

    let catalog = if args.live {
        ctx.open_catalog()?.catalog
    } else {
        MemoryCatalog::new()
    };
    let engine = ctx.engine(&catalog, MapMacroResolver::new());

    let mut cache = ExpressionCache::with_config(ctx.config.clone());
    let reports = expressions
        .iter()
        .map(|text| check_one(&engine, &mut cache, text, args.live))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(
        expressions = reports.len(),
        cache_hits = cache.hits(),
        "check finished"
    );

    emit(ctx.format, &reports, || render(&reports))?;
    let failed = reports.iter().filter(|r| !r.valid).count();
    if failed > 0 {
        return Err(ExitError::silent(1).into());
    }
    Ok(())
}

/// Non-blank input lines, trimmed of trailing line endings only.
pub fn read_expressions(input: impl BufRead) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            out.push(line.to_string());
        }
    }
    Ok(out)
}

/// Check one expression. Rejections become problems in the report; any
/// other engine failure is returned.
pub fn check_one<C: Catalog, M: MacroResolver>(
    engine: &Engine<C, M>,
    cache: &mut ExpressionCache,
    text: &str,
    live: bool,
) -> Result<CheckReport, EngineError> {
    let problems = match engine.check_cached(cache, text, live) {
        Ok(_) => Vec::new(),
        Err(EngineError::Syntax(e)) => vec![Problem::syntax(&e, text)],
        Err(EngineError::Semantic(errors)) => {
            errors.iter().map(|e| Problem::semantic(e, text)).collect()
        }
        Err(other) => return Err(other),
    };
    Ok(CheckReport {
        expression: text.to_string(),
        valid: problems.is_empty(),
        problems,
    })
}

fn render(reports: &[CheckReport]) -> String {
    let mut out = String::new();
    for report in reports {
        if report.valid {
            out.push_str(&format!("ok: {}\n", report.expression));
            continue;
        }
        for problem in &report.problems {
            out.push_str(&format!("[{}] {}\n", problem.code, problem.diagnostic));
        }
    }
    out
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
