// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! trex - trigger expression tool

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{check, compile, convert, copy, edit, expand, test, tree, Context};
use output::OutputFormat;
use std::path::PathBuf;
use trex_expression::ScanConfig;

#[derive(Parser)]
#[command(
    name = "trex",
    version,
    about = "Trex - parse, validate and store trigger expressions"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t,
        global = true
    )]
    format: OutputFormat,

    /// Catalog snapshot (.json or .toml); defaults to TREX_CATALOG
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Maximum nesting depth; defaults to TREX_MAX_DEPTH, then 64
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Maximum expression length in characters (0 for no limit)
    #[arg(long, global = true)]
    max_length: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate expressions
    Check(check::CheckArgs),
    /// Show the and/or outline of an expression
    Tree(tree::TreeArgs),
    /// Remove, replace or extend one node of an expression
    Edit(edit::EditArgs),
    /// Expand a stored expression to display form
    Expand(expand::ExpandArgs),
    /// Compile an expression into stored form
    Compile(compile::CompileArgs),
    /// Copy a stored expression to another host
    Copy(copy::CopyArgs),
    /// Evaluate an expression with sample values
    Test(test::TestArgs),
    /// Convert suffixed numbers such as 5m or 1K
    Convert(convert::ConvertArgs),
}

impl Cli {
    fn context(&self) -> Context {
        let defaults = ScanConfig::default();
        Context {
            format: self.format,
            catalog: self.catalog.clone().or_else(env::catalog_path),
            config: ScanConfig {
                max_length: self.max_length.unwrap_or(defaults.max_length),
                max_depth: self
                    .max_depth
                    .or_else(env::max_depth)
                    .unwrap_or(defaults.max_depth),
            },
        }
    }
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = cli.context();

    let Some(command) = cli.command else {
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Check(args) => check::check(args, &ctx),
        Commands::Tree(args) => tree::tree(args, &ctx),
        Commands::Edit(args) => edit::edit(args, &ctx),
        Commands::Expand(args) => expand::expand(args, &ctx),
        Commands::Compile(args) => compile::compile(args, &ctx),
        Commands::Copy(args) => copy::copy(args, &ctx),
        Commands::Test(args) => test::test(args, &ctx),
        Commands::Convert(args) => convert::convert(args, &ctx),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
