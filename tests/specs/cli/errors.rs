//! CLI error handling specs
//!
//! Verify error messages and exit codes for invalid input.

use crate::prelude::*;

#[test]
fn catalog_commands_need_a_catalog() {
    cli()
        .args(&["expand", "{1}>0"])
        .fails()
        .code(1)
        .stderr_has("no catalog given");
}

#[test]
fn corrupt_catalog_is_reported() {
    let ws = Workspace::with_catalog("[[hosts]\n");
    ws.trex()
        .args(&["expand", "{1}>0"])
        .fails()
        .stderr_has("failed to load catalog");
}

#[test]
fn syntax_error_names_position() {
    cli()
        .args(&["tree", "1||1"])
        .fails()
        .code(1)
        .stderr_has("disallowed symbol before element at position 2");
}

#[test]
fn depth_limit_applies_to_every_command() {
    cli()
        .args(&["--max-depth", "2", "tree", "(((1)))=1"])
        .fails()
        .stderr_has("nested too deeply");
}

#[test]
fn depth_limit_from_environment() {
    cli()
        .env("TREX_MAX_DEPTH", "2")
        .args(&["check", "(((1)))=1"])
        .fails()
        .stdout_has("[18]");
}

#[test]
fn unknown_node_is_reported() {
    cli()
        .args(&["edit", "{a:k.last(0)}=0", "--node", "Q", "--remove"])
        .fails()
        .stderr_has("no node 'Q'");
}
