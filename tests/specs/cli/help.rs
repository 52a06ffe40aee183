//! CLI help specs

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli()
        .passes()
        .stdout_has("Usage: trex")
        .stdout_has("compile");
}

#[test]
fn help_lists_every_subcommand() {
    let run = cli().args(&["--help"]).passes();
    for name in [
        "check", "tree", "edit", "expand", "compile", "copy", "test", "convert",
    ] {
        assert!(run.stdout().contains(name), "help is missing {name}");
    }
}

#[test]
fn version_flag() {
    cli().args(&["--version"]).passes().stdout_has("trex ");
}
