//! `trex convert` specs

use crate::prelude::*;

#[test]
fn suffixes_expand() {
    cli()
        .args(&["convert", "5m", "1K", "2.5h", "abc"])
        .passes()
        .stdout_eq("300\n1024\n9000\nabc\n");
}

#[test]
fn json_pairs_input_and_output() {
    let run = cli().args(&["-f", "json", "convert", "1w"]).passes();
    let out = run.json();
    assert_eq!(out[0]["input"], "1w");
    assert_eq!(out[0]["output"], "604800");
}
