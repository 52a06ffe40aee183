//! `trex test` specs

use crate::prelude::*;

#[test]
fn reports_whole_and_leaf_results() {
    cli()
        .args(&[
            "test",
            "{web:a.last(0)}>1 | {web:b.last(0)}=0",
            "--value",
            "{web:a.last(0)}=5",
            "--value",
            "{web:b.last(0)}=1",
        ])
        .passes()
        .stdout_eq("TRUE 5>1 | 1=0\n  A  TRUE  {web:a.last(0)}>1\n  B  FALSE  {web:b.last(0)}=0\n");
}

#[test]
fn suffixed_values_are_converted() {
    let run = cli()
        .args(&[
            "test",
            "-f",
            "json",
            "{web:disk.last(0)}<1G",
            "--value",
            "{web:disk.last(0)}=2G",
        ])
        .passes();
    let report = run.json();
    assert_eq!(report["result"], false);
    assert_eq!(report["substituted"], "2147483648<1G");
}

#[test]
fn missing_values_are_listed() {
    cli()
        .args(&["test", "{web:a.last(0)}>{$LIMIT}"])
        .fails()
        .code(2)
        .stderr_has("missing sample values for:")
        .stderr_has("--value '{web:a.last(0)}=<value>'")
        .stderr_has("--value '{$LIMIT}=<value>'");
}
