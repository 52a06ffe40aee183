//! `trex check` specs

use crate::prelude::*;

#[test]
fn valid_expression_passes() {
    cli()
        .args(&["check", "{web:system.cpu.load.avg(5m)}>2"])
        .passes()
        .stdout_eq("ok: {web:system.cpu.load.avg(5m)}>2\n");
}

#[test]
fn invalid_expression_shows_caret() {
    cli()
        .args(&["check", "{web:cpu.load.last(0)}>1 | {web:cpu.load.foo()}=1"])
        .fails()
        .code(1)
        .stdout_has("[6] error: unknown function 'foo'")
        .stdout_has("--> line 1, column 28");
}

#[test]
fn stdin_is_checked_line_by_line() {
    let run = cli()
        .args(&["check"])
        .stdin("{web:a.last(0)}>1\n\n1||1\n{web:a.diff()}=1\n")
        .fails();
    let stdout = run.stdout();
    assert!(stdout.starts_with("ok: {web:a.last(0)}>1\n"));
    assert!(stdout.contains("[4] error:"));
    assert!(stdout.ends_with("ok: {web:a.diff()}=1\n"));
}

#[test]
fn json_report_has_codes_and_spans() {
    let run = cli()
        .args(&["check", "-f", "json", "{web:a.last()}>1"])
        .fails();
    let report = run.json();
    assert_eq!(report[0]["valid"], false);
    assert_eq!(report[0]["problems"][0]["code"], 11);
    assert_eq!(report[0]["problems"][0]["start"], 0);
    assert_eq!(report[0]["problems"][0]["end"], 14);
}

#[test]
fn live_check_uses_catalog() {
    let ws = Workspace::with_catalog(WEB_AND_DB);
    ws.trex()
        .args(&["check", "--live", "{web:system.cpu.load.last(0)}>1"])
        .passes();
    ws.trex()
        .args(&["check", "--live", "{web:log[/var/log/syslog].avg(5m)}>1"])
        .fails()
        .stdout_has("[10]");
    ws.trex()
        .args(&["check", "--live", "{nowhere:system.cpu.load.last(0)}>1"])
        .fails()
        .stdout_has("[8] error: host 'nowhere' does not exist");
}
