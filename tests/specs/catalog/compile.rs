//! `trex compile` specs

use crate::prelude::*;

#[test]
fn compile_replaces_calls_with_function_ids() {
    let ws = Workspace::with_catalog(WEB_AND_DB);
    ws.trex()
        .args(&[
            "compile",
            "--trigger",
            "7",
            "{web:system.cpu.load.avg(5m)}>2 | {web:system.cpu.load.avg(5m)}<1 & {db:system.cpu.load.last(0)}>0",
        ])
        .passes()
        .stdout_eq("{1}>2 | {1}<1 & {2}>0\n");

    let saved = ws.catalog_text();
    assert!(saved.contains("function = \"avg\""));
    assert!(saved.contains("parameter = \"5m\""));
    assert!(saved.contains("trigger_id = 7"));
}

#[test]
fn compile_then_expand_round_trips() {
    let ws = Workspace::with_catalog(WEB_AND_DB);
    let text = "{web:system.cpu.load.avg(5m)}>2 & {web:agent.version.str(\"a b\")}=1";
    let run = ws
        .trex()
        .args(&["compile", "--trigger", "1", "-f", "json", text])
        .passes();
    let compiled = run.json();
    assert_eq!(compiled["functions"], serde_json::json!([1, 2]));
    let stored = compiled["expression"].as_str().unwrap().to_string();

    ws.trex()
        .args(&["expand", &stored])
        .passes()
        .stdout_eq(&format!("{text}\n"));
}

#[test]
fn ids_continue_after_saved_functions() {
    let ws = Workspace::with_catalog(WEB_AND_DB);
    ws.trex()
        .args(&["compile", "--trigger", "1", "{web:system.cpu.load.last(0)}>1"])
        .passes()
        .stdout_eq("{1}>1\n");
    ws.trex()
        .args(&["compile", "--trigger", "2", "{db:system.cpu.load.last(0)}>1"])
        .passes()
        .stdout_eq("{2}>1\n");
}

#[test]
fn failed_compile_leaves_catalog_untouched() {
    let ws = Workspace::with_catalog(WEB_AND_DB);
    let before = ws.catalog_text();
    ws.trex()
        .args(&[
            "compile",
            "--trigger",
            "1",
            "{web:system.cpu.load.last(0)}>1 | {nowhere:x.last(0)}=1 | {web:log[/var/log/syslog].avg(5m)}>0",
        ])
        .fails()
        .code(1)
        .stderr_has("[8] error: host 'nowhere' does not exist")
        .stderr_has("[10] error: function 'avg' cannot be applied to log items");
    assert_eq!(ws.catalog_text(), before);
}

#[test]
fn json_catalog_is_supported() {
    let ws = Workspace::empty();
    let catalog = ws.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{"hosts":[{"name":"web","items":[{"item_id":4,"key":"net.if.in[eth0]","value_type":"uint64"}]}]}"#,
    )
    .unwrap();
    cli()
        .args(&["--catalog"])
        .args(&[catalog.to_str().unwrap()])
        .args(&["compile", "--trigger", "3", "{web:net.if.in[eth0].diff()}=1"])
        .passes()
        .stdout_eq("{1}=1\n");
    let saved = std::fs::read_to_string(&catalog).unwrap();
    assert!(saved.contains("\"function\": \"diff\""));
}
