//! `trex expand` specs

use crate::prelude::*;

fn catalog_with_functions() -> Workspace {
    let mut text = WEB_AND_DB.to_string();
    text.push_str(
        r#"
[[functions]]
function_id = 1
trigger_id = 1
item_id = 1
function = "avg"
parameter = "{$PERIOD}"

[[functions]]
function_id = 2
trigger_id = 1
item_id = 3
function = "str"
parameter = "x"
"#,
    );
    Workspace::with_catalog(&text)
}

#[test]
fn stored_references_expand() {
    let ws = catalog_with_functions();
    ws.trex()
        .args(&["expand", "{1}>2 | {2}=1 & {TRIGGER.VALUE}=0"])
        .passes()
        .stdout_eq(
            "{web:system.cpu.load.avg({$PERIOD})}>2 | {web:agent.version.str(x)}=1 & {TRIGGER.VALUE}=0\n",
        );
}

#[test]
fn macros_resolve_on_request() {
    let ws = catalog_with_functions();
    ws.trex()
        .args(&[
            "expand",
            "{1}>{$LIMIT}",
            "--resolve-macros",
            "--macro",
            "PERIOD=5m",
            "--macro",
            "{$LIMIT}=3",
        ])
        .passes()
        .stdout_eq("{web:system.cpu.load.avg(5m)}>3\n");
}

#[test]
fn host_substitution() {
    let ws = catalog_with_functions();
    ws.trex()
        .args(&["expand", "{1}>2", "--from", "web", "--to", "db"])
        .passes()
        .stdout_eq("{db:system.cpu.load.avg({$PERIOD})}>2\n");
}

#[test]
fn dangling_reference_renders_error_marker() {
    let ws = catalog_with_functions();
    ws.trex()
        .args(&["expand", "{1}>2 | {99}=1"])
        .fails()
        .code(1)
        .stdout_eq("{web:system.cpu.load.avg({$PERIOD})}>2 | *ERROR*=1\n");
}

#[test]
fn json_fragments_carry_item_state() {
    let ws = catalog_with_functions();
    let run = ws
        .trex()
        .args(&["expand", "-f", "json", "{1}>2 | {2}=1"])
        .passes();
    let out = run.json();
    assert_eq!(out["references"], serde_json::json!([1, 2]));
    let styles: Vec<&str> = out["fragments"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["type"] == "reference")
        .map(|f| f["style"].as_str().unwrap())
        .collect();
    assert_eq!(styles, vec!["enabled", "disabled"]);
}
