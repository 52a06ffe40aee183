//! `trex copy` specs

use crate::prelude::*;

#[test]
fn copy_moves_references_to_target_host() {
    let ws = Workspace::with_catalog(WEB_AND_DB);
    ws.trex()
        .args(&["compile", "--trigger", "1", "{web:system.cpu.load.last(0)}>1"])
        .passes()
        .stdout_eq("{1}>1\n");

    ws.trex()
        .args(&["copy", "{1}>1", "--from", "web", "--to", "db", "--trigger", "2"])
        .passes()
        .stdout_eq("{2}>1\n");

    ws.trex()
        .args(&["expand", "{2}>1"])
        .passes()
        .stdout_eq("{db:system.cpu.load.last(0)}>1\n");
}

#[test]
fn copy_fails_when_target_lacks_item() {
    let ws = Workspace::with_catalog(WEB_AND_DB);
    ws.trex()
        .args(&["compile", "--trigger", "1", "{web:log[/var/log/syslog].str(x)}=1"])
        .passes();
    ws.trex()
        .args(&["copy", "{1}=1", "--from", "web", "--to", "db", "--trigger", "2"])
        .fails()
        .stderr_has("[9] error: item 'log[/var/log/syslog]' does not exist on host 'db'");
}

#[test]
fn copy_of_dangling_reference_fails() {
    let ws = Workspace::with_catalog(WEB_AND_DB);
    ws.trex()
        .args(&["copy", "{42}=1", "--from", "web", "--to", "db", "--trigger", "2"])
        .fails()
        .stderr_has("cannot be expanded");
}
