//! `trex tree` specs

use crate::prelude::*;

#[test]
fn outline_and_branches() {
    cli()
        .args(&[
            "tree",
            "{a:k.last(0)}=0 & ({b:k.last(0)}=1 | {c:k.last(0)}=2) & {d:k.last(0)}=3",
        ])
        .passes()
        .stdout_eq(
            "\
A & (B | C) & D
&
├─ A  {a:k.last(0)}=0
├─ |
│  ├─ B  {b:k.last(0)}=1
│  └─ C  {c:k.last(0)}=2
└─ D  {d:k.last(0)}=3
",
        );
}

#[test]
fn json_entries_carry_node_ids() {
    let run = cli()
        .args(&["tree", "-f", "json", "{a:k.last(0)}=0 | {b:k.last(0)}=1"])
        .passes();
    let tree = run.json();
    assert_eq!(tree["outline"], "A | B");
    let ids: Vec<&str> = tree["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["0_33", "0_15", "18_33"]);
}
