//! `trex edit` specs

use crate::prelude::*;

const TEXT: &str = "{a:k.last(0)}=0 & ({b:k.last(0)}=1 | {c:k.last(0)}=2)";

#[test]
fn remove_leaf_by_letter() {
    cli()
        .args(&["edit", TEXT, "--node", "B", "--remove"])
        .passes()
        .stdout_eq("{a:k.last(0)}=0 & {c:k.last(0)}=2\n");
}

#[test]
fn replace_leaf_by_id() {
    cli()
        .args(&["edit", TEXT, "--node", "0_15", "--replace", "{z:k.diff()}=1"])
        .passes()
        .stdout_eq("{z:k.diff()}=1 & ({b:k.last(0)}=1 | {c:k.last(0)}=2)\n");
}

#[test]
fn or_under_and_gains_parentheses() {
    cli()
        .args(&[
            "edit",
            "{a:k.last(0)}=0 & {b:k.last(0)}=1",
            "--node",
            "A",
            "--or",
            "{z:k.diff()}=1",
        ])
        .passes()
        .stdout_eq("({a:k.last(0)}=0 | {z:k.diff()}=1) & {b:k.last(0)}=1\n");
}
