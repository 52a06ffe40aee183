// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;
use trex_adapters::Catalog;
use trex_core::{TriggerId, ValueType};
use trex_engine::EngineError;
use yare::parameterized;

fn context(catalog: Option<PathBuf>) -> Context {
    Context {
        format: OutputFormat::Text,
        catalog,
        config: ScanConfig::default(),
    }
}

#[parameterized(
    simple = { "IF=eth0", "IF", "eth0" },
    empty_value = { "IF=", "IF", "" },
    value_with_equals = { "{host:key.last(0)}=a=b", "{host:key.last(0)}", "a=b" },
)]
fn key_value_splits_at_first_equals(input: &str, key: &str, value: &str) {
    assert_eq!(
        parse_key_value(input),
        Ok((key.to_string(), value.to_string()))
    );
}

#[test]
fn key_value_requires_equals() {
    assert!(parse_key_value("IF").is_err());
}

#[test]
fn open_catalog_requires_path() {
    let err = context(None).open_catalog().err().unwrap();
    assert!(err.to_string().contains("TREX_CATALOG"));
}

#[test]
fn open_missing_catalog_is_empty_and_saves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let open = context(Some(path.clone())).open_catalog().unwrap();
    open.catalog.add_item("web", "cpu.load", ValueType::Float);
    open.save().unwrap();

    let reopened = context(Some(path)).open_catalog().unwrap();
    assert!(reopened.catalog.host_exists("web"));
}

#[test]
fn corrupt_catalog_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "[").unwrap();
    let err = context(Some(path)).open_catalog().err().unwrap();
    assert!(err.to_string().contains("failed to load catalog"));
}

#[test]
fn diagnostics_cover_every_semantic_error() {
    let catalog = MemoryCatalog::new();
    catalog.add_item("web", "a", ValueType::Float);
    catalog.add_item("web", "b", ValueType::Float);
    let engine = context(None).engine(&catalog, MapMacroResolver::new());
    let text = "{web:a.foo()}>1 | {web:b.bar()}>1";
    let err = engine.compile(text, TriggerId::new(1)).unwrap_err();
    let lines = diagnostics(&err, text);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[6] error: unknown function 'foo'"));
    assert!(lines[1].contains("column 19"));
}

#[test]
fn diagnostics_skip_catalog_errors() {
    let err = EngineError::Unexpandable("{9}>0".into());
    assert!(diagnostics(&err, "{9}>0").is_empty());
}
