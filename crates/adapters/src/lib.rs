// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the catalog, macro resolution and presentation

pub mod catalog;
pub mod macros;
pub mod present;
pub mod traced;

pub use catalog::{
    Catalog, CatalogError, FunctionRow, ItemKind, ItemOrigin, ItemRecord, ItemStatus,
};
pub use macros::{ItemFields, MacroResolver, MapMacroResolver, NoOpMacroResolver};
pub use present::{Fragment, Link, PlainPresenter, Presenter, Style, ERROR_MARKER};
pub use traced::{TracedCatalog, TracedMacroResolver};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use catalog::{CatalogCall, FakeCatalog};
#[cfg(any(test, feature = "test-support"))]
pub use present::FakePresenter;
