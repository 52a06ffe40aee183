// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Trigger expression engine
//!
//! Expands stored expressions to display text, compiles display text back
//! to stored form, copies expressions between hosts and evaluates them
//! against sample values.

mod compile;
mod engine;
mod error;
mod expand;

pub use compile::CompiledExpression;
pub use engine::{CatalogItems, Engine};
pub use error::EngineError;
pub use expand::{ExpandOptions, HostSubstitution};
