// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake presenter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Fragment, Presenter};
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every fragment list and renders plain text.
#[derive(Clone, Default)]
pub struct FakePresenter {
    calls: Arc<Mutex<Vec<Vec<Fragment>>>>,
}

impl FakePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all presented fragment lists
    pub fn calls(&self) -> Vec<Vec<Fragment>> {
        self.calls.lock().clone()
    }
}

impl Presenter for FakePresenter {
    fn present(&self, fragments: &[Fragment]) -> String {
        self.calls.lock().push(fragments.to_vec());
        fragments.iter().map(Fragment::plain).collect()
    }
}
