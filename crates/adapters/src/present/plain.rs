// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Fragment, Presenter};

/// Concatenates fragment text.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainPresenter;

impl Presenter for PlainPresenter {
    fn present(&self, fragments: &[Fragment]) -> String {
        fragments.iter().map(Fragment::plain).collect()
    }
}

#[cfg(test)]
#[path = "plain_tests.rs"]
mod tests;
