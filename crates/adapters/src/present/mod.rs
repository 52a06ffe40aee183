// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation of expanded expressions

mod plain;

pub use plain::PlainPresenter;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePresenter;

use serde::{Deserialize, Serialize};
use trex_core::ItemId;

/// Marker rendered in place of a reference that cannot be resolved.
pub const ERROR_MARKER: &str = "*ERROR*";

/// Display state of a referenced item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Enabled,
    Disabled,
    Unknown,
}

/// Where a reference fragment may link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Link {
    None,
    Item,
    Prototype,
}

/// One piece of a rich expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fragment {
    Text {
        text: String,
    },
    /// The `host:key` part of a resolved function reference.
    Reference {
        text: String,
        item_id: ItemId,
        style: Style,
        link: Link,
    },
    Error,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text { text: text.into() }
    }

    /// The fragment's text without any presentation.
    pub fn plain(&self) -> &str {
        match self {
            Fragment::Text { text } | Fragment::Reference { text, .. } => text,
            Fragment::Error => ERROR_MARKER,
        }
    }
}

/// Turns fragment lists into output text.
pub trait Presenter {
    fn present(&self, fragments: &[Fragment]) -> String;
}
