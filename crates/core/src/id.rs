// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog identifiers

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Define a newtype ID wrapper around a numeric catalog id.
///
/// Generates `new()`, `get()`, `Display`, `FromStr`, `From<u64>` and
/// `PartialEq<u64>` implementations. Serializes as the bare number.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct MyId;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl PartialEq<u64> for $name {
            fn eq(&self, other: &u64) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id! {
    /// Id of one persisted function-reference row (`{12}` in stored text).
    pub struct FunctionId;
}

define_id! {
    /// Id of a monitored item.
    pub struct ItemId;
}

define_id! {
    /// Id of the trigger an expression belongs to.
    pub struct TriggerId;
}

/// Monotonic id allocator shared between clones.
#[derive(Clone, Debug)]
pub struct IdSequence {
    counter: Arc<AtomicU64>,
}

impl IdSequence {
    /// Start allocating at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(first)),
        }
    }

    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Make sure future ids are strictly greater than `seen`.
    pub fn observe(&self, seen: u64) {
        self.counter.fetch_max(seen.saturating_add(1), Ordering::SeqCst);
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
