// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! trex-core: shared vocabulary for trigger expressions
//!
//! Item value types, the trigger function table, numeric suffix conversion,
//! parameter unquoting and the numeric id newtypes used by the catalog.

pub mod convert;
pub mod function;
pub mod id;
pub mod params;
pub mod value_type;

pub use convert::{convert, format_number, parse_number, suffix_multiplier};
pub use function::{ArgKind, ArgSpec, FunctionDescriptor, FunctionTable, Params};
pub use id::{FunctionId, IdSequence, ItemId, TriggerId};
pub use params::unquote_param;
pub use value_type::{ValueType, ValueTypeError};
