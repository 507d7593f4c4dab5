// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! String operations over bounds-checked buffers.
//!
//! Extension traits for [`StrBuf`](palisade_buffer::StrBuf), grouped by
//! concern:
//!
//! - [`Slice`] — substring extraction and splicing (`left`, `right`, `mid`,
//!   `concat`, `insert`, `delete`).
//! - [`Search`] — literal scans and the operations built on them (`find`,
//!   `replace`, `delete_sub`, `strip_prefix`/`strip_suffix`, `split_once`,
//!   `split_all`).
//! - [`Text`] — ASCII case mapping and whitespace trimming.
//! - [`Validate`] — content classification and numeric parsing.
//!
//! Every value-producing operation allocates a fresh buffer sized exactly
//! to its result and leaves its inputs untouched. Positions are 0-based
//! byte offsets throughout; where an operation takes a range, both bounds
//! are inclusive.
//!
//! # Example
//!
//! ```rust
//! use palisade_buffer::StrBuf;
//! use palisade_ops::{OpsError, Search, Slice};
//!
//! fn example() -> Result<(), OpsError> {
//!     let buf: StrBuf = "es un test".parse().map_err(OpsError::from)?;
//!
//!     assert_eq!(buf.left(4)?, "es un");
//!     assert_eq!(buf.find(b"un", 0), Some(3));
//!     assert_eq!(buf.replace(b"un", b"otro", 0)?, "es otro test");
//!
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod classify;
mod error;
mod search;
mod slice;
mod support;
mod text;

pub use classify::Validate;
pub use error::OpsError;
pub use search::Search;
pub use slice::Slice;
pub use text::Text;
