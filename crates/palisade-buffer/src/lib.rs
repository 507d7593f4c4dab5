// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounds-checked string buffers with explicit capacity.
//!
//! This crate provides [`StrBuf`], a string buffer that carries its capacity
//! as part of its contract rather than growing behind the caller's back.
//!
//! # Design
//!
//! - Capacity is fixed at construction and changes only through an explicit
//!   [`StrBuf::resize`] call.
//! - Storage is always `capacity + 1` bytes; a NUL sentinel sits immediately
//!   after the content, even when the buffer is full.
//! - Formatted writes are atomic: the required length is measured first and
//!   the write happens only when the whole result fits. A write that would
//!   overflow fails without committing a single byte of it.
//! - Allocation is fallible; a failed resize leaves the buffer fully intact.
//!
//! # Example
//!
//! ```rust
//! use palisade_buffer::{BufferError, StrBuf};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buf = StrBuf::new(10)?;
//!
//!     buf.append(format_args!("foo"))?;
//!     assert_eq!(buf.len(), 3);
//!     assert_eq!(buf.as_bytes(), b"foo");
//!
//!     // Does not fit in the remaining 7 bytes: the buffer is untouched.
//!     assert!(buf.append(format_args!("bigbigbigbig")).is_err());
//!     assert_eq!(buf.as_bytes(), b"foo");
//!
//!     buf.resize(15)?;
//!     buf.append(format_args!("bigbigbigbig"))?;
//!     assert_eq!(buf.as_bytes(), b"foobigbigbigbig");
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

mod error;
mod fmt;
mod str_buf;

pub use error::BufferError;
pub use str_buf::{MAX_LEN, StrBuf};
