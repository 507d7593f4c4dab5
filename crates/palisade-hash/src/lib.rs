// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed, versioned hashing over string buffers.
//!
//! A single entry point, [`hash`], computes a keyed pseudorandom digest of
//! a buffer's content. The [`HashVersion`] selector picks one of four
//! (engine, output-length) pairs: two over the 64-bit-word SipHash-2-4
//! construction (8- and 16-byte outputs) and two over its 32-bit half-word
//! variant (4- and 8-byte outputs). The key is a caller-supplied 16-byte
//! secret; the half-word engine consumes its first 8 bytes.
//!
//! Hashing is deterministic: identical (content, version, key) triples
//! always produce identical output.
//!
//! # Example
//!
//! ```rust
//! use palisade_buffer::{BufferError, StrBuf};
//! use palisade_hash::{HashVersion, hash};
//!
//! fn example() -> Result<(), BufferError> {
//!     let key: [u8; 16] = core::array::from_fn(|i| i as u8);
//!     let buf = StrBuf::from_bytes(b"Esto es un Test para hash")?;
//!
//!     let digest = hash(&buf, HashVersion::Sip128, &key);
//!     assert_eq!(digest.as_bytes().len(), 16);
//!
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod digest;
mod half_sip;
mod sip;

pub use digest::{Digest, HashVersion, hash};
