// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Bounds-checked string buffers for people who have
//! been bitten before.</em></p>
//!
//! ---
//!
//! Palisade is a Rust library for working with strings through explicit,
//! caller-controlled capacities. Every buffer knows exactly how much it may
//! hold, every write is measured before a byte moves, and nothing ever grows
//! behind the caller's back.
//!
//! # Features
//!
//! - **Explicit capacity** — storage is sized once and changes only through
//!   an explicit resize
//! - **Atomic writes** — formatted appends measure first and commit all or
//!   nothing; an overflowing write leaves the buffer untouched
//! - **Functional operations** — substring, search, replace, case and trim
//!   operations return fresh buffers and never mutate their inputs
//! - **Keyed hashing** — versioned SipHash-2-4 and HalfSipHash-2-4 digests
//!   under a caller-supplied 16-byte key
//! - **`no_std` compatible** — everything works with `alloc` alone
//!
//! # Quick Start
//!
//! ```rust
//! use palisade::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut buf = StrBuf::new(32)?;
//!     buf.append(format_args!("es un test"))?;
//!
//!     let shout = buf.to_upper()?;
//!     assert_eq!(shout, "ES UN TEST");
//!
//!     let (first, rest) = buf.split_once(b" ")?;
//!     assert_eq!(first, "es");
//!     assert_eq!(rest, "un test");
//!
//!     let key = [0u8; 16];
//!     let digest = hash(&buf, HashVersion::Sip64, &key);
//!     assert_eq!(digest.len(), 8);
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use palisade_buffer::{BufferError, MAX_LEN, StrBuf};
pub use palisade_hash::{Digest, HashVersion, hash};
pub use palisade_ops::{OpsError, Search, Slice, Text, Validate};

/// Commonly used imports.
pub mod prelude {
    pub use palisade_buffer::StrBuf;
    pub use palisade_hash::{Digest, HashVersion, hash};
    pub use palisade_ops::{Search, Slice, Text, Validate};
}
