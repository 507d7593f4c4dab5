// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-ops.
use core::num::{ParseFloatError, ParseIntError};
use core::str::Utf8Error;

use palisade_buffer::BufferError;
use thiserror::Error;

/// Errors that can occur during string operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// A position argument points outside the buffer content.
    #[error("position {pos} is out of range for length {len}")]
    PosOutOfRange {
        /// The offending position.
        pos: u32,
        /// The buffer length it was checked against.
        len: u32,
    },

    /// An inclusive range has its bounds reversed.
    #[error("range start {from} is past range end {to}")]
    EmptyRange {
        /// Start of the range.
        from: u32,
        /// End of the range.
        to: u32,
    },

    /// The searched pattern does not occur in the buffer.
    #[error("pattern not found")]
    NotFound,

    /// An empty pattern or delimiter was supplied.
    #[error("empty pattern")]
    EmptyPattern,

    /// The radix is outside the supported 2..=36 range.
    #[error("radix {radix} is not in 2..=36")]
    InvalidRadix {
        /// The offending radix.
        radix: u32,
    },

    /// Content is not valid UTF-8 where text was required.
    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    /// Content does not parse as an integer.
    #[error("not a valid integer: {0}")]
    ParseInt(#[from] ParseIntError),

    /// Content does not parse as a float.
    #[error("not a valid float: {0}")]
    ParseFloat(#[from] ParseFloatError),

    /// The result buffer could not be created.
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
