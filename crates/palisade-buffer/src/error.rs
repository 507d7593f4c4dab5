// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-buffer.
use thiserror::Error;

/// Errors that can occur when working with string buffers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The content does not fit in the available space.
    #[error("content needs {needed} bytes but only {available} are available")]
    CapacityExceeded {
        /// Bytes the content would occupy.
        needed: usize,
        /// Bytes the buffer can still take.
        available: usize,
    },

    /// A requested capacity or source length exceeds the maximum
    /// representable length.
    #[error("requested length {requested} exceeds the maximum representable length")]
    CapacityOverflow {
        /// The out-of-range length.
        requested: usize,
    },

    /// Storage allocation failed.
    #[error("allocation failed")]
    Alloc,

    /// A `Display` implementation reported an error, or produced output
    /// that differs between the measuring and the writing pass.
    #[error("formatting failed")]
    Fmt,
}
