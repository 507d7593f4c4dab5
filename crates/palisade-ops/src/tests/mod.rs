// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


use palisade_buffer::StrBuf;

/// Shorthand for building fixtures.
pub(crate) fn buf(content: &str) -> StrBuf {
    StrBuf::from_bytes(content.as_bytes()).expect("Failed to from_bytes()")
}
