// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Dual-pass formatting adapters: measure first, write second.
//!
//! Atomic formatted writes run every format invocation twice. The first
//! pass goes through [`LenCounter`] to learn the exact output length; only
//! when that length fits does the second pass run through [`WindowWriter`]
//! into a window of the buffer's storage.

use core::fmt::{self, Write};

/// First pass: counts the bytes a format invocation would produce.
pub(crate) struct LenCounter {
    len: usize,
}

impl LenCounter {
    pub(crate) fn new() -> Self {
        Self { len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Write for LenCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

/// Second pass: renders into a pre-measured window of storage.
///
/// Never writes past the window. A `Display` implementation that produces
/// more bytes than it measured surfaces as a fmt error, not as an overflow.
pub(crate) struct WindowWriter<'a> {
    window: &'a mut [u8],
    written: usize,
}

impl<'a> WindowWriter<'a> {
    pub(crate) fn new(window: &'a mut [u8]) -> Self {
        Self { window, written: 0 }
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }
}

impl Write for WindowWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.written.checked_add(bytes.len()).ok_or(fmt::Error)?;

        if end > self.window.len() {
            return Err(fmt::Error);
        }

        self.window[self.written..end].copy_from_slice(bytes);
        self.written = end;

        Ok(())
    }
}
