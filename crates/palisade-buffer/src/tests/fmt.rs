// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the dual-pass formatting adapters.

use core::fmt::Write;

use crate::fmt::{LenCounter, WindowWriter};

// =============================================================================
// LenCounter
// =============================================================================

#[test]
fn test_len_counter_starts_at_zero() {
    let counter = LenCounter::new();
    assert_eq!(counter.len(), 0);
}

#[test]
fn test_len_counter_counts_formatted_bytes() {
    let mut counter = LenCounter::new();
    core::fmt::write(&mut counter, format_args!("{}-{}", "abc", 42))
        .expect("Failed to write()");

    assert_eq!(counter.len(), 6);
}

#[test]
fn test_len_counter_accumulates_across_writes() {
    let mut counter = LenCounter::new();
    counter.write_str("foo").expect("Failed to write_str()");
    counter.write_str("barbar").expect("Failed to write_str()");

    assert_eq!(counter.len(), 9);
}

// =============================================================================
// WindowWriter
// =============================================================================

#[test]
fn test_window_writer_fills_exact_window() {
    let mut storage = [0u8; 6];
    let mut writer = WindowWriter::new(&mut storage);
    write!(writer, "abcdef").expect("Failed to write!()");

    assert_eq!(writer.written(), 6);
    assert_eq!(&storage, b"abcdef");
}

#[test]
fn test_window_writer_rejects_overflow() {
    let mut storage = [0u8; 3];
    let mut writer = WindowWriter::new(&mut storage);

    assert!(write!(writer, "abcd").is_err());
}

#[test]
fn test_window_writer_keeps_committed_prefix_on_overflow() {
    let mut storage = [0u8; 4];
    let mut writer = WindowWriter::new(&mut storage);

    writer.write_str("abc").expect("Failed to write_str()");
    assert!(writer.write_str("de").is_err());
    assert_eq!(writer.written(), 3);
    assert_eq!(&storage[..3], b"abc");
}
