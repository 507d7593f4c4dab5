// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ASCII case mapping and whitespace trimming.

use alloc::vec::Vec;

use palisade_buffer::StrBuf;

use crate::error::OpsError;

/// The isspace(3) set: space, tab, newline, vertical tab, form feed,
/// carriage return.
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Case mapping and trimming.
///
/// Byte-oriented: only the ASCII letter ranges are mapped and only ASCII
/// whitespace is trimmed; everything else passes through untouched.
pub trait Text: Sized {
    /// ASCII lowercase letters mapped to uppercase.
    fn to_upper(&self) -> Result<Self, OpsError>;

    /// ASCII uppercase letters mapped to lowercase.
    fn to_lower(&self) -> Result<Self, OpsError>;

    /// Leading ASCII whitespace removed.
    fn trim_start(&self) -> Result<Self, OpsError>;

    /// Trailing ASCII whitespace removed.
    fn trim_end(&self) -> Result<Self, OpsError>;

    /// Leading and trailing ASCII whitespace removed; an all-whitespace
    /// buffer yields a zero-length one.
    fn trim(&self) -> Result<Self, OpsError>;
}

impl Text for StrBuf {
    fn to_upper(&self) -> Result<Self, OpsError> {
        let mapped: Vec<u8> = self
            .as_bytes()
            .iter()
            .map(u8::to_ascii_uppercase)
            .collect();

        Ok(StrBuf::from_bytes(&mapped)?)
    }

    fn to_lower(&self) -> Result<Self, OpsError> {
        let mapped: Vec<u8> = self
            .as_bytes()
            .iter()
            .map(u8::to_ascii_lowercase)
            .collect();

        Ok(StrBuf::from_bytes(&mapped)?)
    }

    fn trim_start(&self) -> Result<Self, OpsError> {
        let bytes = self.as_bytes();
        let start = bytes
            .iter()
            .position(|&byte| !is_space(byte))
            .unwrap_or(bytes.len());

        Ok(StrBuf::from_bytes(&bytes[start..])?)
    }

    fn trim_end(&self) -> Result<Self, OpsError> {
        let bytes = self.as_bytes();
        let end = bytes
            .iter()
            .rposition(|&byte| !is_space(byte))
            .map_or(0, |last| last + 1);

        Ok(StrBuf::from_bytes(&bytes[..end])?)
    }

    fn trim(&self) -> Result<Self, OpsError> {
        let bytes = self.as_bytes();
        let start = bytes
            .iter()
            .position(|&byte| !is_space(byte))
            .unwrap_or(bytes.len());
        let end = bytes
            .iter()
            .rposition(|&byte| !is_space(byte))
            .map_or(start, |last| last + 1);

        Ok(StrBuf::from_bytes(&bytes[start..end])?)
    }
}
