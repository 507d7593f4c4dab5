// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Literal substring scans and the operations built on them.

use alloc::vec::Vec;

use palisade_buffer::StrBuf;

use crate::error::OpsError;
use crate::support::alloc_exact;

/// Search operations and their derived edits.
///
/// Scans are plain literal byte comparisons; there is no pattern language.
/// `find`/`find_byte` report absence through `None`, the buffer-producing
/// operations through [`OpsError::NotFound`].
pub trait Search: Sized {
    /// Position of the first occurrence of `pattern` at or after `from`.
    ///
    /// `None` when the pattern is absent, empty, or `from` is past the end.
    fn find(&self, pattern: &[u8], from: u32) -> Option<u32>;

    /// Position of the first occurrence of `byte` at or after `from`.
    fn find_byte(&self, byte: u8, from: u32) -> Option<u32>;

    /// The receiver with the first occurrence of `search` at or after
    /// `from` replaced by `replacement`.
    fn replace(&self, search: &[u8], replacement: &[u8], from: u32) -> Result<Self, OpsError>;

    /// The receiver with the first occurrence of `pattern` removed.
    fn delete_sub(&self, pattern: &[u8]) -> Result<Self, OpsError>;

    /// The receiver with a leading `pattern` removed; fails when the
    /// content does not start with it.
    fn strip_prefix(&self, pattern: &[u8]) -> Result<Self, OpsError>;

    /// The receiver with a trailing `pattern` removed; fails when the
    /// content does not end with it.
    fn strip_suffix(&self, pattern: &[u8]) -> Result<Self, OpsError>;

    /// Content before and after the first occurrence of `delimiter`.
    fn split_once(&self, delimiter: &[u8]) -> Result<(Self, Self), OpsError>;

    /// Ordered fragments around every non-overlapping occurrence of
    /// `delimiter`; a buffer without the delimiter yields one fragment.
    fn split_all(&self, delimiter: &[u8]) -> Result<Vec<Self>, OpsError>;
}

impl Search for StrBuf {
    fn find(&self, pattern: &[u8], from: u32) -> Option<u32> {
        let hay = self.as_bytes();
        let from = from as usize;

        if pattern.is_empty() || from > hay.len() || pattern.len() > hay.len() - from {
            return None;
        }

        hay[from..]
            .windows(pattern.len())
            .position(|window| window == pattern)
            .map(|found| (from + found) as u32)
    }

    fn find_byte(&self, byte: u8, from: u32) -> Option<u32> {
        let hay = self.as_bytes();
        let from = from as usize;

        if from > hay.len() {
            return None;
        }

        hay[from..]
            .iter()
            .position(|&candidate| candidate == byte)
            .map(|found| (from + found) as u32)
    }

    fn replace(&self, search: &[u8], replacement: &[u8], from: u32) -> Result<Self, OpsError> {
        if from > self.len() {
            return Err(OpsError::PosOutOfRange {
                pos: from,
                len: self.len(),
            });
        }

        let pos = self.find(search, from).ok_or(OpsError::NotFound)? as usize;
        let hay = self.as_bytes();
        let total = hay.len() - search.len() + replacement.len();

        let mut out = alloc_exact(total)?;
        out.append_bytes(&hay[..pos])?;
        out.append_bytes(replacement)?;
        out.append_bytes(&hay[pos + search.len()..])?;

        Ok(out)
    }

    fn delete_sub(&self, pattern: &[u8]) -> Result<Self, OpsError> {
        let pos = self.find(pattern, 0).ok_or(OpsError::NotFound)? as usize;
        let hay = self.as_bytes();

        let mut out = alloc_exact(hay.len() - pattern.len())?;
        out.append_bytes(&hay[..pos])?;
        out.append_bytes(&hay[pos + pattern.len()..])?;

        Ok(out)
    }

    fn strip_prefix(&self, pattern: &[u8]) -> Result<Self, OpsError> {
        if pattern.is_empty() {
            return Err(OpsError::EmptyPattern);
        }

        let rest = self
            .as_bytes()
            .strip_prefix(pattern)
            .ok_or(OpsError::NotFound)?;

        Ok(StrBuf::from_bytes(rest)?)
    }

    fn strip_suffix(&self, pattern: &[u8]) -> Result<Self, OpsError> {
        if pattern.is_empty() {
            return Err(OpsError::EmptyPattern);
        }

        let rest = self
            .as_bytes()
            .strip_suffix(pattern)
            .ok_or(OpsError::NotFound)?;

        Ok(StrBuf::from_bytes(rest)?)
    }

    fn split_once(&self, delimiter: &[u8]) -> Result<(Self, Self), OpsError> {
        if delimiter.is_empty() {
            return Err(OpsError::EmptyPattern);
        }

        let pos = self.find(delimiter, 0).ok_or(OpsError::NotFound)? as usize;
        let hay = self.as_bytes();

        let before = StrBuf::from_bytes(&hay[..pos])?;
        let after = StrBuf::from_bytes(&hay[pos + delimiter.len()..])?;

        Ok((before, after))
    }

    fn split_all(&self, delimiter: &[u8]) -> Result<Vec<Self>, OpsError> {
        if delimiter.is_empty() {
            return Err(OpsError::EmptyPattern);
        }

        let hay = self.as_bytes();
        let mut fragments = Vec::new();
        let mut start = 0usize;

        while let Some(found) = self.find(delimiter, start as u32) {
            let found = found as usize;
            fragments.push(StrBuf::from_bytes(&hay[start..found])?);
            start = found + delimiter.len();
        }
        fragments.push(StrBuf::from_bytes(&hay[start..])?);

        Ok(fragments)
    }
}
