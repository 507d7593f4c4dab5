// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Substring extraction and splicing.

use palisade_buffer::StrBuf;

use crate::error::OpsError;
use crate::support::alloc_exact;

/// Value-producing substring and splicing operations.
///
/// Positions are 0-based byte offsets and ranges are inclusive on both
/// ends. Every method allocates a fresh buffer sized exactly to its result
/// and leaves the receiver untouched.
pub trait Slice: Sized {
    /// Bytes `[0, pos]`. Fails when `pos` is not inside the content.
    fn left(&self, pos: u32) -> Result<Self, OpsError>;

    /// Bytes `[pos, len)`. `pos == len` yields an empty buffer.
    fn right(&self, pos: u32) -> Result<Self, OpsError>;

    /// Bytes `[from, to]`.
    fn mid(&self, from: u32, to: u32) -> Result<Self, OpsError>;

    /// The receiver's bytes followed by `other`'s.
    fn concat(&self, other: &Self) -> Result<Self, OpsError>;

    /// `other` spliced in front of byte `pos`; `pos == len` appends.
    fn insert(&self, other: &Self, pos: u32) -> Result<Self, OpsError>;

    /// The receiver with bytes `[from, to]` removed.
    fn delete(&self, from: u32, to: u32) -> Result<Self, OpsError>;
}

impl Slice for StrBuf {
    fn left(&self, pos: u32) -> Result<Self, OpsError> {
        if pos >= self.len() {
            return Err(OpsError::PosOutOfRange {
                pos,
                len: self.len(),
            });
        }

        Ok(StrBuf::from_bytes(&self.as_bytes()[..=pos as usize])?)
    }

    fn right(&self, pos: u32) -> Result<Self, OpsError> {
        if pos > self.len() {
            return Err(OpsError::PosOutOfRange {
                pos,
                len: self.len(),
            });
        }

        Ok(StrBuf::from_bytes(&self.as_bytes()[pos as usize..])?)
    }

    fn mid(&self, from: u32, to: u32) -> Result<Self, OpsError> {
        if from > to {
            return Err(OpsError::EmptyRange { from, to });
        }
        if to >= self.len() {
            return Err(OpsError::PosOutOfRange {
                pos: to,
                len: self.len(),
            });
        }

        Ok(StrBuf::from_bytes(
            &self.as_bytes()[from as usize..=to as usize],
        )?)
    }

    fn concat(&self, other: &Self) -> Result<Self, OpsError> {
        let total = self.len() as usize + other.len() as usize;

        let mut out = alloc_exact(total)?;
        out.append_bytes(self.as_bytes())?;
        out.append_bytes(other.as_bytes())?;

        Ok(out)
    }

    fn insert(&self, other: &Self, pos: u32) -> Result<Self, OpsError> {
        if pos > self.len() {
            return Err(OpsError::PosOutOfRange {
                pos,
                len: self.len(),
            });
        }

        let bytes = self.as_bytes();
        let total = bytes.len() + other.len() as usize;

        let mut out = alloc_exact(total)?;
        out.append_bytes(&bytes[..pos as usize])?;
        out.append_bytes(other.as_bytes())?;
        out.append_bytes(&bytes[pos as usize..])?;

        Ok(out)
    }

    fn delete(&self, from: u32, to: u32) -> Result<Self, OpsError> {
        if from > to {
            return Err(OpsError::EmptyRange { from, to });
        }
        if to >= self.len() {
            return Err(OpsError::PosOutOfRange {
                pos: to,
                len: self.len(),
            });
        }

        let bytes = self.as_bytes();
        let removed = (to - from + 1) as usize;

        let mut out = alloc_exact(bytes.len() - removed)?;
        out.append_bytes(&bytes[..from as usize])?;
        out.append_bytes(&bytes[to as usize + 1..])?;

        Ok(out)
    }
}
