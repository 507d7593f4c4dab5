// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Internal allocation helper shared by the operation impls.

use palisade_buffer::{BufferError, MAX_LEN, StrBuf};

use crate::error::OpsError;

/// Allocates a result buffer of exactly `total` bytes of capacity.
pub(crate) fn alloc_exact(total: usize) -> Result<StrBuf, OpsError> {
    let cap = u32::try_from(total)
        .ok()
        .filter(|cap| *cap <= MAX_LEN)
        .ok_or(OpsError::Buffer(BufferError::CapacityOverflow {
            requested: total,
        }))?;

    Ok(StrBuf::new(cap)?)
}
