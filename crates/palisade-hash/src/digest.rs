// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Version selector, digest value type and the hashing entry point.

use core::fmt;

use palisade_buffer::StrBuf;

use crate::{half_sip, sip};

/// Engine and output-length selector for [`hash`].
///
/// Declaration order matches the wire numbering of the version byte
/// (`0..=3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HashVersion {
    /// 64-bit-word engine, 8-byte output.
    Sip64 = 0,

    /// 64-bit-word engine, 16-byte output.
    Sip128 = 1,

    /// 32-bit half-word engine, 4-byte output.
    HSip32 = 2,

    /// 32-bit half-word engine, 8-byte output.
    HSip64 = 3,
}

impl HashVersion {
    /// Declared digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sip64 => 8,
            Self::Sip128 => 16,
            Self::HSip32 => 4,
            Self::HSip64 => 8,
        }
    }
}

/// Keyed digest: raw output bytes plus the declared output length.
///
/// Produced only by [`hash`]; it has no lifecycle of its own beyond the
/// call that built it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest {
    out: [u8; 16],
    outlen: usize,
}

impl Digest {
    /// The digest bytes, exactly the declared number of them.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out[..self.outlen]
    }

    /// Declared output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.outlen
    }

    /// True when the digest carries no bytes; never the case for digests
    /// produced by [`hash`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outlen == 0
    }
}

/// Lowercase hex of the digest bytes.
impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

/// Computes the keyed digest of `buf`'s content under `key`.
///
/// Deterministic: identical (content, version, key) triples always yield
/// identical output. The half-word versions consume only the first 8 key
/// bytes, as their construction defines.
pub fn hash(buf: &StrBuf, version: HashVersion, key: &[u8; 16]) -> Digest {
    let mut out = [0u8; 16];
    let outlen = version.output_len();

    match version {
        HashVersion::Sip64 | HashVersion::Sip128 => {
            sip::hash_into(buf.as_bytes(), key, &mut out[..outlen]);
        }
        HashVersion::HSip32 | HashVersion::HSip64 => {
            half_sip::hash_into(buf.as_bytes(), key, &mut out[..outlen]);
        }
    }

    Digest { out, outlen }
}
