// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! StrBuf - string buffer with an explicit, caller-controlled capacity.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::BufferError;
use crate::fmt::{LenCounter, WindowWriter};

/// Maximum number of content bytes a buffer can hold.
///
/// Lengths and capacities live in the unsigned 32-bit range; the last value
/// is reserved so the sentinel slot at `capacity + 1` always fits.
pub const MAX_LEN: u32 = u32::MAX - 1;

/// Bounds-checked string buffer with an explicit capacity.
///
/// Storage spans `capacity + 1` bytes and the byte at index `len` is always
/// the NUL sentinel. Capacity changes only through [`StrBuf::resize`]; every
/// write is checked against it up front, so an oversized write fails without
/// touching the buffer.
///
/// The buffer is exclusively owned: value-producing operations built on top
/// of it allocate fresh buffers, and the in-place mutators take `&mut self`,
/// which rules out unsynchronized sharing at compile time.
pub struct StrBuf {
    cap: u32,
    len: u32,
    data: Vec<u8>,
}

impl StrBuf {
    #[inline(always)]
    fn debug_assert_invariant(&self) {
        debug_assert!(
            self.len <= self.cap,
            "Invariant violated: len ({}) <= cap ({})",
            self.len,
            self.cap
        );
        debug_assert_eq!(
            self.data.len(),
            self.cap as usize + 1,
            "Invariant violated: storage must span cap + 1 bytes"
        );
        debug_assert_eq!(
            self.data[self.len as usize], 0,
            "Invariant violated: sentinel must follow the content"
        );
    }

    /// Allocates a fresh buffer of capacity `cap` with zero length.
    pub fn new(cap: u32) -> Result<Self, BufferError> {
        if cap > MAX_LEN {
            return Err(BufferError::CapacityOverflow {
                requested: cap as usize,
            });
        }

        let mut data = Vec::new();
        data.try_reserve_exact(cap as usize + 1)
            .map_err(|_| BufferError::Alloc)?;
        data.resize(cap as usize + 1, 0);

        let buf = Self { cap, len: 0, data };
        buf.debug_assert_invariant();

        Ok(buf)
    }

    /// Allocates a buffer sized exactly to `source` and copies it in.
    ///
    /// Fails with [`BufferError::CapacityOverflow`] when `source` is longer
    /// than [`MAX_LEN`]; the source is never silently truncated.
    pub fn from_bytes(source: &[u8]) -> Result<Self, BufferError> {
        let len = u32::try_from(source.len())
            .ok()
            .filter(|len| *len <= MAX_LEN)
            .ok_or(BufferError::CapacityOverflow {
                requested: source.len(),
            })?;

        let mut buf = Self::new(len)?;
        buf.data[..source.len()].copy_from_slice(source);
        buf.len = len;
        buf.debug_assert_invariant();

        Ok(buf)
    }

    /// Clones the buffer: same capacity, content copied through the sentinel.
    ///
    /// The duplicate owns independent storage; mutating one buffer never
    /// affects the other.
    pub fn duplicate(&self) -> Result<Self, BufferError> {
        let mut dup = Self::new(self.cap)?;
        let end = self.len as usize + 1;
        dup.data[..end].copy_from_slice(&self.data[..end]);
        dup.len = self.len;
        dup.debug_assert_invariant();

        Ok(dup)
    }

    /// Grows or shrinks the capacity in place.
    ///
    /// Shrinking below the current length truncates the content and moves
    /// the sentinel to the new boundary. On allocation failure the buffer
    /// is left fully intact.
    pub fn resize(&mut self, new_cap: u32) -> Result<(), BufferError> {
        if new_cap == self.cap {
            return Ok(());
        }
        if new_cap > MAX_LEN {
            return Err(BufferError::CapacityOverflow {
                requested: new_cap as usize,
            });
        }

        let new_size = new_cap as usize + 1;
        if new_size > self.data.len() {
            let additional = new_size - self.data.len();
            self.data
                .try_reserve_exact(additional)
                .map_err(|_| BufferError::Alloc)?;
            self.data.resize(new_size, 0);
        } else {
            self.data.truncate(new_size);
        }

        self.cap = new_cap;
        if new_cap < self.len {
            self.len = new_cap;
        }
        self.data[self.len as usize] = 0;
        self.debug_assert_invariant();

        Ok(())
    }

    /// Takes over `src`'s content, consuming it.
    ///
    /// Grows this buffer to `src`'s capacity when its own capacity cannot
    /// hold `src`'s content. On growth failure this buffer is unchanged.
    /// The source is consumed either way; a stale handle to it cannot be
    /// used or released twice. Returns the new length.
    pub fn absorb(&mut self, src: StrBuf) -> Result<u32, BufferError> {
        if src.len > self.cap {
            self.resize(src.cap)?;
        }

        let end = src.len as usize + 1;
        self.data[..end].copy_from_slice(&src.data[..end]);
        self.len = src.len;
        self.debug_assert_invariant();

        Ok(self.len)
    }

    /// Copies a plain byte string into the buffer, growing it when needed.
    ///
    /// Fails without mutation when `source` is longer than [`MAX_LEN`] or
    /// when the growth allocation fails.
    pub fn copy_from(&mut self, source: &[u8]) -> Result<(), BufferError> {
        let len = u32::try_from(source.len())
            .ok()
            .filter(|len| *len <= MAX_LEN)
            .ok_or(BufferError::CapacityOverflow {
                requested: source.len(),
            })?;

        if len > self.cap {
            self.resize(len)?;
        }

        self.data[..source.len()].copy_from_slice(source);
        self.len = len;
        self.data[self.len as usize] = 0;
        self.debug_assert_invariant();

        Ok(())
    }

    /// Appends formatted text to the end of the buffer, atomically.
    ///
    /// The required length is measured first; the write happens only when
    /// the whole result fits in `capacity - len`. On failure the buffer is
    /// byte-for-byte unchanged. Returns the change in length.
    ///
    /// ```rust
    /// use palisade_buffer::{BufferError, StrBuf};
    ///
    /// fn example() -> Result<(), BufferError> {
    ///     let mut buf = StrBuf::new(20)?;
    ///     buf.append(format_args!("{} has {} apples", "Mary", 10))?;
    ///     assert_eq!(buf.as_bytes(), b"Mary has 10 apples");
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn append(&mut self, args: fmt::Arguments<'_>) -> Result<u32, BufferError> {
        let spare = (self.cap - self.len) as usize;
        let written = self.format_into(self.len as usize, spare, args)?;
        self.len += written;
        self.debug_assert_invariant();

        Ok(written)
    }

    /// Appends raw bytes, atomically: all of `bytes` or nothing.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<u32, BufferError> {
        let spare = (self.cap - self.len) as usize;
        if bytes.len() > spare {
            return Err(BufferError::CapacityExceeded {
                needed: bytes.len(),
                available: spare,
            });
        }

        let at = self.len as usize;
        self.data[at..at + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len() as u32;
        self.data[self.len as usize] = 0;
        self.debug_assert_invariant();

        Ok(bytes.len() as u32)
    }

    /// Writes formatted text at the start of the buffer, atomically.
    ///
    /// Same two-pass contract as [`StrBuf::append`], but the result is
    /// bounded by the full capacity and replaces any previous content. On
    /// success the length becomes the written length.
    pub fn write(&mut self, args: fmt::Arguments<'_>) -> Result<u32, BufferError> {
        let written = self.format_into(0, self.cap as usize, args)?;
        self.len = written;
        self.debug_assert_invariant();

        Ok(written)
    }

    /// Empties the buffer: length zero, sentinel first, capacity kept.
    pub fn reset(&mut self) {
        self.len = 0;
        self.data[0] = 0;
        self.debug_assert_invariant();
    }

    /// Fixed maximum content length in bytes.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.cap
    }

    /// Current content length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// True when the buffer holds no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only view of the content bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// Content bytes including the trailing NUL sentinel.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..self.len as usize + 1]
    }

    /// Content as UTF-8, when it is valid UTF-8.
    #[inline]
    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Measures `args`, then renders it into a `window`-byte region starting
    /// at `at`. Does not commit a length change; on failure the sentinel at
    /// the current length is restored and the length is untouched.
    fn format_into(
        &mut self,
        at: usize,
        window: usize,
        args: fmt::Arguments<'_>,
    ) -> Result<u32, BufferError> {
        let mut counter = LenCounter::new();
        fmt::write(&mut counter, args).map_err(|_| BufferError::Fmt)?;

        let needed = counter.len();
        if needed > window {
            return Err(BufferError::CapacityExceeded {
                needed,
                available: window,
            });
        }

        let mut writer = WindowWriter::new(&mut self.data[at..at + needed]);
        match fmt::write(&mut writer, args) {
            Ok(()) if writer.written() == needed => {
                self.data[at + needed] = 0;
                Ok(needed as u32)
            }
            _ => {
                // A Display impl that misreports its own length between the
                // two passes may have scribbled inside the window; the length
                // stays as it was, only the sentinel needs restoring.
                self.data[self.len as usize] = 0;
                Err(BufferError::Fmt)
            }
        }
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self {
            cap: 0,
            len: 0,
            data: alloc::vec![0u8],
        }
    }
}

impl FromStr for StrBuf {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

/// Buffers compare by length and exact byte content; capacity is ignored
/// and there is no case folding.
impl PartialEq for StrBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StrBuf {}

impl PartialEq<[u8]> for StrBuf {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for StrBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for StrBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for StrBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrBuf")
            .field("cap", &self.cap)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
