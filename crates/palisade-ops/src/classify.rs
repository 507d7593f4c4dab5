// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Content classification and numeric parsing.

use palisade_buffer::StrBuf;

use crate::error::OpsError;
use crate::text::is_space;

/// Classification predicates and numeric parsing over buffer content.
///
/// The predicates are byte-oriented and never fail; the parsers return a
/// defined error for malformed or non-UTF-8 content.
pub trait Validate {
    /// Optional leading `-` followed by one or more ASCII digits, whole
    /// content consumed.
    fn is_integer(&self) -> bool;

    /// Optional leading `-`, ASCII digits and at most one `.`, with at
    /// least one digit. A bare trailing dot is accepted.
    fn is_float(&self) -> bool;

    /// An integer carrying a leading `-`.
    fn is_signed(&self) -> bool;

    /// After skipping `skip` leading bytes, the remainder is ASCII
    /// alphanumeric (plus `_` when `allow_underscore` is set).
    fn is_alnum(&self, skip: u32, allow_underscore: bool) -> bool;

    /// Empty or entirely ASCII whitespace.
    fn is_blank(&self) -> bool;

    /// Content parsed as an integer in the given radix (2..=36).
    fn parse_long(&self, radix: u32) -> Result<i64, OpsError>;

    /// Content parsed as a float, exponents included.
    fn parse_double(&self) -> Result<f64, OpsError>;
}

impl Validate for StrBuf {
    fn is_integer(&self) -> bool {
        let bytes = self.as_bytes();
        let digits = bytes.strip_prefix(b"-").unwrap_or(bytes);

        !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
    }

    fn is_float(&self) -> bool {
        let bytes = self.as_bytes();
        let body = bytes.strip_prefix(b"-").unwrap_or(bytes);

        let mut seen_dot = false;
        let mut seen_digit = false;
        for &byte in body {
            match byte {
                b'0'..=b'9' => seen_digit = true,
                b'.' if !seen_dot => seen_dot = true,
                _ => return false,
            }
        }

        seen_digit
    }

    fn is_signed(&self) -> bool {
        self.as_bytes().first() == Some(&b'-') && self.is_integer()
    }

    fn is_alnum(&self, skip: u32, allow_underscore: bool) -> bool {
        let bytes = self.as_bytes();
        if skip as usize > bytes.len() {
            return false;
        }

        bytes[skip as usize..]
            .iter()
            .all(|&byte| byte.is_ascii_alphanumeric() || (allow_underscore && byte == b'_'))
    }

    fn is_blank(&self) -> bool {
        self.as_bytes().iter().all(|&byte| is_space(byte))
    }

    fn parse_long(&self, radix: u32) -> Result<i64, OpsError> {
        if !(2..=36).contains(&radix) {
            return Err(OpsError::InvalidRadix { radix });
        }

        Ok(i64::from_str_radix(self.as_str()?, radix)?)
    }

    fn parse_double(&self) -> Result<f64, OpsError> {
        Ok(self.as_str()?.parse::<f64>()?)
    }
}
