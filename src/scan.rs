// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The digit alphabet and the scanner that finds where a number ends.
//!
//! Input is case-insensitive (`0-9`, `a-z`, `A-Z`); output is always
//! lowercase. The scanner never looks at a sign. Stripping `-` is the
//! parser's job.

/// Lowercase digit characters, indexed by digit value.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Value of an ASCII digit character in the widest alphabet, or `None`.
#[inline]
pub const fn digit_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'a'..=b'z' => Some((c - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((c - b'A') as u32 + 10),
        _ => None,
    }
}

/// Value of `c` as a digit in `base`, or `None` if it is not one.
#[inline]
pub const fn digit_in_base(c: u8, base: u32) -> Option<u32> {
    match digit_value(c) {
        Some(v) if v < base => Some(v),
        _ => None,
    }
}

/// Length of the run of valid `base` digits at the start of `text`.
///
/// Zero when the first byte is not a digit (or `text` is empty).
#[inline]
pub fn digit_run_len(text: &[u8], base: u32) -> usize {
    text.iter()
        .position(|&c| digit_in_base(c, base).is_none())
        .unwrap_or(text.len())
}
