// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-word (≤ 64-bit) text conversion.
//!
//! This is the building block the 128-bit paths delegate to. It behaves like
//! C++ `std::to_chars` / `std::from_chars` for 64-bit integers:
//!
//! - formatting writes the minimal lowercase digits (plus `-` for negatives)
//!   to the front of the buffer and returns the length written;
//! - parsing consumes the longest digit run (after an optional `-` for signed
//!   types) and reports how many bytes it consumed, even when the value turns
//!   out not to fit.
//!
//! No `+` sign, no whitespace, no prefixes. `u64::from_str_radix` can't be
//! used here because it rejects trailing input instead of stopping at it.

use crate::contracts::check_base;
use crate::error::{FormatError, ParseError};
use crate::scan::{digit_in_base, digit_run_len, DIGITS};

/// Most digits a `u64` can need (base 2).
const U64_MAX_LEN: usize = 64;

// ============================================================================
// FORMAT
// ============================================================================

/// Write `x` in `base` to the front of `buf`, returning the bytes written.
pub fn format_u64(buf: &mut [u8], x: u64, base: u32) -> Result<usize, FormatError> {
    check_base(base);

    let mut tmp = [0u8; U64_MAX_LEN];
    let mut pos = tmp.len();
    let mut v = x;

    if base.is_power_of_two() {
        let shift = base.trailing_zeros();
        let mask = (base - 1) as u64;
        loop {
            pos -= 1;
            tmp[pos] = DIGITS[(v & mask) as usize];
            v >>= shift;
            if v == 0 {
                break;
            }
        }
    } else {
        let b = base as u64;
        loop {
            pos -= 1;
            tmp[pos] = DIGITS[(v % b) as usize];
            v /= b;
            if v == 0 {
                break;
            }
        }
    }

    let digits = &tmp[pos..];
    let out = buf
        .get_mut(..digits.len())
        .ok_or(FormatError::ValueTooLarge)?;
    out.copy_from_slice(digits);
    Ok(digits.len())
}

/// Write `x` in `base` to the front of `buf`, with a leading `-` if negative.
pub fn format_i64(buf: &mut [u8], x: i64, base: u32) -> Result<usize, FormatError> {
    check_base(base);

    if x >= 0 {
        return format_u64(buf, x as u64, base);
    }
    let (sign, rest) = buf.split_first_mut().ok_or(FormatError::ValueTooLarge)?;
    *sign = b'-';
    Ok(1 + format_u64(rest, x.unsigned_abs(), base)?)
}

// ============================================================================
// PARSE
// ============================================================================

/// Accumulate a slice of already-validated digits into a `u64`.
///
/// Returns `None` on overflow.
#[inline]
pub(crate) fn fold_digits(digits: &[u8], base: u32) -> Option<u64> {
    let b = base as u64;
    digits.iter().try_fold(0u64, |acc, &c| {
        let d = digit_in_base(c, base)?;
        acc.checked_mul(b)?.checked_add(d as u64)
    })
}

/// Parse the leading digit run of `text` as a `u64`.
///
/// Returns the value and the number of bytes consumed.
pub fn parse_u64(text: &[u8], base: u32) -> Result<(u64, usize), ParseError> {
    check_base(base);

    let len = digit_run_len(text, base);
    if len == 0 {
        return Err(ParseError::invalid());
    }
    fold_digits(&text[..len], base)
        .map(|v| (v, len))
        .ok_or(ParseError::out_of_range(len))
}

/// Parse an optionally negative leading digit run of `text` as an `i64`.
pub fn parse_i64(text: &[u8], base: u32) -> Result<(i64, usize), ParseError> {
    check_base(base);

    let Some(rest) = text.strip_prefix(b"-") else {
        let (v, len) = parse_u64(text, base)?;
        return i64::try_from(v)
            .map(|v| (v, len))
            .map_err(|_| ParseError::out_of_range(len));
    };

    let len = digit_run_len(rest, base);
    if len == 0 {
        return Err(ParseError::invalid());
    }
    let consumed = len + 1;
    match fold_digits(&rest[..len], base) {
        Some(magnitude) if magnitude <= i64::MIN.unsigned_abs() => {
            Ok(((magnitude as i64).wrapping_neg(), consumed))
        }
        _ => Err(ParseError::out_of_range(consumed)),
    }
}

/// Parse into an unsigned type narrower than 64 bits.
pub(crate) fn parse_unsigned_narrow<T: TryFrom<u64>>(
    text: &[u8],
    base: u32,
) -> Result<(T, usize), ParseError> {
    let (v, len) = parse_u64(text, base)?;
    T::try_from(v)
        .map(|v| (v, len))
        .map_err(|_| ParseError::out_of_range(len))
}

/// Parse into a signed type narrower than 64 bits.
pub(crate) fn parse_signed_narrow<T: TryFrom<i64>>(
    text: &[u8],
    base: u32,
) -> Result<(T, usize), ParseError> {
    let (v, len) = parse_i64(text, base)?;
    T::try_from(v)
        .map(|v| (v, len))
        .map_err(|_| ParseError::out_of_range(len))
}
