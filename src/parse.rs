// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text to 128-bit integers.
//!
//! The scanner finds the digit run (the *pattern*). The pattern is then read
//! from its least-significant end in chunks of up to `max_digits(base)`
//! digits, each small enough for the native `u64` parser:
//!
//! - **Power-of-two bases** OR each chunk in at a bit offset that grows by
//!   `bits_per_chunk` per chunk. A chunk whose highest set bit would land past
//!   bit 127 is an overflow.
//! - **Other bases** multiply each chunk by a positional factor
//!   (`max_power^i`) and add it in, with every multiply and add checked.
//!
//! Leading zeros can make the positional factor itself overflow long before
//! the value does (sixty `0`s then `1` in decimal). The factor is tracked as
//! `Option`: once it no longer fits, any further nonzero chunk is out of
//! range, and zero chunks are skipped.
//!
//! Consumed length:
//! - malformed input (no digits): 0;
//! - success or overflow: one past the last digit, sign included.

use crate::arith::{mul_add, mul_overflow};
use crate::contracts::check_base;
use crate::error::ParseError;
use crate::native::{fold_digits, parse_i64};
use crate::radix::{is_power_of_two, MAX_DIGITS, MAX_POWER};
use crate::scan::digit_run_len;

/// Parse the leading digit run of `text` as a `u128`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Panics
/// Panics if `base` is outside `2..=36`.
pub fn parse_u128(text: &[u8], base: u32) -> Result<(u128, usize), ParseError> {
    check_base(base);

    let len = digit_run_len(text, base);
    if len == 0 {
        return Err(ParseError::invalid());
    }
    let pattern = &text[..len];

    let value = if is_power_of_two(base) {
        accumulate_bit_chunks(pattern, base)
    } else {
        accumulate_positional_chunks(pattern, base)
    };
    value
        .map(|v| (v, len))
        .ok_or(ParseError::out_of_range(len))
}

/// Parse an optionally negative leading digit run of `text` as an `i128`.
///
/// # Panics
/// Panics if `base` is outside `2..=36`.
pub fn parse_i128(text: &[u8], base: u32) -> Result<(i128, usize), ParseError> {
    check_base(base);

    let Some(rest) = text.strip_prefix(b"-") else {
        let (x, len) = parse_u128(text, base)?;
        // Bit 127 set means the value is past i128::MAX
        return i128::try_from(x)
            .map(|v| (v, len))
            .map_err(|_| ParseError::out_of_range(len));
    };

    let digits = digit_run_len(rest, base);
    if digits == 0 {
        return Err(ParseError::invalid());
    }
    // Fewer than max_digits digits is below base^(max_digits - 1) <= 2^63
    if digits < MAX_DIGITS[base as usize] as usize {
        return parse_i64(text, base).map(|(v, n)| (v as i128, n));
    }

    let consumed = digits + 1;
    let (magnitude, _) =
        parse_u128(rest, base).map_err(|_| ParseError::out_of_range(consumed))?;
    if magnitude > i128::MIN.unsigned_abs() {
        return Err(ParseError::out_of_range(consumed));
    }
    Ok(((magnitude as i128).wrapping_neg(), consumed))
}

/// Reassemble a power-of-two pattern by bit shifting.
fn accumulate_bit_chunks(pattern: &[u8], base: u32) -> Option<u128> {
    let width = MAX_DIGITS[base as usize] as usize;
    let bits = MAX_POWER[base as usize].trailing_zeros();

    let mut result = 0u128;
    let mut shift = 0u32;
    for chunk in pattern.rchunks(width) {
        // A chunk of at most `width` digits always fits a u64
        let digits = fold_digits(chunk, base)?;
        let occupied = u64::BITS - digits.leading_zeros();
        if digits != 0 {
            if shift.saturating_add(occupied) > u128::BITS {
                return None;
            }
            result |= (digits as u128) << shift;
        }
        shift = shift.saturating_add(bits);
    }
    Some(result)
}

/// Reassemble an arbitrary-base pattern by multiply-accumulate.
fn accumulate_positional_chunks(pattern: &[u8], base: u32) -> Option<u128> {
    let width = MAX_DIGITS[base as usize] as usize;
    let power = MAX_POWER[base as usize] as u128;

    let mut result = 0u128;
    let mut factor = Some(1u128);
    for chunk in pattern.rchunks(width) {
        let digits = fold_digits(chunk, base)?;
        if digits != 0 {
            result = mul_add(result, factor?, digits)?;
        }
        factor = factor.and_then(|f| match mul_overflow(f, power) {
            (next, false) => Some(next),
            (_, true) => None,
        });
    }
    Some(result)
}
