// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! 128-bit integers to text.
//!
//! Values that fit a `u64` (or `i64`) go straight to the native formatter.
//! Wider values are cut into chunks of `max_digits(base)` digits, each of
//! which fits a `u64`, and two strategies apply:
//!
//! - **Power-of-two bases** split on bit boundaries. Octal handles 63 bits per
//!   chunk, so 128 bits leave a 2-bit "head" that is printed first. Base 32
//!   leaves an 8-bit head. Bases 2, 4 and 16 divide 128 evenly and have none.
//! - **Other bases** split by division: format `x / max_power` recursively,
//!   then append `x % max_power`. For decimal that is at most three 19-digit
//!   groups (u128::MAX has 39 digits).
//!
//! In both cases the first chunk emitted is printed at its natural length and
//! every later chunk is left-padded with zeros to exactly `max_digits(base)`.
//! That asymmetry is what makes the output both minimal and exact: the
//! native formatter drops leading zeros, which are significant in any chunk
//! that is not the first.
//!
//! Output is lowercase.

use crate::contracts::{check_base, check_chunk_fits, check_minimal};
use crate::error::FormatError;
use crate::native::{format_i64, format_u64};
use crate::radix::{is_power_of_two, MAX_DIGITS, MAX_POWER};

/// Write `x` in `base` to the front of `buf`, returning the bytes written.
///
/// # Panics
/// Panics if `base` is outside `2..=36`.
pub fn format_u128(buf: &mut [u8], x: u128, base: u32) -> Result<usize, FormatError> {
    check_base(base);
    let written = format_unsigned(buf, x, base)?;
    check_minimal(&buf[..written]);
    Ok(written)
}

/// Write `x` in `base` to the front of `buf`, with a leading `-` if negative.
///
/// `i128::MIN` is handled through its unsigned magnitude, 2^127.
///
/// # Panics
/// Panics if `base` is outside `2..=36`.
pub fn format_i128(buf: &mut [u8], x: i128, base: u32) -> Result<usize, FormatError> {
    check_base(base);

    if x >= 0 {
        return format_u128(buf, x as u128, base);
    }
    if let Ok(small) = i64::try_from(x) {
        return format_i64(buf, small, base);
    }
    // Any negative value wider than i64 needs the sign plus at least one digit
    if buf.len() < 2 {
        return Err(FormatError::ValueTooLarge);
    }
    buf[0] = b'-';
    let written = 1 + format_unsigned(&mut buf[1..], x.unsigned_abs(), base)?;
    check_minimal(&buf[..written]);
    Ok(written)
}

fn format_unsigned(buf: &mut [u8], x: u128, base: u32) -> Result<usize, FormatError> {
    if let Ok(small) = u64::try_from(x) {
        return format_u64(buf, small, base);
    }
    if buf.is_empty() {
        return Err(FormatError::ValueTooLarge);
    }
    if is_power_of_two(base) {
        format_bit_chunks(buf, x, base)
    } else {
        format_division_chunks(buf, x, base)
    }
}

// ============================================================================
// POWER-OF-TWO BASES
// ============================================================================

/// Emit the value as head bits followed by fixed-width bit chunks.
fn format_bit_chunks(buf: &mut [u8], x: u128, base: u32) -> Result<usize, FormatError> {
    let bits = MAX_POWER[base as usize].trailing_zeros();
    debug_assert!((1..=64).contains(&bits));
    let head_bits = 128 % bits;

    let mut pos = 0;
    let mut leading = true;

    if head_bits != 0 {
        let head = (x >> (128 - head_bits)) as u64;
        if head != 0 {
            pos = format_u64(buf, head, base)?;
            leading = false;
        }
    }

    let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
    // 128 - head_bits is a multiple of `bits`, so this lands exactly on 0
    let mut shift = 128 - head_bits;
    while shift > 0 {
        shift -= bits;
        let piece = (x >> shift) as u64 & mask;
        let rest = &mut buf[pos..];
        pos += if leading {
            format_u64(rest, piece, base)?
        } else {
            write_padded(rest, piece, base)?
        };
        leading = false;
    }

    Ok(pos)
}

// ============================================================================
// OTHER BASES
// ============================================================================

/// Emit `x / max_power` recursively, then `x % max_power` as one padded chunk.
fn format_division_chunks(buf: &mut [u8], x: u128, base: u32) -> Result<usize, FormatError> {
    let power = MAX_POWER[base as usize] as u128;
    debug_assert!(power != 0, "sentinel power used as a divisor");

    let upper = format_unsigned(buf, x / power, base)?;
    let lower = (x % power) as u64;
    Ok(upper + write_padded(&mut buf[upper..], lower, base)?)
}

// ============================================================================
// PADDING
// ============================================================================

/// Write `piece` left-padded with `'0'` to exactly `max_digits(base)` bytes.
fn write_padded(buf: &mut [u8], piece: u64, base: u32) -> Result<usize, FormatError> {
    let width = MAX_DIGITS[base as usize] as usize;
    let out = buf.get_mut(..width).ok_or(FormatError::ValueTooLarge)?;

    let mut digits = [0u8; 64];
    let natural = format_u64(&mut digits, piece, base)?;
    check_chunk_fits(natural, base);

    let (zeros, tail) = out.split_at_mut(width - natural);
    zeros.fill(b'0');
    tail.copy_from_slice(&digits[..natural]);
    Ok(width)
}
