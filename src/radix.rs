// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-base constants for splitting 128-bit values into 64-bit chunks.
//!
//! Everything wide is done by cutting the value into pieces that a `u64` can
//! hold, converting each piece natively, and gluing the text back together.
//! Two numbers per base make that work:
//!
//! - `max_digits(b)`: how many base-b digits always fit in a `u64`.
//!   Mathematically `floor(64 / log2(b))`.
//! - `max_power(b)`: `b^max_digits(b)`, the positional weight of one chunk.
//!   For bases 2, 4 and 16 that power is exactly 2^64, which a `u64` cannot
//!   hold, so the table stores 0. Zero means "no bit of the word is wasted".
//!   Never divide by it.
//!
//! Both tables are `const` arrays evaluated at compile time.
//!
//! | base | max_digits | max_power              | bits_per_chunk |
//! |------|------------|------------------------|----------------|
//! | 2    | 64         | 0 (2^64)               | 64             |
//! | 8    | 21         | 2^63                   | 63             |
//! | 10   | 19         | 10^19                  | -              |
//! | 16   | 16         | 0 (2^64)               | 64             |
//! | 32   | 12         | 2^60                   | 60             |
//! | 36   | 12         | 36^12                  | -              |

use serde::Serialize;

use crate::contracts::check_base;

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;

/// Largest supported radix (`0-9` plus `a-z`).
pub const MAX_BASE: u32 = 36;

const TABLE_LEN: usize = MAX_BASE as usize + 1;

// ============================================================================
// COMPILE-TIME TABLES
// ============================================================================

/// Counts how often `base` can be multiplied into 1 before exceeding 2^64.
const fn max_digits_naive(base: u32) -> u8 {
    let limit: u128 = 1 << 64;
    let mut x: u128 = 1;
    let mut digits = 0u8;
    while x <= limit {
        x *= base as u128;
        digits += 1;
    }
    digits - 1
}

const fn build_max_digits() -> [u8; TABLE_LEN] {
    let mut table = [0u8; TABLE_LEN];
    let mut base = MIN_BASE;
    while base <= MAX_BASE {
        table[base as usize] = max_digits_naive(base);
        base += 1;
    }
    table
}

const fn build_max_power() -> [u64; TABLE_LEN] {
    let mut table = [0u64; TABLE_LEN];
    let mut base = MIN_BASE;
    while base <= MAX_BASE {
        let mut power: u128 = 1;
        let mut i = 0;
        while i < MAX_DIGITS[base as usize] {
            power *= base as u128;
            i += 1;
        }
        // 2^64 truncates to the zero sentinel
        table[base as usize] = power as u64;
        base += 1;
    }
    table
}

pub(crate) const MAX_DIGITS: [u8; TABLE_LEN] = build_max_digits();
pub(crate) const MAX_POWER: [u64; TABLE_LEN] = build_max_power();

// ============================================================================
// LOOKUPS
// ============================================================================

/// Number of base-`base` digits that always fit in a `u64`.
///
/// # Panics
/// Panics if `base` is outside `2..=36`.
#[inline]
pub fn max_digits(base: u32) -> usize {
    check_base(base);
    MAX_DIGITS[base as usize] as usize
}

/// Greatest power of `base` representable in a `u64`, or 0 when the next
/// power is exactly 2^64.
///
/// # Panics
/// Panics if `base` is outside `2..=36`.
#[inline]
pub fn max_power(base: u32) -> u64 {
    check_base(base);
    MAX_POWER[base as usize]
}

/// True for bases 2, 4, 8, 16 and 32.
#[inline]
pub const fn is_power_of_two(base: u32) -> bool {
    base.is_power_of_two()
}

/// Bits covered by one chunk of a power-of-two base.
///
/// `trailing_zeros(max_power)`, which is 64 for the zero sentinel.
/// Returns `None` for other bases, whose chunks do not align to bits.
#[inline]
pub fn bits_per_chunk(base: u32) -> Option<u32> {
    check_base(base);
    is_power_of_two(base).then(|| MAX_POWER[base as usize].trailing_zeros())
}

/// One row of the metadata table, for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadixInfo {
    pub base: u32,
    pub max_digits: usize,
    /// `None` stands for exactly 2^64.
    pub max_power: Option<u64>,
    pub bits_per_chunk: Option<u32>,
    /// Leading bits handled before the first full chunk (power-of-two bases).
    pub head_bits: Option<u32>,
}

impl RadixInfo {
    pub fn new(base: u32) -> Self {
        let power = max_power(base);
        let bits = bits_per_chunk(base);
        Self {
            base,
            max_digits: max_digits(base),
            max_power: (power != 0).then_some(power),
            bits_per_chunk: bits,
            head_bits: bits.map(|b| 128 % b),
        }
    }
}

/// Metadata rows for every supported base, in order.
pub fn all_radixes() -> impl Iterator<Item = RadixInfo> {
    (MIN_BASE..=MAX_BASE).map(RadixInfo::new)
}
