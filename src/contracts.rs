// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the codec.
//!
//! Two tiers:
//!
//! 1. **Preconditions** (`check_base`) are hard `assert!`s. A base outside
//!    `2..=36` is a caller bug, and continuing would index past the tables or
//!    loop forever. These stay on in release builds.
//! 2. **Output invariants** (`check_minimal`, `check_chunk_fits`) use
//!    `debug_assert!`: zero-cost in release, loud in tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function    | Property                                              |
//! |----------------------|-------------------------------------------------------|
//! | `check_base`         | `2 <= base <= 36`                                     |
//! | `check_minimal`      | No superfluous leading zero, `"0"` only for zero      |
//! | `check_chunk_fits`   | A chunk never needs more than `max_digits` digits     |

use crate::radix::{MAX_BASE, MAX_DIGITS, MAX_POWER, MIN_BASE};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The tables are evaluated at compile time; if any known value drifts, the
/// crate won't build.
const _: () = {
    assert!(MAX_DIGITS[2] == 64);
    assert!(MAX_DIGITS[8] == 21);
    assert!(MAX_DIGITS[10] == 19);
    assert!(MAX_DIGITS[16] == 16);

    assert!(MAX_POWER[2] == 0);
    assert!(MAX_POWER[8] == 0x8000_0000_0000_0000);
    assert!(MAX_POWER[10] == 10_000_000_000_000_000_000);
    assert!(MAX_POWER[16] == 0);

    // Only power-of-two bases may use the sentinel.
    let mut base = MIN_BASE;
    while base <= MAX_BASE {
        assert!(MAX_POWER[base as usize] != 0 || base.is_power_of_two());
        base += 1;
    }
};

// ============================================================================
// PRECONDITIONS
// ============================================================================

/// Check that `base` is a supported radix.
///
/// # Panics
/// Always panics (release builds included) if `base` is outside `2..=36`.
#[inline]
#[track_caller]
pub fn check_base(base: u32) {
    assert!(
        (MIN_BASE..=MAX_BASE).contains(&base),
        "Contract violation: base {} outside {}..={}",
        base,
        MIN_BASE,
        MAX_BASE
    );
}

// ============================================================================
// OUTPUT INVARIANTS
// ============================================================================

/// Check that formatted output has no superfluous leading zero.
///
/// # Panics (debug builds only)
/// Panics if `digits` (after an optional `-`) is empty, or starts with `0`
/// while being longer than one digit, or is `-0`.
#[inline]
pub fn check_minimal(text: &[u8]) {
    let digits = text.strip_prefix(b"-").unwrap_or(text);
    debug_assert!(
        !digits.is_empty(),
        "Contract violation: formatted output has no digits"
    );
    debug_assert!(
        digits.len() == 1 || digits[0] != b'0',
        "Contract violation: superfluous leading zero in {:?}",
        String::from_utf8_lossy(text)
    );
    debug_assert!(
        text.len() == digits.len() || digits != b"0",
        "Contract violation: negative zero"
    );
}

/// Check that a chunk's natural digit count leaves room for its padding.
///
/// Padding fills `max_digits(base) - natural_len` zeros, so a chunk wider than
/// `max_digits` means the split into words went wrong.
///
/// # Panics (debug builds only)
/// Panics if `natural_len > max_digits(base)`.
#[inline]
pub fn check_chunk_fits(natural_len: usize, base: u32) {
    debug_assert!(
        natural_len <= MAX_DIGITS[base as usize] as usize,
        "Contract violation: chunk of {} digits overflows base {} chunk width",
        natural_len,
        base
    );
}
