// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Overflow-checked arithmetic on the 128-bit word.
//!
//! Both functions return the wrapped result together with a flag that is set
//! exactly when the mathematical result does not fit. The flag comes straight
//! from the hardware carry/overflow path (`overflowing_*`), so there is no
//! comparison trick to get wrong at the edges (multiplying by zero, adding to
//! `u128::MAX`).

/// Computes `x + y`, returning the wrapped sum and whether it overflowed.
#[inline]
pub const fn add_overflow(x: u128, y: u128) -> (u128, bool) {
    x.overflowing_add(y)
}

/// Computes `x * y`, returning the wrapped product and whether it overflowed.
#[inline]
pub const fn mul_overflow(x: u128, y: u128) -> (u128, bool) {
    x.overflowing_mul(y)
}

/// Multiply-accumulate used by the parser: `acc + factor * digits`.
///
/// Returns `None` if either step overflows.
#[inline]
pub(crate) fn mul_add(acc: u128, factor: u128, digits: u64) -> Option<u128> {
    let (summand, mul_overflowed) = mul_overflow(factor, digits as u128);
    if mul_overflowed {
        return None;
    }
    let (sum, add_overflowed) = add_overflow(acc, summand);
    (!add_overflowed).then_some(sum)
}
