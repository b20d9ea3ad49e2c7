// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for radix128 primitives.
//!
//! This standalone crate extracts the per-base chunking tables, the digit
//! classifier and the multiply-accumulate step, and proves the facts the
//! codec relies on for every base and every input byte.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Chunk fit**: `base^max_digits <= 2^64 < base^(max_digits + 1)`
//! 2. **Sentinel**: `max_power == 0` exactly for bases 2, 4 and 16
//! 3. **Head alignment**: power-of-two bases split 128 bits into a head plus
//!    whole chunks
//! 4. **Digit classifier**: accepted bytes map back to the lowercase alphabet
//! 5. **Multiply-accumulate**: `None` exactly when the exact result exceeds
//!    128 bits

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// ============================================================================
// TABLES (copied from src/radix.rs)
// ============================================================================

pub const fn max_digits(base: u32) -> u32 {
    let limit: u128 = 1 << 64;
    let mut x: u128 = 1;
    let mut digits = 0;
    while x <= limit {
        x *= base as u128;
        digits += 1;
    }
    digits - 1
}

pub const fn max_power(base: u32) -> u64 {
    let mut power: u128 = 1;
    let mut i = 0;
    while i < max_digits(base) {
        power *= base as u128;
        i += 1;
    }
    power as u64
}

// ============================================================================
// SCANNER (copied from src/scan.rs)
// ============================================================================

pub const fn digit_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'a'..=b'z' => Some((c - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((c - b'A') as u32 + 10),
        _ => None,
    }
}

pub const fn digit_in_base(c: u8, base: u32) -> Option<u32> {
    match digit_value(c) {
        Some(v) if v < base => Some(v),
        _ => None,
    }
}

// ============================================================================
// ARITHMETIC (copied from src/arith.rs)
// ============================================================================

pub fn mul_add(acc: u128, factor: u128, digits: u64) -> Option<u128> {
    let (summand, mul_overflowed) = factor.overflowing_mul(digits as u128);
    if mul_overflowed {
        return None;
    }
    let (sum, add_overflowed) = acc.overflowing_add(summand);
    (!add_overflowed).then_some(sum)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_base() -> u32 {
        kani::any_where(|&b: &u32| (MIN_BASE..=MAX_BASE).contains(&b))
    }

    /// Verify a full chunk fits a u64 and one more digit would not.
    #[kani::proof]
    #[kani::unwind(66)] // base 2 needs 65 multiplications
    fn verify_chunk_fits_word() {
        let base = any_base();
        let d = max_digits(base);
        let mut power: u128 = 1;
        for _ in 0..d {
            power *= base as u128;
        }
        kani::assert(power <= 1u128 << 64, "base^max_digits must fit 2^64");
        kani::assert(
            power * base as u128 > 1u128 << 64,
            "max_digits must be maximal",
        );
        kani::assert(
            power as u64 == max_power(base),
            "max_power must be base^max_digits truncated to 64 bits",
        );
    }

    /// Verify the zero sentinel appears exactly for bases 2, 4 and 16.
    #[kani::proof]
    #[kani::unwind(66)]
    fn verify_sentinel_bases() {
        let base = any_base();
        let is_sentinel = max_power(base) == 0;
        kani::assert(
            is_sentinel == matches!(base, 2 | 4 | 16),
            "only bases whose chunk is exactly 64 bits use the sentinel",
        );
    }

    /// Verify power-of-two bases cover 128 bits with a head plus whole chunks.
    #[kani::proof]
    #[kani::unwind(66)]
    fn verify_head_alignment() {
        let base = any_base();
        kani::assume(base.is_power_of_two());
        let power = max_power(base);
        let bits = if power == 0 { 64 } else { power.trailing_zeros() };
        let head = 128 % bits;
        kani::assert((128 - head) % bits == 0, "chunks must tile the low bits");
        kani::assert(head < bits, "head must be narrower than a chunk");
        kani::assert(
            bits == max_digits(base) * base.trailing_zeros(),
            "a chunk must hold exactly max_digits digits",
        );
    }

    /// Verify every accepted byte is a digit of the alphabet, case folded.
    #[kani::proof]
    fn verify_digit_classifier() {
        let c: u8 = kani::any();
        let base = any_base();
        if let Some(v) = digit_in_base(c, base) {
            kani::assert(v < base, "digit value must be below the base");
            kani::assert(
                DIGITS[v as usize] == c.to_ascii_lowercase(),
                "digit must map back to its lowercase character",
            );
        }
        if c == b'-' || c == b'+' || c.is_ascii_whitespace() {
            kani::assert(digit_value(c).is_none(), "signs and spaces are not digits");
        }
    }

    /// Verify mul_add never panics and reports overflow exactly.
    #[kani::proof]
    fn verify_mul_add_exact() {
        let acc: u128 = kani::any();
        let factor: u128 = kani::any();
        let digits: u64 = kani::any();
        let expected = factor
            .checked_mul(digits as u128)
            .and_then(|p| p.checked_add(acc));
        kani::assert(mul_add(acc, factor, digits) == expected, "mul_add must be exact");
    }
}
