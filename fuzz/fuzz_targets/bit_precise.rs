// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bit-precise narrowing.
//!
//! Parses arbitrary text at a few widths that straddle carrier boundaries
//! and checks the narrowing verdict against the 128-bit parse.

#![no_main]

use libfuzzer_sys::fuzz_target;
use radix128::{fits_signed, fits_unsigned, parse_i128, parse_u128, IntN, RadixInt, UintN};

fn check_unsigned<const N: u32>(text: &[u8], base: u32) {
    let wide = parse_u128(text, base);
    let narrow = UintN::<N>::read_radix(text, base);
    match (wide, narrow) {
        (Ok((v, n)), Ok((u, m))) => {
            assert!(fits_unsigned(v, N));
            assert_eq!((v, n), (u.get(), m));
        }
        (Ok((v, n)), Err(e)) => {
            assert!(!fits_unsigned(v, N));
            assert!(e.is_out_of_range());
            assert_eq!(e.consumed(), n);
        }
        (Err(e), Err(f)) => {
            assert_eq!(e.kind(), f.kind());
            assert_eq!(e.consumed(), f.consumed());
        }
        (Err(e), Ok(_)) => panic!("u{} accepted what u128 rejected: {}", N, e),
    }
}

fn check_signed<const N: u32>(text: &[u8], base: u32) {
    let wide = parse_i128(text, base);
    let narrow = IntN::<N>::read_radix(text, base);
    match (wide, narrow) {
        (Ok((v, n)), Ok((u, m))) => {
            assert!(fits_signed(v, N));
            assert_eq!((v, n), (u.get(), m));
        }
        (Ok((v, n)), Err(e)) => {
            assert!(!fits_signed(v, N));
            assert!(e.is_out_of_range());
            assert_eq!(e.consumed(), n);
        }
        (Err(e), Err(f)) => {
            assert_eq!(e.kind(), f.kind());
            assert_eq!(e.consumed(), f.consumed());
        }
        (Err(e), Ok(_)) => panic!("i{} accepted what i128 rejected: {}", N, e),
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, text)) = data.split_first() else {
        return;
    };
    let base = 2 + u32::from(selector) % 35;

    check_unsigned::<7>(text, base);
    check_unsigned::<33>(text, base);
    check_unsigned::<100>(text, base);
    check_signed::<1>(text, base);
    check_signed::<64>(text, base);
    check_signed::<65>(text, base);
});
