// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for format/parse round-trips.
//!
//! Any value, any base, any buffer size: formatting either fits and parses
//! back exactly, or fails only because the buffer is genuinely too short.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use radix128::testing::reference_format_i128;
use radix128::{format_i128, format_u128, parse_i128, parse_u128, FormatError};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    value: u128,
    signed: bool,
    base_selector: u8,
    buffer_len: u8,
}

fuzz_target!(|input: RoundtripInput| {
    let base = 2 + u32::from(input.base_selector) % 35;
    let mut buf = vec![0u8; usize::from(input.buffer_len).min(129)];

    let expected = if input.signed {
        reference_format_i128(input.value as i128, base)
    } else {
        radix128::testing::reference_format_u128(input.value, base)
    };

    let result = if input.signed {
        format_i128(&mut buf, input.value as i128, base)
    } else {
        format_u128(&mut buf, input.value, base)
    };

    match result {
        Ok(n) => {
            assert_eq!(&buf[..n], expected.as_bytes());
            if input.signed {
                assert_eq!(parse_i128(&buf[..n], base), Ok((input.value as i128, n)));
            } else {
                assert_eq!(parse_u128(&buf[..n], base), Ok((input.value, n)));
            }
        }
        Err(FormatError::ValueTooLarge) => {
            assert!(buf.len() < expected.len(), "buffer of {} was enough", buf.len());
        }
    }
});
