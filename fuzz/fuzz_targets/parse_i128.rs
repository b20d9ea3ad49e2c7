// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for signed parsing.
//!
//! Exercises the boundary between the native i64 fast path and the wide
//! path, and the asymmetric i128 range (|MIN| = MAX + 1).

#![no_main]

use libfuzzer_sys::fuzz_target;
use radix128::testing::reference_parse_u128;
use radix128::{digit_run_len, parse_i128, ParseErrorKind};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, text)) = data.split_first() else {
        return;
    };
    let base = 2 + u32::from(selector) % 35;

    let (negative, body) = match text.strip_prefix(b"-") {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let run = digit_run_len(body, base);
    let sign_len = usize::from(negative);

    // Oracle: magnitude through the reference parser, then the sign
    let expected = std::str::from_utf8(&body[..run])
        .ok()
        .and_then(|digits| reference_parse_u128(digits, base))
        .and_then(|magnitude| {
            if negative {
                0i128.checked_sub_unsigned(magnitude)
            } else {
                i128::try_from(magnitude).ok()
            }
        });

    match parse_i128(text, base) {
        Ok((value, consumed)) => {
            assert_eq!(consumed, run + sign_len);
            assert_eq!(Some(value), expected);
        }
        Err(e) if e.kind() == ParseErrorKind::InvalidArgument => {
            assert_eq!(run, 0);
            assert_eq!(e.consumed(), 0);
        }
        Err(e) => {
            assert!(run > 0);
            assert_eq!(e.consumed(), run + sign_len);
            assert_eq!(expected, None);
        }
    }
});
