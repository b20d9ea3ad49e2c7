// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for unsigned parsing of arbitrary bytes.
//!
//! The parser sees untrusted text. It must never panic, must agree with the
//! one-digit-at-a-time reference parser, and must report the consumed length
//! by the documented convention whether the value fits or not.

#![no_main]

use libfuzzer_sys::fuzz_target;
use radix128::testing::reference_parse_u128;
use radix128::{digit_run_len, parse_u128, ParseErrorKind};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, text)) = data.split_first() else {
        return;
    };
    let base = 2 + u32::from(selector) % 35;
    let run = digit_run_len(text, base);

    match parse_u128(text, base) {
        Ok((value, consumed)) => {
            assert_eq!(consumed, run, "success must consume the digit run");
            let digits = std::str::from_utf8(&text[..run]).expect("digits are ASCII");
            assert_eq!(Some(value), reference_parse_u128(digits, base));
        }
        Err(e) => match e.kind() {
            ParseErrorKind::InvalidArgument => {
                assert_eq!(run, 0);
                assert_eq!(e.consumed(), 0);
            }
            ParseErrorKind::ResultOutOfRange => {
                assert_eq!(e.consumed(), run);
                let digits = std::str::from_utf8(&text[..run]).expect("digits are ASCII");
                assert_eq!(reference_parse_u128(digits, base), None);
            }
        },
    }
});
