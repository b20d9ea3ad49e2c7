// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and fuzz targets.
//!
//! This module is always compiled but hidden from documentation. The
//! reference codec here is deliberately naive: one digit at a time, repeated
//! division on the way out, checked multiply-add on the way in. It shares no
//! code with the chunked codec, so it can serve as an oracle.

#![doc(hidden)]

use crate::convert::{RadixInt, MAX_FORMATTED_LEN};
use crate::error::{FormatError, ParseError};
use crate::scan::{digit_in_base, DIGITS};

/// Format `x` in `base` one digit at a time.
pub fn reference_format_u128(mut x: u128, base: u32) -> String {
    if x == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while x > 0 {
        digits.push(DIGITS[(x % base as u128) as usize]);
        x /= base as u128;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Format `x` in `base` one digit at a time, with a leading `-` if negative.
pub fn reference_format_i128(x: i128, base: u32) -> String {
    let magnitude = reference_format_u128(x.unsigned_abs(), base);
    if x < 0 {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Parse all of `text` as an unsigned value, or `None` if it is not entirely
/// digits of `base` or does not fit.
pub fn reference_parse_u128(text: &str, base: u32) -> Option<u128> {
    if text.is_empty() {
        return None;
    }
    text.bytes().try_fold(0u128, |acc, c| {
        let d = digit_in_base(c, base)?;
        acc.checked_mul(base as u128)?.checked_add(d as u128)
    })
}

/// Format any `RadixInt` into an owned string through a full-size buffer.
pub fn format_to_string<T: RadixInt>(value: T, base: u32) -> Result<String, FormatError> {
    let mut buf = [0u8; MAX_FORMATTED_LEN];
    let written = value.write_radix(&mut buf, base)?;
    Ok(String::from_utf8_lossy(&buf[..written]).into_owned())
}

/// Parse `text` and return the value with its consumed length.
pub fn parse_str<T: RadixInt>(text: &str, base: u32) -> Result<(T, usize), ParseError> {
    T::read_radix(text.as_bytes(), base)
}

/// Values around every chunk boundary of `base`: powers of `max_power` and
/// their neighbours, plus the type extremes.
pub fn boundary_values(base: u32) -> Vec<u128> {
    let mut values = vec![0, 1, u64::MAX as u128, u64::MAX as u128 + 1, u128::MAX];
    let mut power = 1u128;
    while let Some(next) = power.checked_mul(base as u128) {
        power = next;
        values.extend([power - 1, power, power.saturating_add(1)]);
    }
    values
}
