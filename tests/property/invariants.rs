//! Output and error invariants: minimality, lowercase, buffer sizing, chunk
//! padding and overflow reporting.

use super::{base_strategy, digits_strategy, wide_i128_strategy, wide_u128_strategy};
use proptest::prelude::*;
use radix128::{
    format_i128, format_u128, max_digits, parse_i128, parse_u128, FormatError, ParseErrorKind,
    MAX_FORMATTED_LEN,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: output has no leading zero unless it is exactly "0".
    #[test]
    fn prop_output_is_minimal(value in wide_i128_strategy(), base in base_strategy()) {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let n = format_i128(&mut buf, value, base).unwrap();
        let digits = buf[..n].strip_prefix(b"-").unwrap_or(&buf[..n]);
        prop_assert!(!digits.is_empty());
        prop_assert!(digits == b"0" || digits[0] != b'0', "{:?}", &buf[..n]);
        prop_assert_eq!(digits == b"0", value == 0);
    }

    /// Property: output uses only lowercase digits valid in the base.
    #[test]
    fn prop_output_is_lowercase_and_in_base(value in wide_u128_strategy(), base in base_strategy()) {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let n = format_u128(&mut buf, value, base).unwrap();
        for &c in &buf[..n] {
            prop_assert!(!c.is_ascii_uppercase());
            prop_assert!(radix128::scan::digit_in_base(c, base).is_some());
        }
    }

    /// Property: every buffer shorter than the output fails, and the exact
    /// length succeeds.
    #[test]
    fn prop_buffer_exactness(value in wide_i128_strategy(), base in base_strategy()) {
        let mut full = [0u8; MAX_FORMATTED_LEN];
        let needed = format_i128(&mut full, value, base).unwrap();

        let mut exact = vec![0u8; needed];
        prop_assert_eq!(format_i128(&mut exact, value, base), Ok(needed));
        prop_assert_eq!(&exact[..], &full[..needed]);

        let mut short = vec![0u8; needed - 1];
        prop_assert_eq!(format_i128(&mut short, value, base), Err(FormatError::ValueTooLarge));
    }

    /// Property: an all-zero low chunk is still written as max_digits zeros.
    #[test]
    fn prop_low_chunk_is_padded(
        high in 1u64..=u64::MAX,
        base in base_strategy().prop_filter("non power of two", |b| !b.is_power_of_two()),
    ) {
        // Multiples of max_power end in one all-zero chunk
        let power = radix128::max_power(base) as u128;
        if let Some(value) = (high as u128).checked_mul(power) {
            let mut buf = [0u8; MAX_FORMATTED_LEN];
            let n = format_u128(&mut buf, value, base).unwrap();
            let width = max_digits(base);
            prop_assert!(n > width);
            prop_assert!(buf[n - width..n].iter().all(|&c| c == b'0'));
        }
    }

    /// Property: a nonzero digit followed by enough zeros always overflows,
    /// and the consumed length covers the whole run.
    #[test]
    fn prop_overflow_consumes_run(
        base in base_strategy(),
        lead in 1u32..36,
        tail in "[ .;]{0,4}",
    ) {
        let lead = lead % (base - 1) + 1;
        let digits = format!(
            "{}{}",
            radix128::DIGITS[lead as usize] as char,
            "0".repeat(128)
        );
        let text = format!("{}{}", digits, tail);

        let err = parse_u128(text.as_bytes(), base).unwrap_err();
        prop_assert_eq!(err.kind(), ParseErrorKind::ResultOutOfRange);
        prop_assert_eq!(err.consumed(), digits.len());

        let negative = format!("-{}", text);
        let err = parse_i128(negative.as_bytes(), base).unwrap_err();
        prop_assert_eq!(err.kind(), ParseErrorKind::ResultOutOfRange);
        prop_assert_eq!(err.consumed(), digits.len() + 1);
    }

    /// Property: leading zeros never change the value.
    #[test]
    fn prop_leading_zeros_ignored(
        value in wide_u128_strategy(),
        base in base_strategy(),
        zeros in 0usize..300,
    ) {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let n = format_u128(&mut buf, value, base).unwrap();
        let mut text = vec![b'0'; zeros];
        text.extend_from_slice(&buf[..n]);
        prop_assert_eq!(parse_u128(&text, base), Ok((value, zeros + n)));
    }

    /// Property: random digit strings either parse or overflow, never
    /// reporting malformed input.
    #[test]
    fn prop_digit_strings_are_never_malformed(
        (base, digits) in base_strategy().prop_flat_map(|b| (Just(b), digits_strategy(b, 1..60))),
    ) {
        match parse_u128(digits.as_bytes(), base) {
            Ok((_, n)) => prop_assert_eq!(n, digits.len()),
            Err(e) => {
                prop_assert_eq!(e.kind(), ParseErrorKind::ResultOutOfRange);
                prop_assert_eq!(e.consumed(), digits.len());
            }
        }
    }

    /// Property: input that does not start with a digit consumes nothing.
    #[test]
    fn prop_non_digit_start_is_invalid(base in base_strategy(), text in "[+ _.!?,][0-9a-z]{0,10}") {
        let err = parse_u128(text.as_bytes(), base).unwrap_err();
        prop_assert_eq!(err.kind(), ParseErrorKind::InvalidArgument);
        prop_assert_eq!(err.consumed(), 0);
        let err = parse_i128(text.as_bytes(), base).unwrap_err();
        prop_assert_eq!(err.consumed(), 0);
    }
}
