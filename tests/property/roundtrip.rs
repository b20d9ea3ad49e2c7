//! Round-trip properties: format then parse returns the value and consumes
//! exactly what was written, for every base.

use super::{base_strategy, wide_i128_strategy, wide_u128_strategy};
use proptest::prelude::*;
use radix128::{format_i128, format_u128, parse_i128, parse_u128, MAX_FORMATTED_LEN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Property: u128 format/parse round-trips in every base.
    #[test]
    fn prop_u128_roundtrip(value in wide_u128_strategy(), base in base_strategy()) {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let n = format_u128(&mut buf, value, base).unwrap();
        prop_assert_eq!(parse_u128(&buf[..n], base), Ok((value, n)));
    }

    /// Property: i128 format/parse round-trips in every base.
    #[test]
    fn prop_i128_roundtrip(value in wide_i128_strategy(), base in base_strategy()) {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let n = format_i128(&mut buf, value, base).unwrap();
        prop_assert_eq!(parse_i128(&buf[..n], base), Ok((value, n)));
    }

    /// Property: parsing stops at trailing input without changing the value.
    #[test]
    fn prop_trailing_input_ignored(
        value in wide_i128_strategy(),
        base in base_strategy(),
        tail in "[^0-9a-zA-Z][ -~]{0,8}",
    ) {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let n = format_i128(&mut buf, value, base).unwrap();
        let mut text = buf[..n].to_vec();
        text.extend_from_slice(tail.as_bytes());
        prop_assert_eq!(parse_i128(&text, base), Ok((value, n)));
    }

    /// Property: a non-negative i128 formats exactly like the same u128.
    #[test]
    fn prop_signed_matches_unsigned_for_non_negative(value in 0..=i128::MAX, base in base_strategy()) {
        let mut signed = [0u8; MAX_FORMATTED_LEN];
        let mut unsigned = [0u8; MAX_FORMATTED_LEN];
        let a = format_i128(&mut signed, value, base).unwrap();
        let b = format_u128(&mut unsigned, value as u128, base).unwrap();
        prop_assert_eq!(&signed[..a], &unsigned[..b]);
    }

    /// Property: a negative value is '-' followed by its magnitude.
    #[test]
    fn prop_negative_is_sign_plus_magnitude(value in i128::MIN..0, base in base_strategy()) {
        let mut signed = [0u8; MAX_FORMATTED_LEN];
        let mut magnitude = [0u8; MAX_FORMATTED_LEN];
        let a = format_i128(&mut signed, value, base).unwrap();
        let b = format_u128(&mut magnitude, value.unsigned_abs(), base).unwrap();
        prop_assert_eq!(signed[0], b'-');
        prop_assert_eq!(&signed[1..a], &magnitude[..b]);
    }
}
