//! Bit-precise widths: formatting goes through the carrier losslessly, and
//! parsing rejects exactly the carrier values that do not fit N bits.

use proptest::prelude::*;
use radix128::{fits_signed, fits_unsigned, parse_exact, radix, IntN, ParseError, UintN};

use super::base_strategy;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: UintN<N> values format like their u128 value.
    #[test]
    fn prop_uint_formats_like_u128(raw: u128, base in base_strategy()) {
        let v = UintN::<100>::wrapping_new(raw);
        prop_assert_eq!(radix(v, base).to_string(), radix(v.get(), base).to_string());
        let v = UintN::<20>::wrapping_new(raw);
        prop_assert_eq!(radix(v, base).to_string(), radix(v.get(), base).to_string());
    }

    /// Property: IntN<N> values format like their i128 value.
    #[test]
    fn prop_int_formats_like_i128(raw: i128, base in base_strategy()) {
        let v = IntN::<100>::wrapping_new(raw);
        prop_assert_eq!(radix(v, base).to_string(), radix(v.get(), base).to_string());
        let v = IntN::<13>::wrapping_new(raw);
        prop_assert_eq!(radix(v, base).to_string(), radix(v.get(), base).to_string());
    }

    /// Property: parsing as UintN<N> succeeds exactly when the value fits.
    #[test]
    fn prop_uint_narrowing(raw: u128, shift in 0u32..128, base in base_strategy()) {
        let value = raw >> shift;
        let text = radix(value, base).to_string();
        let parsed = parse_exact::<UintN<100>>(&text, base);
        if fits_unsigned(value, 100) {
            prop_assert_eq!(parsed.map(UintN::get), Ok(value));
        } else {
            prop_assert_eq!(parsed, Err(ParseError::out_of_range(text.len())));
        }
    }

    /// Property: parsing as IntN<N> succeeds exactly when the value fits.
    #[test]
    fn prop_int_narrowing(raw: i128, shift in 0u32..128, base in base_strategy()) {
        let value = raw >> shift;
        let text = radix(value, base).to_string();

        let parsed = parse_exact::<IntN<70>>(&text, base);
        if fits_signed(value, 70) {
            prop_assert_eq!(parsed.map(IntN::get), Ok(value));
        } else {
            prop_assert_eq!(parsed, Err(ParseError::out_of_range(text.len())));
        }

        // 24 bits uses the 32-bit carrier, which can overflow on its own
        let parsed = parse_exact::<IntN<24>>(&text, base);
        if fits_signed(value, 24) {
            prop_assert_eq!(parsed.map(IntN::get), Ok(value));
        } else {
            prop_assert_eq!(parsed, Err(ParseError::out_of_range(text.len())));
        }
    }

    /// Property: the width checks agree with the typed constructors.
    #[test]
    fn prop_fits_matches_new(u: u128, i: i128) {
        prop_assert_eq!(fits_unsigned(u, 77), UintN::<77>::new(u).is_some());
        prop_assert_eq!(fits_signed(i, 77), IntN::<77>::new(i).is_some());
        prop_assert_eq!(fits_unsigned(u, 5), UintN::<5>::new(u).is_some());
        prop_assert_eq!(fits_signed(i, 5), IntN::<5>::new(i).is_some());
    }
}
