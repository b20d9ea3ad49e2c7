//! Primitive and bit-precise widths through the `RadixInt` surface.

use crate::common::{format_to_string, parse_str};
use radix128::{parse_exact, IntN, ParseError, RadixInt, UintN};

#[test]
fn test_primitive_extremes() {
    assert_eq!(format_to_string(u8::MAX, 2).unwrap(), "11111111");
    assert_eq!(format_to_string(i8::MIN, 2).unwrap(), "-10000000");
    assert_eq!(format_to_string(u32::MAX, 36).unwrap(), "1z141z3");
    assert_eq!(format_to_string(i64::MIN, 16).unwrap(), "-8000000000000000");
    assert_eq!(format_to_string(u64::MAX, 10).unwrap(), "18446744073709551615");
}

#[test]
fn test_primitive_overflow_keeps_consumed() {
    assert_eq!(parse_str::<u8>("256", 10), Err(ParseError::out_of_range(3)));
    assert_eq!(parse_str::<i8>("-129", 10), Err(ParseError::out_of_range(4)));
    assert_eq!(parse_str::<u64>("18446744073709551616", 10), Err(ParseError::out_of_range(20)));
    assert_eq!(parse_str::<i32>("7fffffff", 16), Ok((i32::MAX, 8)));
}

#[test]
fn test_bit_precise_limits() {
    assert_eq!(format_to_string(UintN::<100>::MAX, 16).unwrap(), "f".repeat(25));
    assert_eq!(format_to_string(IntN::<65>::MIN, 10).unwrap(), "-18446744073709551616");
    assert_eq!(format_to_string(IntN::<65>::MAX, 10).unwrap(), "18446744073709551615");
    assert_eq!(format_to_string(UintN::<3>::MAX, 2).unwrap(), "111");
}

#[test]
fn test_bit_precise_narrowing() {
    assert_eq!(
        parse_exact::<UintN<65>>("1ffffffffffffffff", 16),
        Ok(UintN::<65>::MAX)
    );
    assert_eq!(
        parse_exact::<UintN<65>>("20000000000000000", 16),
        Err(ParseError::out_of_range(17))
    );
    assert_eq!(
        parse_exact::<IntN<65>>("-18446744073709551617", 10),
        Err(ParseError::out_of_range(21))
    );
    assert_eq!(parse_str::<UintN<12>>("fff!", 16), Ok((UintN::<12>::MAX, 3)));
    assert_eq!(parse_str::<UintN<12>>("1000", 16), Err(ParseError::out_of_range(4)));
}

#[test]
fn test_bit_precise_round_trip_every_width() {
    fn check<const N: u32>() {
        for value in [UintN::<N>::MIN, UintN::<N>::MAX] {
            let text = format_to_string(value, 7).unwrap();
            assert_eq!(parse_exact::<UintN<N>>(&text, 7), Ok(value), "u{}", N);
        }
        for value in [IntN::<N>::MIN, IntN::<N>::MAX] {
            let text = format_to_string(value, 7).unwrap();
            assert_eq!(parse_exact::<IntN<N>>(&text, 7), Ok(value), "i{}", N);
        }
        assert_eq!(<UintN<N> as RadixInt>::BITS, N);
    }
    check::<1>();
    check::<7>();
    check::<8>();
    check::<9>();
    check::<31>();
    check::<33>();
    check::<63>();
    check::<64>();
    check::<65>();
    check::<127>();
    check::<128>();
}
