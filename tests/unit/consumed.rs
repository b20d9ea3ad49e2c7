//! Consumed-length reporting for success, malformed input and overflow.

use crate::common::zero_padded;
use radix128::{parse_exact, parse_i128, parse_u128, ParseError, ParseErrorKind};

#[test]
fn test_success_stops_at_first_non_digit() {
    assert_eq!(parse_u128(b"123abc", 10), Ok((123, 3)));
    assert_eq!(parse_u128(b"123abc", 16), Ok((0x123abc, 6)));
    assert_eq!(parse_i128(b"-42 ", 10), Ok((-42, 3)));
    assert_eq!(parse_u128(b"0x10", 16), Ok((0, 1)));
}

#[test]
fn test_signs() {
    assert_eq!(parse_u128(b"+1", 10), Err(ParseError::invalid()));
    assert_eq!(parse_i128(b"+1", 10), Err(ParseError::invalid()));
    assert_eq!(parse_u128(b"-1", 10), Err(ParseError::invalid()));
    assert_eq!(parse_i128(b"--1", 10), Err(ParseError::invalid()));
    assert_eq!(parse_i128(b"-0", 10), Ok((0, 2)));
}

#[test]
fn test_overflow_consumes_whole_run() {
    let long = "9".repeat(50);
    let err = parse_u128(format!("{}tail", long).as_bytes(), 10).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::ResultOutOfRange);
    assert_eq!(err.consumed(), 50);

    let err = parse_i128(format!("-{}", long).as_bytes(), 10).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::ResultOutOfRange);
    assert_eq!(err.consumed(), 51);
}

#[test]
fn test_leading_zeros_do_not_overflow() {
    for zeros in [1, 19, 20, 57, 100, 500] {
        let text = zero_padded(zeros, "340282366920938463463374607431768211455");
        assert_eq!(
            parse_u128(text.as_bytes(), 10),
            Ok((u128::MAX, text.len())),
            "{} zeros",
            zeros
        );
        let text = format!("-{}", zero_padded(zeros, "170141183460469231731687303715884105728"));
        assert_eq!(
            parse_i128(text.as_bytes(), 10),
            Ok((i128::MIN, text.len())),
            "{} zeros",
            zeros
        );
    }
}

#[test]
fn test_leading_zeros_power_of_two_bases() {
    for base in [2, 4, 8, 16, 32] {
        let text = format!("{}1", "0".repeat(400));
        assert_eq!(parse_u128(text.as_bytes(), base), Ok((1, 401)), "base {}", base);
    }
}

#[test]
fn test_exact_parse_reports_trailing_offset() {
    let err = parse_exact::<i128>("-12_000", 10).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::InvalidArgument);
    assert_eq!(err.consumed(), 3);
    assert!(parse_exact::<u128>("", 10).is_err());
}
