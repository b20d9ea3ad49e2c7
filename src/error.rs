// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for formatting and parsing.
//!
//! There are exactly three things that can go wrong in the codec, and they
//! never overlap:
//!
//! | Error                            | Raised by | Consumed bytes reported        |
//! |----------------------------------|-----------|--------------------------------|
//! | `FormatError::ValueTooLarge`     | format    | n/a                            |
//! | `ParseErrorKind::InvalidArgument`| parse     | 0 (`parse_exact`: first extra) |
//! | `ParseErrorKind::ResultOutOfRange`| parse    | end of the full digit run      |
//!
//! A range failure still tells you how much of the input looked like a number.
//! "Was it numeric" and "did it fit" are independent questions.
//!
//! [`TryFromIntError`] is separate: it covers value-to-value narrowing into a
//! bit-precise type, where there is no input text.

use std::fmt;

/// Formatting failed: the destination buffer cannot hold the digits.
///
/// Whatever was written before the failure is not guaranteed to be usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Destination buffer too small for the formatted value.
    ValueTooLarge,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::ValueTooLarge => write!(f, "output buffer too small for formatted value"),
        }
    }
}

impl std::error::Error for FormatError {}

/// What kind of parse failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// No digit (optionally signed) at the start of the input.
    InvalidArgument,
    /// The digits are well-formed but the value does not fit the target type.
    ResultOutOfRange,
}

/// Parsing failed.
///
/// Carries the number of input bytes that formed the (optionally signed)
/// digit run. For `InvalidArgument` this is 0; for `ResultOutOfRange` it
/// points one past the last digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError {
    kind: ParseErrorKind,
    consumed: usize,
}

impl ParseError {
    /// Malformed input. Nothing is consumed.
    pub const fn invalid() -> Self {
        Self {
            kind: ParseErrorKind::InvalidArgument,
            consumed: 0,
        }
    }

    /// Well-formed digits of length `consumed` that overflow the target type.
    pub const fn out_of_range(consumed: usize) -> Self {
        Self {
            kind: ParseErrorKind::ResultOutOfRange,
            consumed,
        }
    }

    /// Trailing input after a complete number, as reported by
    /// [`parse_exact`](crate::parse_exact).
    pub(crate) const fn trailing(consumed: usize) -> Self {
        Self {
            kind: ParseErrorKind::InvalidArgument,
            consumed,
        }
    }

    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Bytes of input that looked like a number.
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ParseErrorKind::ResultOutOfRange)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::InvalidArgument if self.consumed == 0 => {
                write!(f, "no valid digits at start of input")
            }
            ParseErrorKind::InvalidArgument => {
                write!(f, "unexpected input after {} bytes", self.consumed)
            }
            ParseErrorKind::ResultOutOfRange => write!(
                f,
                "value out of range for target type ({} bytes of digits)",
                self.consumed
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// A value did not fit the bit width of a [`UintN`](crate::UintN) or
/// [`IntN`](crate::IntN) in a `TryFrom` conversion.
///
/// No text is involved, so unlike [`ParseError`] there is no consumed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TryFromIntError {
    bits: u32,
}

impl TryFromIntError {
    pub(crate) const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// Width of the target type.
    pub const fn bits(&self) -> u32 {
        self.bits
    }
}

impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value out of range for a {}-bit integer", self.bits)
    }
}

impl std::error::Error for TryFromIntError {}
