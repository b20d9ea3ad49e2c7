// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One conversion surface for every integer width.
//!
//! `RadixInt` is implemented for all primitive integers and for the
//! bit-precise [`UintN`](crate::UintN) / [`IntN`](crate::IntN). Types up to 64
//! bits go through the native word primitive; 128-bit types through the
//! chunked codec.
//!
//! ```
//! use radix128::{parse_exact, radix, RadixInt};
//!
//! let mut buf = [0u8; radix128::MAX_FORMATTED_LEN];
//! let n = u128::MAX.write_radix(&mut buf, 36).unwrap();
//! assert_eq!(&buf[..n], b"f5lxx1zz5pnorynqglhzmsp33");
//!
//! assert_eq!(radix(-255i16, 16).to_string(), "-ff");
//! assert_eq!(parse_exact::<u8>("11111111", 2), Ok(255));
//! ```

use std::fmt;

use crate::contracts::check_base;
use crate::error::{FormatError, ParseError};
use crate::format::{format_i128, format_u128};
use crate::native::{
    format_i64, format_u64, parse_i64, parse_signed_narrow, parse_u64, parse_unsigned_narrow,
};
use crate::parse::{parse_i128, parse_u128};

/// A buffer this long holds any formatted value: 128 binary digits plus `-`.
pub const MAX_FORMATTED_LEN: usize = 129;

/// Integers that convert to and from digit strings in radix 2–36.
pub trait RadixInt: Copy + Sized {
    /// Whether the type accepts a leading `-`.
    const SIGNED: bool;
    /// Value bits, sign bit included.
    const BITS: u32;

    /// Write `self` in `base` to the front of `buf`, returning the bytes written.
    ///
    /// # Panics
    /// Panics if `base` is outside `2..=36`.
    fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError>;

    /// Parse the leading (optionally signed) digit run of `text`.
    ///
    /// # Panics
    /// Panics if `base` is outside `2..=36`.
    fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError>;

    fn write_decimal(self, buf: &mut [u8]) -> Result<usize, FormatError> {
        self.write_radix(buf, 10)
    }

    fn read_decimal(text: &[u8]) -> Result<(Self, usize), ParseError> {
        Self::read_radix(text, 10)
    }
}

macro_rules! impl_radix_narrow_unsigned {
    ($($t:ty),*) => {$(
        impl RadixInt for $t {
            const SIGNED: bool = false;
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError> {
                format_u64(buf, self as u64, base)
            }

            #[inline]
            fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError> {
                parse_unsigned_narrow(text, base)
            }
        }
    )*};
}

macro_rules! impl_radix_narrow_signed {
    ($($t:ty),*) => {$(
        impl RadixInt for $t {
            const SIGNED: bool = true;
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError> {
                format_i64(buf, self as i64, base)
            }

            #[inline]
            fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError> {
                parse_signed_narrow(text, base)
            }
        }
    )*};
}

impl_radix_narrow_unsigned!(u8, u16, u32, usize);
impl_radix_narrow_signed!(i8, i16, i32, isize);

impl RadixInt for u64 {
    const SIGNED: bool = false;
    const BITS: u32 = 64;

    #[inline]
    fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError> {
        format_u64(buf, self, base)
    }

    #[inline]
    fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError> {
        parse_u64(text, base)
    }
}

impl RadixInt for i64 {
    const SIGNED: bool = true;
    const BITS: u32 = 64;

    #[inline]
    fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError> {
        format_i64(buf, self, base)
    }

    #[inline]
    fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError> {
        parse_i64(text, base)
    }
}

impl RadixInt for u128 {
    const SIGNED: bool = false;
    const BITS: u32 = 128;

    #[inline]
    fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError> {
        format_u128(buf, self, base)
    }

    #[inline]
    fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError> {
        parse_u128(text, base)
    }
}

impl RadixInt for i128 {
    const SIGNED: bool = true;
    const BITS: u32 = 128;

    #[inline]
    fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError> {
        format_i128(buf, self, base)
    }

    #[inline]
    fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError> {
        parse_i128(text, base)
    }
}

// ============================================================================
// CONVENIENCE
// ============================================================================

/// Parse all of `text` as a `T` in `base`.
///
/// Unlike [`RadixInt::read_radix`], trailing input is an error: it is
/// reported as `InvalidArgument` with `consumed()` pointing at the first
/// unparsed byte.
pub fn parse_exact<T: RadixInt>(text: impl AsRef<[u8]>, base: u32) -> Result<T, ParseError> {
    let text = text.as_ref();
    let (value, consumed) = T::read_radix(text, base)?;
    if consumed != text.len() {
        return Err(ParseError::trailing(consumed));
    }
    Ok(value)
}

/// Displays an integer in a given radix without allocating.
///
/// Honors width, fill, alignment, `+` and `0` flags the way the primitive
/// integers do. Created by [`radix`].
#[derive(Debug, Clone, Copy)]
pub struct Radix<T> {
    value: T,
    base: u32,
}

/// Wrap `value` so that `Display` prints it in `base` (lowercase digits).
///
/// # Panics
/// Panics if `base` is outside `2..=36`.
pub fn radix<T: RadixInt>(value: T, base: u32) -> Radix<T> {
    check_base(base);
    Radix { value, base }
}

impl<T: RadixInt> fmt::Display for Radix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let written = self
            .value
            .write_radix(&mut buf, self.base)
            .map_err(|_| fmt::Error)?;
        let text = std::str::from_utf8(&buf[..written]).map_err(|_| fmt::Error)?;
        match text.strip_prefix('-') {
            Some(digits) => f.pad_integral(false, "", digits),
            None => f.pad_integral(true, "", text),
        }
    }
}
