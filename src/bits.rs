// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bit-precise integers: any width from 1 to 128 bits.
//!
//! `UintN<N>` and `IntN<N>` behave like C23 `unsigned _BitInt(N)` and
//! `_BitInt(N)` for conversion purposes. There is no arbitrary-width
//! arithmetic here. Each width maps to a *carrier*, the smallest primitive of
//! 8, 16, 32, 64 or 128 bits that holds it:
//!
//! - **format**: widen to the carrier (lossless) and format the carrier.
//! - **parse**: parse as the carrier, then narrow to N bits. If narrowing and
//!   widening back does not reproduce the carrier value, the text was a valid
//!   carrier value but not a valid N-bit value: `ResultOutOfRange`, with the
//!   consumed length left alone.
//!
//! ```
//! use radix128::{parse_exact, IntN, UintN};
//!
//! assert_eq!(parse_exact::<UintN<100>>("1267650600228229401496703205375", 10),
//!            Ok(UintN::<100>::MAX));
//! assert!(parse_exact::<UintN<100>>("1267650600228229401496703205376", 10).is_err());
//! assert_eq!(parse_exact::<IntN<2>>("-2", 10).map(IntN::get), Ok(-2));
//! ```

use std::fmt;

use crate::convert::{radix, RadixInt};
use crate::error::{FormatError, ParseError, TryFromIntError};

/// Primitive width used to format and parse an N-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Carrier {
    W8,
    W16,
    W32,
    W64,
    W128,
}

impl Carrier {
    /// Smallest carrier holding `bits` bits.
    ///
    /// # Panics
    /// Panics if `bits` is outside `1..=128`.
    pub const fn for_bits(bits: u32) -> Self {
        match bits {
            1..=8 => Carrier::W8,
            9..=16 => Carrier::W16,
            17..=32 => Carrier::W32,
            33..=64 => Carrier::W64,
            65..=128 => Carrier::W128,
            _ => panic!("Contract violation: bit width outside 1..=128"),
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            Carrier::W8 => 8,
            Carrier::W16 => 16,
            Carrier::W32 => 32,
            Carrier::W64 => 64,
            Carrier::W128 => 128,
        }
    }
}

/// High bits of a 128-bit word left over by a `bits`-bit value.
const fn unused_bits(bits: u32) -> u32 {
    // Panics on an invalid width
    let _ = Carrier::for_bits(bits);
    u128::BITS - bits
}

/// Whether `value` is representable as an unsigned `bits`-bit integer.
///
/// Runtime counterpart of `UintN::<N>::new(value).is_some()`.
///
/// # Panics
/// Panics if `bits` is outside `1..=128`.
pub const fn fits_unsigned(value: u128, bits: u32) -> bool {
    let unused = unused_bits(bits);
    (value << unused) >> unused == value
}

/// Whether `value` is representable as a two's-complement `bits`-bit integer.
///
/// # Panics
/// Panics if `bits` is outside `1..=128`.
pub const fn fits_signed(value: i128, bits: u32) -> bool {
    let unused = unused_bits(bits);
    (value << unused) >> unused == value
}

// ============================================================================
// UNSIGNED
// ============================================================================

/// Unsigned integer of exactly `N` bits (`1 <= N <= 128`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UintN<const N: u32>(u128);

impl<const N: u32> UintN<N> {
    pub const BITS: u32 = N;
    pub const CARRIER: Carrier = Carrier::for_bits(N);
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(u128::MAX >> (128 - N));

    /// `value` as an N-bit integer, or `None` if it does not fit.
    pub const fn new(value: u128) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Keep only the low N bits of `value`.
    pub const fn wrapping_new(value: u128) -> Self {
        Self(value & Self::MAX.0)
    }

    pub const fn get(self) -> u128 {
        self.0
    }

    /// Narrow a carrier value, failing if it does not survive the round trip.
    fn narrow(carrier_value: u128, consumed: usize) -> Result<(Self, usize), ParseError> {
        let narrowed = Self::wrapping_new(carrier_value);
        if narrowed.0 != carrier_value {
            return Err(ParseError::out_of_range(consumed));
        }
        Ok((narrowed, consumed))
    }
}

impl<const N: u32> RadixInt for UintN<N> {
    const SIGNED: bool = false;
    const BITS: u32 = N;

    fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError> {
        match Self::CARRIER {
            Carrier::W8 => (self.0 as u8).write_radix(buf, base),
            Carrier::W16 => (self.0 as u16).write_radix(buf, base),
            Carrier::W32 => (self.0 as u32).write_radix(buf, base),
            Carrier::W64 => (self.0 as u64).write_radix(buf, base),
            Carrier::W128 => self.0.write_radix(buf, base),
        }
    }

    fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError> {
        let (value, consumed) = match Self::CARRIER {
            Carrier::W8 => u8::read_radix(text, base).map(|(v, n)| (v as u128, n))?,
            Carrier::W16 => u16::read_radix(text, base).map(|(v, n)| (v as u128, n))?,
            Carrier::W32 => u32::read_radix(text, base).map(|(v, n)| (v as u128, n))?,
            Carrier::W64 => u64::read_radix(text, base).map(|(v, n)| (v as u128, n))?,
            Carrier::W128 => u128::read_radix(text, base)?,
        };
        Self::narrow(value, consumed)
    }
}

impl<const N: u32> From<UintN<N>> for u128 {
    fn from(value: UintN<N>) -> Self {
        value.0
    }
}

impl<const N: u32> TryFrom<u128> for UintN<N> {
    type Error = TryFromIntError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(TryFromIntError::new(N))
    }
}

impl<const N: u32> fmt::Display for UintN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&radix(*self, 10), f)
    }
}

// ============================================================================
// SIGNED
// ============================================================================

/// Two's-complement signed integer of exactly `N` bits (`1 <= N <= 128`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IntN<const N: u32>(i128);

impl<const N: u32> IntN<N> {
    pub const BITS: u32 = N;
    pub const CARRIER: Carrier = Carrier::for_bits(N);
    pub const MIN: Self = Self(i128::MIN >> (128 - N));
    pub const MAX: Self = Self(i128::MAX >> (128 - N));

    /// `value` as an N-bit integer, or `None` if it does not fit.
    pub const fn new(value: i128) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Keep only the low N bits of `value`, sign-extended from bit N-1.
    pub const fn wrapping_new(value: i128) -> Self {
        let unused = 128 - N;
        Self((value << unused) >> unused)
    }

    pub const fn get(self) -> i128 {
        self.0
    }

    /// Narrow a carrier value, failing if it does not survive the round trip.
    fn narrow(carrier_value: i128, consumed: usize) -> Result<(Self, usize), ParseError> {
        let narrowed = Self::wrapping_new(carrier_value);
        if narrowed.0 != carrier_value {
            return Err(ParseError::out_of_range(consumed));
        }
        Ok((narrowed, consumed))
    }
}

impl<const N: u32> RadixInt for IntN<N> {
    const SIGNED: bool = true;
    const BITS: u32 = N;

    fn write_radix(self, buf: &mut [u8], base: u32) -> Result<usize, FormatError> {
        match Self::CARRIER {
            Carrier::W8 => (self.0 as i8).write_radix(buf, base),
            Carrier::W16 => (self.0 as i16).write_radix(buf, base),
            Carrier::W32 => (self.0 as i32).write_radix(buf, base),
            Carrier::W64 => (self.0 as i64).write_radix(buf, base),
            Carrier::W128 => self.0.write_radix(buf, base),
        }
    }

    fn read_radix(text: &[u8], base: u32) -> Result<(Self, usize), ParseError> {
        let (value, consumed) = match Self::CARRIER {
            Carrier::W8 => i8::read_radix(text, base).map(|(v, n)| (v as i128, n))?,
            Carrier::W16 => i16::read_radix(text, base).map(|(v, n)| (v as i128, n))?,
            Carrier::W32 => i32::read_radix(text, base).map(|(v, n)| (v as i128, n))?,
            Carrier::W64 => i64::read_radix(text, base).map(|(v, n)| (v as i128, n))?,
            Carrier::W128 => i128::read_radix(text, base)?,
        };
        Self::narrow(value, consumed)
    }
}

impl<const N: u32> From<IntN<N>> for i128 {
    fn from(value: IntN<N>) -> Self {
        value.0
    }
}

impl<const N: u32> TryFrom<i128> for IntN<N> {
    type Error = TryFromIntError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(TryFromIntError::new(N))
    }
}

impl<const N: u32> fmt::Display for IntN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&radix(*self, 10), f)
    }
}
