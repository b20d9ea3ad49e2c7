// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact text conversion for 128-bit and bit-precise integers.
//!
//! Formats `u128`/`i128` (and any width from 1 to 128 bits) as digit strings
//! in radix 2 through 36, and parses them back, reporting how many bytes were
//! consumed. Everything is built on a 64-bit word primitive: wide values are
//! cut into chunks that fit one word, and the chunks are glued back together
//! exactly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  radix.rs   │────▶│  native.rs   │────▶│  format.rs   │
//! │ (max_digits,│     │ (u64 / i64   │     │  parse.rs    │
//! │  max_power) │     │  primitive)  │     │ (u128, i128) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │             convert.rs  /  bits.rs                   │
//! │  (RadixInt for every width, UintN<N>, IntN<N>,       │
//! │   radix() Display adapter, parse_exact)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `scan.rs` (digit classification), `arith.rs` (overflow-reporting add and
//! multiply) and `contracts.rs` (runtime invariants) sit underneath.
//!
//! # Usage
//!
//! ```
//! use radix128::{format_u128, parse_i128, ParseErrorKind};
//!
//! let mut buf = [0u8; radix128::MAX_FORMATTED_LEN];
//! let n = format_u128(&mut buf, (1u128 << 100) / 10, 16).unwrap();
//! assert_eq!(&buf[..n], b"1999999999999999999999999");
//!
//! assert_eq!(parse_i128(b"-ff!", 16), Ok((-255, 3)));
//! let err = parse_i128(b"zz", 16).unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::InvalidArgument);
//! assert_eq!(err.consumed(), 0);
//! ```

pub mod arith;
pub mod bits;
pub mod contracts;
pub mod convert;
pub mod error;
pub mod format;
pub mod native;
pub mod parse;
pub mod radix;
pub mod scan;

// Public API
pub use arith::{add_overflow, mul_overflow};
pub use bits::{fits_signed, fits_unsigned, Carrier, IntN, UintN};
pub use convert::{parse_exact, radix, Radix, RadixInt, MAX_FORMATTED_LEN};
pub use error::{FormatError, ParseError, ParseErrorKind, TryFromIntError};
pub use format::{format_i128, format_u128};
pub use native::{format_i64, format_u64, parse_i64, parse_u64};
pub use parse::{parse_i128, parse_u128};
pub use radix::{
    all_radixes, bits_per_chunk, is_power_of_two, max_digits, max_power, RadixInfo, MAX_BASE,
    MIN_BASE,
};
pub use scan::{digit_run_len, digit_value, DIGITS};

// Test utilities (always compiled for integration tests and fuzz targets)
pub mod testing;
