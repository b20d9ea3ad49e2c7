//! Shared test utilities and fixtures.

#![allow(dead_code)]

// Re-export canonical test utilities from radix128::testing
pub use radix128::testing::{
    boundary_values, format_to_string, parse_str, reference_format_i128, reference_format_u128,
    reference_parse_u128,
};

// ============================================================================
// FIXTURE TABLES
// ============================================================================

/// A value, a base, and its exact formatted text.
#[derive(Debug, Clone, Copy)]
pub struct Fixture<T> {
    pub value: T,
    pub base: u32,
    pub text: &'static str,
}

/// 2^100 / 10: wide enough to need every chunking path.
pub const SAMPLE: u128 = (1 << 100) / 10;

/// Bases covered by the fixture tables.
pub const FIXTURE_BASES: [u32; 6] = [2, 5, 8, 10, 16, 32];

#[rustfmt::skip]
pub const FIXTURES_U128: &[Fixture<u128>] = &[
    Fixture { value: 0, base: 2, text: "0" },
    Fixture { value: 0, base: 5, text: "0" },
    Fixture { value: 0, base: 8, text: "0" },
    Fixture { value: 0, base: 10, text: "0" },
    Fixture { value: 0, base: 16, text: "0" },
    Fixture { value: 0, base: 32, text: "0" },

    Fixture { value: 255, base: 2, text: "11111111" },
    Fixture { value: 255, base: 5, text: "2010" },
    Fixture { value: 255, base: 8, text: "377" },
    Fixture { value: 255, base: 10, text: "255" },
    Fixture { value: 255, base: 16, text: "ff" },
    Fixture { value: 255, base: 32, text: "7v" },

    Fixture { value: SAMPLE, base: 2, text: "1100110011001100110011001100110011001100110011001100110011001100110011001100110011001100110011001" },
    Fixture { value: SAMPLE, base: 5, text: "234321103241341010413041402403011100224122" },
    Fixture { value: SAMPLE, base: 8, text: "146314631463146314631463146314631" },
    Fixture { value: SAMPLE, base: 10, text: "126765060022822940149670320537" },
    Fixture { value: SAMPLE, base: 16, text: "1999999999999999999999999" },
    Fixture { value: SAMPLE, base: 32, text: "36cpj6cpj6cpj6cpj6cp" },

    Fixture { value: u128::MAX, base: 2, text: "11111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111" },
    Fixture { value: u128::MAX, base: 5, text: "11031110441201303134210404233413032443021130230130231310" },
    Fixture { value: u128::MAX, base: 8, text: "3777777777777777777777777777777777777777777" },
    Fixture { value: u128::MAX, base: 10, text: "340282366920938463463374607431768211455" },
    Fixture { value: u128::MAX, base: 16, text: "ffffffffffffffffffffffffffffffff" },
    Fixture { value: u128::MAX, base: 32, text: "7vvvvvvvvvvvvvvvvvvvvvvvvv" },
];

#[rustfmt::skip]
pub const FIXTURES_I128: &[Fixture<i128>] = &[
    Fixture { value: 0, base: 2, text: "0" },
    Fixture { value: 0, base: 5, text: "0" },
    Fixture { value: 0, base: 8, text: "0" },
    Fixture { value: 0, base: 10, text: "0" },
    Fixture { value: 0, base: 16, text: "0" },
    Fixture { value: 0, base: 32, text: "0" },

    Fixture { value: 255, base: 2, text: "11111111" },
    Fixture { value: 255, base: 5, text: "2010" },
    Fixture { value: 255, base: 8, text: "377" },
    Fixture { value: 255, base: 10, text: "255" },
    Fixture { value: 255, base: 16, text: "ff" },
    Fixture { value: 255, base: 32, text: "7v" },

    Fixture { value: SAMPLE as i128, base: 2, text: "1100110011001100110011001100110011001100110011001100110011001100110011001100110011001100110011001" },
    Fixture { value: SAMPLE as i128, base: 5, text: "234321103241341010413041402403011100224122" },
    Fixture { value: SAMPLE as i128, base: 8, text: "146314631463146314631463146314631" },
    Fixture { value: SAMPLE as i128, base: 10, text: "126765060022822940149670320537" },
    Fixture { value: SAMPLE as i128, base: 16, text: "1999999999999999999999999" },
    Fixture { value: SAMPLE as i128, base: 32, text: "36cpj6cpj6cpj6cpj6cp" },

    Fixture { value: i128::MIN, base: 2, text: "-10000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000" },
    Fixture { value: i128::MIN, base: 5, text: "-3013030220323124042102424341431241221233040112312340403" },
    Fixture { value: i128::MIN, base: 8, text: "-2000000000000000000000000000000000000000000" },
    Fixture { value: i128::MIN, base: 10, text: "-170141183460469231731687303715884105728" },
    Fixture { value: i128::MIN, base: 16, text: "-80000000000000000000000000000000" },
    Fixture { value: i128::MIN, base: 32, text: "-40000000000000000000000000" },
];

// ============================================================================
// HELPERS
// ============================================================================

/// A decimal string of `zeros` leading zeros followed by `digits`.
pub fn zero_padded(zeros: usize, digits: &str) -> String {
    format!("{}{}", "0".repeat(zeros), digits)
}
