// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the radix128 command-line interface.
//!
//! Four subcommands: `format` to re-express a number in another base, `parse`
//! to show exactly what the parser makes of some text (value, consumed bytes,
//! error kind), `inspect` to draw the chunk decomposition of a value, and
//! `table` to dump the per-base constants.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "radix128",
    about = "Exact radix conversion for 128-bit and bit-precise integers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a number from one base to another
    Format {
        /// Number to convert, written in the `--from` base
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Base the input is written in (2-36)
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(2..=36))]
        from: u32,

        /// Base to print the result in (2-36)
        #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(2..=36))]
        base: u32,

        /// Treat the value as two's-complement signed
        #[arg(short, long)]
        signed: bool,

        /// Bit width of the integer (1-128)
        #[arg(long, default_value = "128", value_parser = clap::value_parser!(u32).range(1..=128))]
        bits: u32,
    },

    /// Parse text and report the value and consumed length
    Parse {
        /// Text to parse; only its leading digit run is used
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Base to parse in (2-36)
        #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(2..=36))]
        base: u32,

        /// Accept a leading '-'
        #[arg(short, long)]
        signed: bool,

        /// Bit width of the integer (1-128)
        #[arg(long, default_value = "128", value_parser = clap::value_parser!(u32).range(1..=128))]
        bits: u32,
    },

    /// Show how a value is split into 64-bit chunks for a base
    Inspect {
        /// Unsigned decimal value to decompose
        value: String,

        /// Base to decompose in (2-36)
        #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(2..=36))]
        base: u32,
    },

    /// Print the per-base chunking constants
    Table {
        /// Emit JSON instead of a box diagram
        #[arg(long)]
        json: bool,
    },
}
