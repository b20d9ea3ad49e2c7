// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

use radix128::{
    all_radixes, fits_signed, fits_unsigned, format_u128, parse_exact, parse_i128, parse_u128,
    parse_u64, radix, Carrier, ParseError, RadixInfo, MAX_FORMATTED_LEN,
};

mod cli;
use cli::display::{
    chunk_badge, error_kind_label, field, or_dash, padded_digits, row, section_bot, section_mid,
    section_top, themed, title, BOLD, CYAN, GREEN, YELLOW,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format {
            value,
            from,
            base,
            signed,
            bits,
        } => run_format(&value, from, base, Width { signed, bits }),
        Commands::Parse {
            text,
            base,
            signed,
            bits,
        } => run_parse(&text, base, Width { signed, bits }),
        Commands::Inspect { value, base } => run_inspect(&value, base),
        Commands::Table { json } => run_table(json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// WIDTH HANDLING
// ═══════════════════════════════════════════════════════════════════════════

/// Integer type selected on the command line: `u<bits>` or `i<bits>`.
#[derive(Debug, Clone, Copy)]
struct Width {
    signed: bool,
    bits: u32,
}

#[derive(Debug, Clone, Copy)]
enum Value {
    Unsigned(u128),
    Signed(i128),
}

impl Width {
    fn name(self) -> String {
        format!("{}{}", if self.signed { 'i' } else { 'u' }, self.bits)
    }

    /// Parse the leading digit run of `text`, then narrow to `bits`.
    fn read(self, text: &[u8], base: u32) -> Result<(Value, usize), ParseError> {
        if self.signed {
            let (v, consumed) = parse_i128(text, base)?;
            if !fits_signed(v, self.bits) {
                return Err(ParseError::out_of_range(consumed));
            }
            Ok((Value::Signed(v), consumed))
        } else {
            let (v, consumed) = parse_u128(text, base)?;
            if !fits_unsigned(v, self.bits) {
                return Err(ParseError::out_of_range(consumed));
            }
            Ok((Value::Unsigned(v), consumed))
        }
    }
}

impl Value {
    fn in_base(self, base: u32) -> String {
        match self {
            Value::Unsigned(v) => radix(v, base).to_string(),
            Value::Signed(v) => radix(v, base).to_string(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMAT
// ═══════════════════════════════════════════════════════════════════════════

fn run_format(value: &str, from: u32, base: u32, width: Width) -> Result<(), String> {
    let (parsed, consumed) = width
        .read(value.as_bytes(), from)
        .map_err(|e| format!("'{}' is not a base-{} {}: {}", value, from, width.name(), e))?;
    if consumed != value.len() {
        return Err(format!(
            "unexpected '{}' at offset {} in '{}'",
            &value[consumed..],
            consumed,
            value
        ));
    }
    println!("{}", parsed.in_base(base));
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PARSE
// ═══════════════════════════════════════════════════════════════════════════

fn run_parse(text: &str, base: u32, width: Width) -> Result<(), String> {
    let result = width.read(text.as_bytes(), base);

    title("RADIX128 PARSE");
    section_top("INPUT");
    row(&field("text", &format!("{:?}", text)));
    row(&field("base", &base.to_string()));
    row(&field(
        "type",
        &format!("{} (carrier {} bits)", width.name(), Carrier::for_bits(width.bits).bits()),
    ));

    section_mid("RESULT");
    let outcome = match result {
        Ok((value, consumed)) => {
            row(&field("value", &themed(GREEN, &[BOLD], &value.in_base(10))));
            row(&field("consumed", &consumed.to_string()));
            row(&field("rest", &format!("{:?}", &text[consumed..])));
            Ok(())
        }
        Err(e) => {
            row(&field("error", &error_kind_label(e.kind())));
            row(&field("consumed", &e.consumed().to_string()));
            Err(e.to_string())
        }
    };
    section_bot();
    outcome
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

/// One emitted piece of the formatted text.
struct Piece<'a> {
    role: &'static str,
    digits: &'a str,
}

/// Split formatted digits into the pieces the formatter emitted.
///
/// Every piece but the first is exactly `max_digits` wide, so the split can
/// be recovered from the right.
fn split_pieces<'a>(text: &'a str, info: &RadixInfo) -> Vec<Piece<'a>> {
    let width = info.max_digits;
    let lead_len = match text.len() % width {
        0 => width,
        r => r,
    };
    let count = 1 + (text.len() - lead_len) / width;
    // A head piece is followed by every full-width bit chunk
    let has_head = match (info.bits_per_chunk, info.head_bits) {
        (Some(bits), Some(head)) => head > 0 && count == 1 + ((128 - head) / bits) as usize,
        _ => false,
    };

    let mut pieces = vec![Piece {
        role: if has_head { "HEAD" } else { "LEAD" },
        digits: &text[..lead_len],
    }];
    pieces.extend((lead_len..text.len()).step_by(width).map(|start| Piece {
        role: "PAD",
        digits: &text[start..start + width],
    }));
    pieces
}

fn run_inspect(value: &str, base: u32) -> Result<(), String> {
    let x: u128 = parse_exact(value, 10)
        .map_err(|e| format!("'{}' is not an unsigned decimal u128: {}", value, e))?;
    let info = RadixInfo::new(base);

    let mut buf = [0u8; MAX_FORMATTED_LEN];
    let written = format_u128(&mut buf, x, base).map_err(|e| e.to_string())?;
    let text = std::str::from_utf8(&buf[..written]).map_err(|e| e.to_string())?;

    let path = if u64::try_from(x).is_ok() {
        "native u64"
    } else if info.bits_per_chunk.is_some() {
        "bit chunks"
    } else {
        "division chunks"
    };

    title("RADIX128 INSPECT");
    section_top("VALUE");
    row(&field("decimal", &x.to_string()));
    row(&field("base", &base.to_string()));
    row(&field("path", &themed(CYAN, &[], path)));
    row(&field("max_digits", &info.max_digits.to_string()));
    row(&field(
        "max_power",
        &info
            .max_power
            .map_or_else(|| "2^64".to_string(), |p| p.to_string()),
    ));
    row(&field("bits/chunk", &or_dash(info.bits_per_chunk)));
    row(&field("head bits", &or_dash(info.head_bits)));

    section_mid("CHUNKS (most significant first)");
    for piece in split_pieces(text, &info) {
        let digits = if piece.role == "PAD" {
            padded_digits(piece.digits)
        } else {
            themed(YELLOW, &[BOLD], piece.digits)
        };
        let word = parse_u64(piece.digits.as_bytes(), base)
            .map(|(v, _)| v.to_string())
            .unwrap_or_default();
        row(&format!(
            " {} {}  = {}",
            chunk_badge(piece.role),
            digits,
            word
        ));
    }

    section_mid("OUTPUT");
    row(&format!(" {}", themed(GREEN, &[BOLD], text)));
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// TABLE
// ═══════════════════════════════════════════════════════════════════════════

fn run_table(json: bool) -> Result<(), String> {
    let rows: Vec<RadixInfo> = all_radixes().collect();

    if json {
        let out = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    section_top("RADIX TABLE");
    row(&themed(
        CYAN,
        &[BOLD],
        &format!(
            " {:>4}  {:>10}  {:>22}  {:>10}  {:>9}",
            "base", "max_digits", "max_power", "bits/chunk", "head bits"
        ),
    ));
    for info in &rows {
        let power = info
            .max_power
            .map_or_else(|| "2^64".to_string(), |p| p.to_string());
        row(&format!(
            " {:>4}  {:>10}  {:>22}  {:>10}  {:>9}",
            info.base,
            info.max_digits,
            power,
            info.bits_per_chunk
                .map_or_else(|| "-".to_string(), |b| b.to_string()),
            info.head_bits
                .map_or_else(|| "-".to_string(), |b| b.to_string()),
        ));
    }
    section_bot();
    Ok(())
}
