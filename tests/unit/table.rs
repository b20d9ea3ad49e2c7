//! The per-base metadata table and its JSON export.

use radix128::{all_radixes, bits_per_chunk, max_digits, max_power, RadixInfo};

#[test]
fn test_table_covers_every_base() {
    let rows: Vec<RadixInfo> = all_radixes().collect();
    assert_eq!(rows.len(), 35);
    assert_eq!(rows.first().map(|r| r.base), Some(2));
    assert_eq!(rows.last().map(|r| r.base), Some(36));
    for row in &rows {
        assert_eq!(row.max_digits, max_digits(row.base));
        assert_eq!(row.bits_per_chunk, bits_per_chunk(row.base));
        assert_eq!(row.max_power.unwrap_or(0), max_power(row.base));
    }
}

#[test]
fn test_chunk_power_is_exact() {
    for info in all_radixes() {
        let power = (info.base as u128).pow(info.max_digits as u32);
        assert!(power <= 1 << 64, "base {}", info.base);
        assert!(power * info.base as u128 > 1 << 64, "base {}", info.base);
        assert_eq!(info.max_power.map_or(1 << 64, u128::from), power);
    }
}

#[test]
fn test_json_export() {
    let octal = serde_json::to_value(RadixInfo::new(8)).unwrap();
    assert_eq!(
        octal,
        serde_json::json!({
            "base": 8,
            "maxDigits": 21,
            "maxPower": 9223372036854775808u64,
            "bitsPerChunk": 63,
            "headBits": 2,
        })
    );

    let hex = serde_json::to_value(RadixInfo::new(16)).unwrap();
    assert_eq!(hex["maxPower"], serde_json::Value::Null);
    assert_eq!(hex["headBits"], 0);

    let decimal = serde_json::to_value(RadixInfo::new(10)).unwrap();
    assert_eq!(decimal["bitsPerChunk"], serde_json::Value::Null);
    assert_eq!(decimal["maxPower"], 10_000_000_000_000_000_000u64);
}
