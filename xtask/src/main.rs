//! Custom cargo commands for radix128.
//!
//! Usage:
//!   cargo xtask verify          - Run full verification suite
//!   cargo xtask test            - Run all tests (default and no-default features)
//!   cargo xtask check           - Quick check (check + test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask fuzz <target>   - Run one fuzz target for a bounded time
//!   cargo xtask kani            - Run Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets
const FUZZ_TARGETS: &[&str] = &["parse_u128", "parse_i128", "roundtrip", "bit_precise"];

/// Entry points that must validate the base before touching the tables
const BASE_CHECKED_FILES: &[&str] = &["src/native.rs", "src/format.rs", "src/parse.rs"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let target = args.next();
            let seconds = args.next();
            fuzz(target.as_deref(), seconds.as_deref())?
        }
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify                 Run full verification suite (contracts + tests + clippy + fuzz smoke)
  test                   Run all Rust tests, with and without the cli feature
  check                  Quick check (cargo check + test + clippy)
  bench                  Run criterion benchmarks
  fuzz <target> [secs]   Run a fuzz target (default 60s); targets: {}
  kani                   Run Kani model checking proofs
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("radix128 Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract calls...");
    check_contract_calls()?;
    println!("✓ Every entry point checks its base\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Fuzz smoke run...");
    for &target in FUZZ_TARGETS {
        fuzz(Some(target), Some("10"))?;
    }
    println!("✓ Fuzz targets ran clean\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--lib", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target for a bounded time
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target; expected one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target '{}'; expected one of: {}", target, FUZZ_TARGETS.join(", "));
    }
    let seconds: u32 = seconds
        .unwrap_or("60")
        .parse()
        .context("fuzz duration must be a whole number of seconds")?;

    let max_time = format!("-max_total_time={}", seconds);
    run_in(
        &project_root()?,
        "cargo",
        &["+nightly", "fuzz", "run", target, "--", &max_time],
    )
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let proofs = project_root()?.join("kani-proofs");
    if !proofs.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }
    run_in(&proofs, "cargo", &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_in(&project_root()?, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}

/// Public entry points that index the per-base tables call `check_base` first.
fn check_contract_calls() -> Result<()> {
    let root = project_root()?;

    for file in BASE_CHECKED_FILES {
        let source = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        let pub_fns = source
            .lines()
            .filter(|l| l.starts_with("pub fn "))
            .count();
        let checks = source
            .lines()
            .filter(|l| l.trim_start().starts_with("check_base(base);"))
            .count();
        if checks < pub_fns {
            bail!(
                "{} has {} public functions but only {} check_base calls",
                file,
                pub_fns,
                checks
            );
        }
    }

    Ok(())
}
