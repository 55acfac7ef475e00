//! Development automation tasks for the accounting document reader workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::path::Path;
use std::process::{Command, ExitCode};

use anyhow::Context;

const BIN_PACKAGE: &str = "acctdoc-cli";
const SAMPLE_INPUT: &str = "Inputs/SDC_Accounting_Document_Item_sample.json";

/// CI steps in run order: label, cargo arguments, hint on failure.
const CI_STEPS: &[(&str, &[&str], &str)] = &[
    ("format", &["fmt", "--all", "--", "--check"], "run 'cargo fmt --all'"),
    ("clippy", &["clippy", "--workspace", "--all-targets"], "see lints above"),
    ("tests", &["test", "--workspace"], "see failures above"),
];

fn main() -> ExitCode {
    let result = match env::args().nth(1).as_deref() {
        Some("ci") => run_ci(),
        Some("sample") => run_sample(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}\n");
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Accounting Document Reader Development Tasks\n");
    println!("USAGE:\n    cargo xtask <TASK>\n");
    println!("TASKS:");
    println!("    ci        Check formatting, run Clippy and the workspace tests");
    println!("    sample    Run the reader against {SAMPLE_INPUT}");
    println!("    help      Show this help message");
}

fn run_ci() -> anyhow::Result<()> {
    for (index, (label, args, hint)) in CI_STEPS.iter().enumerate() {
        println!("==> Step {}/{}: {label}", index + 1, CI_STEPS.len());
        cargo(args).with_context(|| format!("{label} failed; {hint}"))?;
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Needs `SAP_API_KEY` (or `SAP_API_KEY_FILE`) in the environment or `.env`.
fn run_sample() -> anyhow::Result<()> {
    if !Path::new(SAMPLE_INPUT).exists() {
        anyhow::bail!("{SAMPLE_INPUT} not found; run from the workspace root");
    }

    cargo(&["run", "-p", BIN_PACKAGE, "--", SAMPLE_INPUT]).context("reader run failed")
}

fn cargo(args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new("cargo").args(args).status().context("failed to spawn cargo")?;
    if !status.success() {
        anyhow::bail!("cargo {} exited with {status}", args.join(" "));
    }
    Ok(())
}
