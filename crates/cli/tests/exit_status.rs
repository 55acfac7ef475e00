//! Exit status of the reader binary.
//!
//! Loading failures end the run with a failure status; API failures are
//! logged and the run still succeeds.

use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_sap-acctdoc-reads");

fn sample_input() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../Inputs/SDC_Accounting_Document_Item_sample.json")
}

fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn run_reader(input: &PathBuf, envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(BIN);
    command
        .arg(input)
        .env_remove("SAP_API_KEY")
        .env_remove("SAP_API_KEY_FILE")
        .env_remove("SAP_API_BASE_URL")
        .env_remove("SAP_API_TIMEOUT_SECS")
        .env_remove("SAP_ACCTDOC_INPUT")
        .env("RUST_LOG", "info")
        .env("SAP_ACCTDOC_LOG_FORMAT", "json");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("failed to run reader binary")
}

#[test]
fn missing_input_file_exits_with_failure() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_reader(&dir.path().join("absent.json"), &[("SAP_API_KEY", "test-api-key")]);

    assert!(!output.status.success(), "expected failure, got {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not found"), "stdout: {stdout}");
}

#[test]
fn refused_connection_is_logged_and_exits_successfully() {
    let base_url = refused_url();
    let output = run_reader(
        &sample_input(),
        &[("SAP_API_BASE_URL", &base_url), ("SAP_API_KEY", "test-api-key")],
    );

    assert!(output.status.success(), "expected success, got {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accepter request failed"), "stdout: {stdout}");
    assert!(!stdout.contains("test-api-key"), "API key must not be logged");
}
