//! API settings loader
//!
//! Loads SAP connection settings from environment variables, falling back to
//! defaults for everything except the API key.
//!
//! ## Environment Variables
//! - `SAP_API_BASE_URL`: OData root URL (default: public SAP API sandbox)
//! - `SAP_API_KEY`: API key sent in the `APIKey` header
//! - `SAP_API_KEY_FILE`: file holding the API key, read when `SAP_API_KEY` is
//!   not set
//! - `SAP_API_TIMEOUT_SECS`: request timeout in seconds (default: 30)
//! - `SAP_ACCTDOC_INPUT`: input document path
//!
//! The API key is read once here and handed to the caller's constructor.

use std::path::{Path, PathBuf};

use acctdoc_domain::constants::{
    DEFAULT_BASE_URL, DEFAULT_INPUT_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use acctdoc_domain::{AcctDocError, ApiSettings, Result};
use url::Url;

use crate::errors::InfraError;

pub const ENV_BASE_URL: &str = "SAP_API_BASE_URL";
pub const ENV_API_KEY: &str = "SAP_API_KEY";
pub const ENV_API_KEY_FILE: &str = "SAP_API_KEY_FILE";
pub const ENV_TIMEOUT_SECS: &str = "SAP_API_TIMEOUT_SECS";
pub const ENV_INPUT_PATH: &str = "SAP_ACCTDOC_INPUT";

/// Load API settings from the environment
///
/// # Errors
/// Returns `AcctDocError::Config` if:
/// - No API key is available from `SAP_API_KEY` or `SAP_API_KEY_FILE`
/// - The base URL is not an absolute http(s) URL
/// - The timeout is not a positive integer
pub fn load_api_settings() -> Result<ApiSettings> {
    let base_url = optional_env_var(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    validate_base_url(&base_url)?;

    let timeout_secs = match optional_env_var(ENV_TIMEOUT_SECS) {
        Some(raw) => parse_timeout(&raw)?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let api_key = load_api_key()?;

    tracing::info!(base_url = %base_url, timeout_secs, "API settings loaded");

    Ok(ApiSettings { base_url, api_key, timeout_secs, user_agent: DEFAULT_USER_AGENT.to_string() })
}

/// Load the API key
///
/// `SAP_API_KEY` takes precedence; otherwise the trimmed contents of the file
/// named by `SAP_API_KEY_FILE` are used.
///
/// # Errors
/// Returns `AcctDocError::Config` if neither source yields a non-empty key.
pub fn load_api_key() -> Result<String> {
    if let Some(key) = optional_env_var(ENV_API_KEY) {
        return Ok(key);
    }

    match optional_env_var(ENV_API_KEY_FILE) {
        Some(path) => read_api_key_file(Path::new(&path)),
        None => Err(AcctDocError::Config(format!(
            "Missing API key: set {ENV_API_KEY} or {ENV_API_KEY_FILE}"
        ))),
    }
}

/// Read an API key from a file, ignoring surrounding whitespace.
///
/// # Errors
/// Returns `AcctDocError::Config` if the file cannot be read or is empty.
pub fn read_api_key_file(path: &Path) -> Result<String> {
    let contents =
        std::fs::read_to_string(path).map_err(|err| AcctDocError::from(InfraError::from(err)))?;

    let key = contents.trim();
    if key.is_empty() {
        return Err(AcctDocError::Config(format!("API key file is empty: {}", path.display())));
    }

    tracing::debug!(path = %path.display(), "API key read from file");
    Ok(key.to_string())
}

/// Resolve the input document path
///
/// Precedence: explicit argument, then `SAP_ACCTDOC_INPUT`, then the default
/// sample location.
pub fn resolve_input_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| optional_env_var(ENV_INPUT_PATH).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH))
}

fn validate_base_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .map_err(|e| AcctDocError::Config(format!("Invalid base URL '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AcctDocError::Config(format!("Unsupported base URL scheme: {other}"))),
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AcctDocError::Config("Timeout must be greater than zero".to_string())),
        Ok(secs) => Ok(secs),
        Err(e) => Err(AcctDocError::Config(format!("Invalid timeout '{raw}': {e}"))),
    }
}

/// Get an environment variable, treating empty values as unset.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
