//! Input document reader
//!
//! Reads the document naming which accounting document to query and which
//! accepters to run. JSON and TOML are supported, detected by extension; a
//! path without extension is read as JSON.

use std::path::Path;

use acctdoc_domain::{AcctDocError, InputDocument, Result};

use crate::errors::InfraError;

/// Read and decode an input document
///
/// # Errors
/// Returns `AcctDocError::Config` if the file is missing or unreadable, the
/// format is unsupported, or the content does not match the expected shape.
pub fn read_input(path: &Path) -> Result<InputDocument> {
    if !path.exists() {
        return Err(AcctDocError::Config(format!("Input file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Reading input document");

    let contents =
        std::fs::read_to_string(path).map_err(|err| AcctDocError::from(InfraError::from(err)))?;

    parse_input(&contents, path)
}

/// Parse an input document from string content
fn parse_input(contents: &str, path: &Path) -> Result<InputDocument> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "json" => serde_json::from_str(contents)
            .map_err(|e| AcctDocError::Config(format!("Invalid JSON input document: {}", e))),
        "toml" => toml::from_str(contents)
            .map_err(|e| AcctDocError::Config(format!("Invalid TOML input document: {}", e))),
        _ => Err(AcctDocError::Config(format!("Unsupported input format: {}", extension))),
    }
}
