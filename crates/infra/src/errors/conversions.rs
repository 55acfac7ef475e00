//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use acctdoc_domain::AcctDocError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AcctDocError);

impl From<InfraError> for AcctDocError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAcctDocError {
    fn into_acctdoc(self) -> AcctDocError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AcctDocError */
/* -------------------------------------------------------------------------- */

impl IntoAcctDocError for HttpError {
    fn into_acctdoc(self) -> AcctDocError {
        if self.is_timeout() {
            return AcctDocError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return AcctDocError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return AcctDocError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return AcctDocError::Decode(self.to_string());
        }

        AcctDocError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_acctdoc())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AcctDocError */
/* -------------------------------------------------------------------------- */

impl IntoAcctDocError for JsonError {
    fn into_acctdoc(self) -> AcctDocError {
        AcctDocError::Decode(format!(
            "invalid JSON at line {} column {}: {}",
            self.line(),
            self.column(),
            self
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_acctdoc())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → AcctDocError */
/* -------------------------------------------------------------------------- */

impl IntoAcctDocError for IoError {
    fn into_acctdoc(self) -> AcctDocError {
        match self.kind() {
            ErrorKind::NotFound => AcctDocError::Config(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                AcctDocError::Config(format!("permission denied: {self}"))
            }
            _ => AcctDocError::Config(format!("failed to read file: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_acctdoc())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
