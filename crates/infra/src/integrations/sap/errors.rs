//! SAP-specific error types and classification
//!
//! Non-success responses from the SAP API are classified by status code and,
//! where the gateway supplies one, enriched with the error code and message
//! from the response body before being converted into the domain error.

use std::fmt;

use acctdoc_domain::AcctDocError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Longest body excerpt carried in an error when the body is not a known
/// error document.
const MAX_BODY_EXCERPT: usize = 200;

/// SAP error category for external consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SapErrorCategory {
    /// Authentication failed or API key rejected (401, 403)
    Authentication,

    /// Rate limit exceeded (429)
    RateLimited,

    /// Entity set or service path not found (404)
    NotFound,

    /// Invalid request, typically a malformed `$filter` (400, 422)
    Validation,

    /// SAP server is unavailable (5xx errors)
    ServerUnavailable,

    /// Unknown or unclassified error
    Unknown,
}

impl SapErrorCategory {
    /// Returns user-friendly message for this category
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Authentication => {
                "The SAP API rejected the request credentials. Check the configured API key."
            }
            Self::RateLimited => "The SAP API rate limit was exceeded.",
            Self::NotFound => "The requested SAP service or entity set was not found.",
            Self::Validation => {
                "The SAP API rejected the request. Check the company code, fiscal year and \
                 document number."
            }
            Self::ServerUnavailable => "The SAP server is temporarily unavailable.",
            Self::Unknown => "The SAP API returned an unexpected response.",
        }
    }
}

impl fmt::Display for SapErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => write!(f, "Authentication Failed"),
            Self::RateLimited => write!(f, "Rate Limited"),
            Self::NotFound => write!(f, "Not Found"),
            Self::Validation => write!(f, "Validation Error"),
            Self::ServerUnavailable => write!(f, "Server Unavailable"),
            Self::Unknown => write!(f, "Unknown Error"),
        }
    }
}

/// SAP-specific error carrying the classified category and upstream detail.
#[derive(Debug, Clone)]
pub struct SapError {
    category: SapErrorCategory,
    message: String,
    context: Option<String>,
}

impl SapError {
    /// Create a new SAP error
    pub fn new(category: SapErrorCategory, message: impl Into<String>) -> Self {
        Self { category, message: message.into(), context: None }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn category(&self) -> &SapErrorCategory {
        &self.category
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        let base = self.category.user_message();
        if let Some(ctx) = &self.context {
            format!("{} Details: {}", base, ctx)
        } else {
            base.to_string()
        }
    }

    /// Classify HTTP status code into error category
    pub fn from_status_code(status: StatusCode) -> Self {
        let category = match status.as_u16() {
            401 | 403 => SapErrorCategory::Authentication,
            429 => SapErrorCategory::RateLimited,
            404 => SapErrorCategory::NotFound,
            400 | 422 => SapErrorCategory::Validation,
            500..=599 => SapErrorCategory::ServerUnavailable,
            _ => SapErrorCategory::Unknown,
        };

        Self::new(
            category,
            format!("HTTP {}: {}", status.as_u16(), status.canonical_reason().unwrap_or("Unknown")),
        )
    }

    /// Classify a non-success response, extracting detail from the body.
    ///
    /// Understands the OData v2 error document
    /// (`{"error":{"code":..,"message":{"value":..}}}`) and the API gateway
    /// fault document (`{"fault":{"faultstring":..}}`); any other body is
    /// attached as a short excerpt.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let err = Self::from_status_code(status);
        match describe_error_body(body) {
            Some(detail) if !detail.is_empty() => err.with_context(detail),
            _ => err,
        }
    }

    /// Convert to domain error type
    pub fn into_domain_error(self) -> AcctDocError {
        let message = self.to_string();
        match self.category {
            SapErrorCategory::Authentication => AcctDocError::Auth(message),
            SapErrorCategory::Validation => AcctDocError::InvalidInput(message),
            SapErrorCategory::NotFound => AcctDocError::NotFound(message),
            SapErrorCategory::RateLimited | SapErrorCategory::ServerUnavailable => {
                AcctDocError::Network(message)
            }
            SapErrorCategory::Unknown => AcctDocError::Internal(message),
        }
    }
}

impl fmt::Display for SapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for SapError {}

impl From<SapError> for AcctDocError {
    fn from(err: SapError) -> Self {
        err.into_domain_error()
    }
}

// =============================================================================
// Error body documents
// =============================================================================

#[derive(Debug, Deserialize)]
struct ODataErrorDocument {
    error: ODataError,
}

#[derive(Debug, Deserialize)]
struct ODataError {
    #[serde(default)]
    code: String,
    message: ODataErrorMessage,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ODataErrorMessage {
    Localized { value: String },
    Plain(String),
}

#[derive(Debug, Deserialize)]
struct GatewayFaultDocument {
    fault: GatewayFault,
}

#[derive(Debug, Deserialize)]
struct GatewayFault {
    faultstring: String,
}

fn describe_error_body(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    if let Ok(doc) = serde_json::from_slice::<ODataErrorDocument>(body) {
        let message = match doc.error.message {
            ODataErrorMessage::Localized { value } | ODataErrorMessage::Plain(value) => value,
        };
        return Some(if doc.error.code.is_empty() {
            message
        } else {
            format!("{}: {}", doc.error.code, message)
        });
    }

    if let Ok(doc) = serde_json::from_slice::<GatewayFaultDocument>(body) {
        return Some(doc.fault.faultstring);
    }

    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    Some(trimmed.chars().take(MAX_BODY_EXCERPT).collect())
}
