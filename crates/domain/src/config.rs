//! Configuration structures
//!
//! [`InputDocument`] is the per-run request read from the input file;
//! [`ApiSettings`] describes how to reach the SAP service.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::types::accepter::{resolve_accepters, Accepter};
use crate::types::document::AccountingDocumentKey;

/// Input document naming the accounting document to read and the accepters
/// to run for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDocument {
    #[serde(rename = "AccountingDocument")]
    pub accounting_document: AccountingDocumentKey,
    #[serde(rename = "Accepter", default, deserialize_with = "null_as_empty")]
    pub accepter: Vec<String>,
}

// `"Accepter": null` reads the same as an absent list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl InputDocument {
    /// Accepters to dispatch after `"All"`/empty expansion.
    #[must_use]
    pub fn resolved_accepters(&self) -> Vec<Accepter> {
        resolve_accepters(&self.accepter)
    }
}

/// Connection settings for the SAP API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Settings pointing at the public SAP API sandbox.
    pub fn sandbox(api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, api_key)
    }
}

// The API key never reaches log output.
impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
