/// SAP OData caller for the operational accounting document item cube
use std::time::Duration;

use acctdoc_core::sap_ports::AccountingDocumentItemSource;
use acctdoc_domain::constants::{API_KEY_HEADER, FILTER_PARAM};
use acctdoc_domain::{
    AccountingDocumentItem, AccountingDocumentKey, AcctDocError, ApiSettings, Result,
};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Method;
use tracing::{debug, warn};

use super::errors::SapError;
use super::formatter::decode_items;
use super::query::{item_filter, item_url};
use crate::errors::InfraError;
use crate::http::HttpClient;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Caller for `API_OPLACCTGDOCITEMCUBE_SRV`.
///
/// The API key is supplied by the caller at construction and sent with every
/// request in the `APIKey` header.
pub struct SapApiCaller {
    base_url: String,
    api_key: String,
    http_client: HttpClient,
}

impl SapApiCaller {
    /// Create a caller from connection settings
    ///
    /// # Arguments
    /// * `settings` - Base URL, API key, timeout and user agent
    ///
    /// # Returns
    /// A configured caller, or `AcctDocError::Config` when the HTTP client
    /// cannot be built
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|err| AcctDocError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self::with_http_client(settings.base_url.clone(), settings.api_key.clone(), http_client))
    }

    /// Create a caller with a preconfigured HTTP client
    pub fn with_http_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        http_client: HttpClient,
    ) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into(), http_client }
    }

    /// URL of the item entity set this caller queries.
    pub fn item_url(&self) -> String {
        item_url(&self.base_url)
    }

    /// Read the line items of one accounting document
    ///
    /// # Returns
    /// * `Ok(items)` - decoded records, possibly empty
    /// * `Err(Network)` - transport failure, rate limiting or server error
    /// * `Err(Auth | NotFound | InvalidInput)` - rejected request
    /// * `Err(Decode)` - body is not an OData v2 result set
    pub async fn get_items(&self, key: &AccountingDocumentKey) -> Result<Vec<AccountingDocumentItem>> {
        let url = self.item_url();
        let filter = item_filter(key);
        debug!(%url, %filter, "requesting accounting document items");

        let request_builder = self
            .http_client
            .request(Method::GET, &url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .query(&[(FILTER_PARAM, filter.as_str())]);

        let response = self.http_client.send(request_builder).await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received SAP OData response");

        let body = response.bytes().await.map_err(|err| AcctDocError::from(InfraError::from(err)))?;

        if !status.is_success() {
            let sap_error = SapError::from_response(status, &body);
            warn!(
                status = status.as_u16(),
                category = %sap_error.category(),
                hint = %sap_error.user_message(),
                "SAP OData request rejected"
            );
            return Err(sap_error.into());
        }

        let items = decode_items(&body)?;
        debug!(document = %key, count = items.len(), "decoded accounting document items");
        Ok(items)
    }
}

#[async_trait]
impl AccountingDocumentItemSource for SapApiCaller {
    async fn fetch_items(&self, key: &AccountingDocumentKey) -> Result<Vec<AccountingDocumentItem>> {
        self.get_items(key).await
    }
}
