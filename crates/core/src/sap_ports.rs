//! SAP integration port interfaces

use acctdoc_domain::{AccountingDocumentItem, AccountingDocumentKey, Result};
use async_trait::async_trait;

/// Source of accounting document line items.
#[async_trait]
pub trait AccountingDocumentItemSource: Send + Sync {
    /// Fetch every line item of the document identified by `key`.
    async fn fetch_items(&self, key: &AccountingDocumentKey) -> Result<Vec<AccountingDocumentItem>>;
}
