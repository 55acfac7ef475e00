//! OData request construction for the accounting document item service.

use acctdoc_domain::constants::{ACCOUNTING_DOCUMENT_ITEM_ENTITY, ACCOUNTING_DOCUMENT_SERVICE};
use acctdoc_domain::AccountingDocumentKey;

/// `$filter` expression selecting every item of one accounting document.
///
/// Values are substituted verbatim; the whole parameter is URL-encoded when
/// the request is built.
pub fn item_filter(key: &AccountingDocumentKey) -> String {
    format!(
        "CompanyCode eq '{}' and FiscalYear eq '{}' and AccountingDocument eq '{}'",
        key.company_code, key.fiscal_year, key.accounting_document
    )
}

/// URL of an entity set of the accounting document service.
fn entity_set_url(base_url: &str, entity_set: &str) -> String {
    [base_url.trim_end_matches('/'), ACCOUNTING_DOCUMENT_SERVICE, entity_set].join("/")
}

/// URL of the line-item entity set.
pub fn item_url(base_url: &str) -> String {
    entity_set_url(base_url, ACCOUNTING_DOCUMENT_ITEM_ENTITY)
}
