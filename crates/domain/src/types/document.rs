//! Accounting document key and line-item record
//!
//! Wire names follow the `A_OperationalAcctgDocItemCube` entity of the
//! `API_OPLACCTGDOCITEMCUBE_SRV` OData service. Values are kept as strings,
//! exactly as the service delivers them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::odata_date::parse_odata_date;

/// Lookup key of a single accounting document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountingDocumentKey {
    pub company_code: String,
    pub fiscal_year: String,
    pub accounting_document: String,
}

impl AccountingDocumentKey {
    pub fn new(
        company_code: impl Into<String>,
        fiscal_year: impl Into<String>,
        accounting_document: impl Into<String>,
    ) -> Self {
        Self {
            company_code: company_code.into(),
            fiscal_year: fiscal_year.into(),
            accounting_document: accounting_document.into(),
        }
    }
}

impl std::fmt::Display for AccountingDocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.company_code, self.fiscal_year, self.accounting_document)
    }
}

/// One line item of an accounting document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AccountingDocumentItem {
    // Document references
    pub company_code: String,
    pub fiscal_year: String,
    pub accounting_document: String,
    pub accounting_document_item: String,
    pub accounting_document_type: String,
    pub accounting_document_category: String,
    pub ledger: String,
    pub source_ledger: String,
    pub ledger_gl_line_item: String,
    pub financial_transaction_type: String,
    pub business_transaction_type: String,
    pub controlling_bus_transac_type: String,
    pub reference_document_type: String,
    pub logical_system: String,
    pub reference_document_context: String,
    pub reference_document: String,
    pub reference_document_item: String,
    pub original_reference_document: String,
    pub is_reversal: String,
    pub is_reversed: String,
    pub reversal_reference_document: String,
    pub clearing_accounting_document: String,
    pub clearing_date: String,
    pub invoice_reference: String,
    pub sales_document: String,
    pub purchasing_document: String,

    // Account assignment
    pub chart_of_accounts: String,
    pub controlling_area: String,
    #[serde(rename = "GLAccount")]
    pub gl_account: String,
    #[serde(rename = "GLAccountType")]
    pub gl_account_type: String,
    pub financial_account_type: String,
    pub customer: String,
    pub supplier: String,
    pub cost_center: String,
    pub profit_center: String,
    pub functional_area: String,
    pub business_area: String,
    pub segment: String,
    #[serde(rename = "WBSElement")]
    pub wbs_element: String,
    pub tax_code: String,

    // Amounts
    pub amount_in_company_code_currency: String,
    pub company_code_currency: String,
    pub amount_in_transaction_currency: String,
    pub transaction_currency: String,
    pub amount_in_global_currency: String,
    pub global_currency: String,
    pub quantity: String,
    pub base_unit: String,

    // Posting data
    pub posting_date: String,
    pub document_date: String,
    pub fiscal_period: String,
    pub posting_key: String,
    pub debit_credit_code: String,
    pub document_item_text: String,
    pub assignment_reference: String,
    pub accounting_doc_created_by_user: String,
}

impl AccountingDocumentItem {
    /// Posting date decoded from the OData `/Date(ms)/` literal.
    #[must_use]
    pub fn posting_date(&self) -> Option<NaiveDate> {
        parse_odata_date(&self.posting_date)
    }

    #[must_use]
    pub fn document_date(&self) -> Option<NaiveDate> {
        parse_odata_date(&self.document_date)
    }
}
