//! Accounting document read service - accepter dispatch

use std::sync::Arc;

use acctdoc_domain::{
    resolve_accepters, unrecognized_accepters, Accepter, AccountingDocumentItem,
    AccountingDocumentKey, Result,
};
use futures::future::join_all;
use tracing::{debug, error, info};

use crate::sap_ports::AccountingDocumentItemSource;

/// Data produced by a successful accepter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccepterOutput {
    Items(Vec<AccountingDocumentItem>),
}

impl AccepterOutput {
    /// Number of records carried by this output.
    pub fn record_count(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
        }
    }
}

/// Result of one dispatched accepter.
#[derive(Debug)]
pub struct AccepterOutcome {
    pub accepter: Accepter,
    pub result: Result<AccepterOutput>,
}

impl AccepterOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs the requested accepters for one accounting document and logs what
/// each of them returns.
pub struct AccountingDocumentService {
    items: Arc<dyn AccountingDocumentItemSource>,
}

impl AccountingDocumentService {
    /// Create a new service over the given item source
    pub fn new(items: Arc<dyn AccountingDocumentItemSource>) -> Self {
        Self { items }
    }

    /// Dispatch every requested accepter for `key` and wait for all of them.
    ///
    /// Accepters run concurrently, one task each. Failures are logged and
    /// reported in the returned outcomes; they never abort the other
    /// accepters. Unknown names are skipped without error.
    pub async fn fetch<S: AsRef<str>>(
        &self,
        key: &AccountingDocumentKey,
        accepter_names: &[S],
    ) -> Vec<AccepterOutcome> {
        for name in unrecognized_accepters(accepter_names) {
            debug!(accepter = name, "skipping unrecognized accepter");
        }

        let accepters = resolve_accepters(accepter_names);
        debug!(document = %key, count = accepters.len(), "dispatching accepters");

        join_all(accepters.into_iter().map(|accepter| self.dispatch(accepter, key))).await
    }

    async fn dispatch(&self, accepter: Accepter, key: &AccountingDocumentKey) -> AccepterOutcome {
        let result = match accepter {
            Accepter::Item => self.item(key).await.map(AccepterOutput::Items),
        };

        match &result {
            Ok(output) => info!(
                accepter = %accepter,
                document = %key,
                records = output.record_count(),
                "accepter completed"
            ),
            Err(err) => error!(
                accepter = %accepter,
                document = %key,
                error_type = err.label(),
                error = %err,
                "accepter request failed"
            ),
        }

        AccepterOutcome { accepter, result }
    }

    async fn item(&self, key: &AccountingDocumentKey) -> Result<Vec<AccountingDocumentItem>> {
        let items = self.items.fetch_items(key).await?;
        for item in &items {
            log_item(item);
        }
        Ok(items)
    }
}

fn log_item(item: &AccountingDocumentItem) {
    let record = serde_json::to_string(item).unwrap_or_default();
    info!(
        company_code = %item.company_code,
        fiscal_year = %item.fiscal_year,
        accounting_document = %item.accounting_document,
        item = %item.accounting_document_item,
        gl_account = %item.gl_account,
        amount = %item.amount_in_company_code_currency,
        currency = %item.company_code_currency,
        debit_credit = %item.debit_credit_code,
        record = %record,
        "accounting document item"
    );
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use acctdoc_domain::AcctDocError;
    use async_trait::async_trait;

    use super::*;

    struct MockItemSource {
        calls: AtomicUsize,
        response: std::result::Result<Vec<AccountingDocumentItem>, AcctDocError>,
    }

    impl MockItemSource {
        fn returning(items: Vec<AccountingDocumentItem>) -> Self {
            Self { calls: AtomicUsize::new(0), response: Ok(items) }
        }

        fn failing(err: AcctDocError) -> Self {
            Self { calls: AtomicUsize::new(0), response: Err(err) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AccountingDocumentItemSource for MockItemSource {
        async fn fetch_items(
            &self,
            _key: &AccountingDocumentKey,
        ) -> Result<Vec<AccountingDocumentItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn key() -> AccountingDocumentKey {
        AccountingDocumentKey::new("1010", "2020", "100000000")
    }

    fn item(line: &str) -> AccountingDocumentItem {
        AccountingDocumentItem {
            company_code: "1010".into(),
            fiscal_year: "2020".into(),
            accounting_document: "100000000".into(),
            accounting_document_item: line.into(),
            ..AccountingDocumentItem::default()
        }
    }

    #[tokio::test]
    async fn all_dispatches_item_once() {
        let source = Arc::new(MockItemSource::returning(vec![item("001"), item("002")]));
        let service = AccountingDocumentService::new(source.clone());

        let outcomes = service.fetch(&key(), &["All"]).await;

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].accepter, Accepter::Item);
        assert_eq!(outcomes[0].result.as_ref().unwrap().record_count(), 2);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn empty_list_dispatches_item() {
        let source = Arc::new(MockItemSource::returning(vec![item("001")]));
        let service = AccountingDocumentService::new(source.clone());

        let names: Vec<String> = Vec::new();
        let outcomes = service.fetch(&key(), &names).await;

        assert_eq!(outcomes.len(), 1);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn unknown_accepters_make_no_call() {
        let source = Arc::new(MockItemSource::returning(vec![item("001")]));
        let service = AccountingDocumentService::new(source.clone());

        let outcomes = service.fetch(&key(), &["Header", "Partner"]).await;

        assert!(outcomes.is_empty());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn repeated_accepter_is_called_once() {
        let source = Arc::new(MockItemSource::returning(vec![item("001")]));
        let service = AccountingDocumentService::new(source.clone());

        let outcomes = service.fetch(&key(), &["Item", "Header", "Item"]).await;

        assert_eq!(outcomes.len(), 1);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn source_failure_is_reported_not_raised() {
        let source = Arc::new(MockItemSource::failing(AcctDocError::Network(
            "HTTP connection failure".into(),
        )));
        let service = AccountingDocumentService::new(source.clone());

        let outcomes = service.fetch(&key(), &["Item"]).await;

        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].is_ok());
        assert!(matches!(outcomes[0].result, Err(AcctDocError::Network(_))));
    }
}
