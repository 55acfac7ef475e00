//! SAP S/4HANA Cloud integration
//!
//! Reads accounting document line items from the
//! `API_OPLACCTGDOCITEMCUBE_SRV` OData service.
//!
//! # Architecture
//!
//! - **Caller**: `SapApiCaller` - issues the OData GET and implements the
//!   `AccountingDocumentItemSource` port
//! - **Query**: `$filter` expression and entity set URL construction
//! - **Formatter**: decodes the OData v2 envelope into item records
//! - **Errors**: classifies rejected requests by status and error body
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use acctdoc_core::AccountingDocumentService;
//! use acctdoc_domain::{AccountingDocumentKey, ApiSettings};
//! use acctdoc_infra::integrations::sap::SapApiCaller;
//!
//! # async fn example() -> acctdoc_domain::Result<()> {
//! let caller = SapApiCaller::new(&ApiSettings::sandbox("my-api-key"))?;
//! let service = AccountingDocumentService::new(Arc::new(caller));
//!
//! let key = AccountingDocumentKey::new("1010", "2020", "100000000");
//! for outcome in service.fetch(&key, &["Item"]).await {
//!     println!("{}: ok={}", outcome.accepter, outcome.is_ok());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Transport errors: `AcctDocError::Network`, never retried
//! - Rejected requests: classified by `SapError`, with the OData error
//!   message attached when present
//! - Malformed bodies: `AcctDocError::Decode`, the whole response is dropped
pub mod client;
pub mod errors;
pub mod formatter;
pub mod query;

pub use client::SapApiCaller;
pub use errors::{SapError, SapErrorCategory};
pub use formatter::decode_items;
pub use query::{item_filter, item_url};
