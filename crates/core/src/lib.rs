//! # Accounting Document Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the SAP item source
//! - The accepter dispatch service
//!
//! ## Architecture Principles
//! - Only depends on `acctdoc-domain`
//! - No HTTP or file system code
//! - All external dependencies via traits

pub mod accounting;
pub mod sap_ports;

pub use accounting::{AccepterOutcome, AccepterOutput, AccountingDocumentService};
pub use sap_ports::AccountingDocumentItemSource;
