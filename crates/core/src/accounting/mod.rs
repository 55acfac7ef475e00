//! Accounting document reads

pub mod service;

pub use service::{AccepterOutcome, AccepterOutput, AccountingDocumentService};
