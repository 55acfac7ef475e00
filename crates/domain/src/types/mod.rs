//! Domain types and models

pub mod accepter;
pub mod document;

pub use accepter::{resolve_accepters, unrecognized_accepters, Accepter};
pub use document::{AccountingDocumentItem, AccountingDocumentKey};
