//! # Accounting Document Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client implementation
//! - SAP OData integration (caller, query builder, output formatter)
//! - Settings and input document loading
//!
//! ## Architecture
//! - Implements traits defined in `acctdoc-core`
//! - Depends on `acctdoc-domain` and `acctdoc-core`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
pub use integrations::sap::SapApiCaller;
