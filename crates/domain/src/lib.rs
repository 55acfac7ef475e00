//! # Accounting Document Domain
//!
//! Business domain types for SAP accounting document reads.
//!
//! This crate contains:
//! - The document lookup key and line-item record
//! - Accepter names and their expansion rules
//! - Input document and API settings structures
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::parse_odata_date;
