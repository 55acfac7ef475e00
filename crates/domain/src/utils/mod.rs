//! Domain utilities

pub mod odata_date;

pub use odata_date::parse_odata_date;
