//! Configuration loading
//!
//! This module loads SAP connection settings from the environment and the
//! per-run input document from disk.

pub mod input;
pub mod loader;

// Re-export commonly used items
pub use input::read_input;
pub use loader::{load_api_key, load_api_settings, read_api_key_file, resolve_input_path};
