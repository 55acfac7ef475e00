//! Application constants
//!
//! Centralized location for service paths and configuration defaults.

// OData service
pub const ACCOUNTING_DOCUMENT_SERVICE: &str = "API_OPLACCTGDOCITEMCUBE_SRV";
pub const ACCOUNTING_DOCUMENT_ITEM_ENTITY: &str = "A_OperationalAcctgDocItemCube";
pub const FILTER_PARAM: &str = "$filter";
pub const API_KEY_HEADER: &str = "APIKey";

// Accepter names
pub const ACCEPTER_ALL: &str = "All";

// Configuration defaults
pub const DEFAULT_BASE_URL: &str = "https://sandbox.api.sap.com/s4hanacloud/sap/opu/odata/sap";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_INPUT_PATH: &str = "./Inputs/SDC_Accounting_Document_Item_sample.json";
pub const DEFAULT_USER_AGENT: &str = concat!("sap-acctdoc-reads/", env!("CARGO_PKG_VERSION"));
