//! SAP accounting document item reader
//!
//! Reads an input document naming one accounting document, queries the SAP
//! OData item cube for it with every requested accepter, and logs the
//! returned line items.
//!
//! Usage: `sap-acctdoc-reads [INPUT_PATH]`

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use acctdoc_core::AccountingDocumentService;
use acctdoc_infra::config::{load_api_settings, read_input, resolve_input_path};
use acctdoc_infra::SapApiCaller;
use logging::{init_tracing, LogFormat};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // .env must be loaded before the log format is read
    let dotenv = dotenvy::dotenv();

    if let Err(err) = init_tracing(LogFormat::from_env()) {
        // No subscriber to report through
        #[allow(clippy::print_stderr)]
        {
            eprintln!("failed to initialize logging: {err}");
        }
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "could not load .env file"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "sap-acctdoc-reads aborted");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let input_path = resolve_input_path(std::env::args_os().nth(1).map(PathBuf::from));
    let input = read_input(&input_path)?;
    let settings = load_api_settings()?;

    let caller = SapApiCaller::new(&settings)?;
    let service = AccountingDocumentService::new(Arc::new(caller));

    let key = &input.accounting_document;
    info!(document = %key, accepters = ?input.accepter, "reading accounting document");

    let outcomes = service.fetch(key, &input.accepter).await;
    let failed = outcomes.iter().filter(|outcome| !outcome.is_ok()).count();

    info!(document = %key, dispatched = outcomes.len(), failed, "finished");
    Ok(())
}
