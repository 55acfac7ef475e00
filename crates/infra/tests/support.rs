use std::io::Write;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use acctdoc_domain::{AccountingDocumentKey, ApiSettings};
use acctdoc_infra::SapApiCaller;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Path of the item entity set relative to the mock server root.
pub const ITEM_PATH: &str = "/API_OPLACCTGDOCITEMCUBE_SRV/A_OperationalAcctgDocItemCube";

/// Recorded two-item response for document 1010/2020/100000000.
pub const ITEM_RESPONSE: &str = include_str!("fixtures/accounting_document_items.json");

pub fn document_key() -> AccountingDocumentKey {
    AccountingDocumentKey::new("1010", "2020", "100000000")
}

/// Caller pointed at `base_url` with a test API key and short timeout.
pub fn caller_for(base_url: &str) -> SapApiCaller {
    let mut settings = ApiSettings::new(base_url, "test-api-key");
    settings.timeout_secs = 5;
    SapApiCaller::new(&settings).expect("caller should be created")
}

/// URL of a local port with no listener, so connections are refused.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Handle for inspecting captured log output during tests.
#[derive(Clone, Default)]
pub struct LogHandle {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogHandle {
    /// Return all captured log output.
    pub fn contents(&self) -> String {
        let guard = self.buffer.lock().expect("log mutex poisoned");
        String::from_utf8_lossy(&guard).into_owned()
    }

    /// Check whether a line at `level` contains `needle`.
    pub fn contains(&self, level: &str, needle: &str) -> bool {
        self.contents().lines().any(|line| line.contains(level) && line.contains(needle))
    }
}

pub struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut guard = self.buffer.lock().expect("log mutex poisoned");
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogHandle {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter { buffer: Arc::clone(&self.buffer) }
    }
}

/// Install a capturing subscriber for the current thread.
///
/// Keep the guard alive for as long as logs should be captured.
pub fn capture_logs() -> (LogHandle, DefaultGuard) {
    let handle = LogHandle::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(handle.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    (handle, tracing::subscriber::set_default(subscriber))
}
