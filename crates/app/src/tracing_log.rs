//! Receipt log backed by the `tracing` subscriber.

use std::future::Future;

use cihook_domain::error::CiHookError;
use cihook_domain::receipt::Receipt;

use crate::ports::ReceiptLog;

/// Emits one `INFO` event per receipt.
///
/// Line formatting and atomic writes are left to the installed subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReceiptLog;

impl TracingReceiptLog {
    /// Create a new tracing-backed receipt log.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReceiptLog for TracingReceiptLog {
    fn record(&self, receipt: &Receipt) -> impl Future<Output = Result<(), CiHookError>> + Send {
        tracing::info!(
            field = %receipt.field,
            received_at = %receipt.received_at,
            "Received {}: {}",
            receipt.field,
            receipt.display_value()
        );
        async { Ok(()) }
    }
}
