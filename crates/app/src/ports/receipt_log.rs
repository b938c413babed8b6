//! Receipt log port: where accepted payloads are reported.

use std::future::Future;

use cihook_domain::error::CiHookError;
use cihook_domain::receipt::Receipt;

/// Records receipts for accepted webhook payloads.
///
/// Implementations must tolerate concurrent calls; every request handler
/// shares the same instance.
pub trait ReceiptLog {
    /// Record one receipt.
    fn record(&self, receipt: &Receipt) -> impl Future<Output = Result<(), CiHookError>> + Send;
}

impl<T: ReceiptLog + Send + Sync> ReceiptLog for std::sync::Arc<T> {
    fn record(&self, receipt: &Receipt) -> impl Future<Output = Result<(), CiHookError>> + Send {
        (**self).record(receipt)
    }
}
