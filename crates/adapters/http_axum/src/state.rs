//! Shared application state for axum handlers.

use std::sync::Arc;

use cihook_app::ports::ReceiptLog;
use cihook_app::services::webhook_service::WebhookService;

/// Application state shared across all axum handlers.
///
/// Generic over the receipt log to avoid dynamic dispatch. `Clone` is
/// implemented manually so `L` itself does not need to be `Clone`; only the
/// `Arc` wrapper is cloned.
pub struct AppState<L> {
    /// Webhook intake service.
    pub webhook_service: Arc<WebhookService<L>>,
}

impl<L> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            webhook_service: Arc::clone(&self.webhook_service),
        }
    }
}

impl<L> AppState<L>
where
    L: ReceiptLog + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(webhook_service: WebhookService<L>) -> Self {
        Self {
            webhook_service: Arc::new(webhook_service),
        }
    }
}
