//! Axum router assembly.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;

use cihook_app::ports::ReceiptLog;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the webhook routes at `/`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
/// Unknown paths fall through to axum's default `404`, unsupported methods
/// on `/` to `405`. Request bodies are not size-limited.
pub fn build<L>(state: AppState<L>) -> Router
where
    L: ReceiptLog + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes::<L>())
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
