//! Webhook handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod webhook;

use axum::Router;
use axum::routing::get;

use cihook_app::ports::ReceiptLog;

use crate::state::AppState;

/// Build the root sub-router: `GET /` and `POST /`.
pub fn routes<L>() -> Router<AppState<L>>
where
    L: ReceiptLog + Send + Sync + 'static,
{
    Router::new().route("/", get(webhook::ack).post(webhook::receive::<L>))
}
