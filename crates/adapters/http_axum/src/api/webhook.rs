//! Handlers for the webhook endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cihook_app::ports::ReceiptLog;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the receive endpoint.
pub enum ReceiveResponse {
    /// Payload accepted and recorded.
    Ok,
}

impl IntoResponse for ReceiveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => (StatusCode::OK, "OK").into_response(),
        }
    }
}

/// `GET /`: acknowledge; no side effects.
pub async fn ack() -> &'static str {
    "OK"
}

/// `POST /`: accept a webhook payload and record the configured field.
pub async fn receive<L>(
    State(state): State<AppState<L>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ReceiveResponse, ApiError>
where
    L: ReceiptLog + Send + Sync + 'static,
{
    let body = body?;
    state.webhook_service.receive(&body).await?;
    Ok(ReceiveResponse::Ok)
}
