//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cihook_domain::error::CiHookError;

/// Body returned for every rejected payload, whatever the underlying reason.
pub const NO_PAYLOAD_MESSAGE: &str = "No JSON payload provided";

/// JSON error body returned by the webhook endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps handler failures to an HTTP response with a JSON `error` body.
pub enum ApiError {
    /// Error returned by the webhook service.
    App(CiHookError),
    /// The request body could not be read.
    Body(BytesRejection),
}

impl From<CiHookError> for ApiError {
    fn from(err: CiHookError) -> Self {
        Self::App(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(err: BytesRejection) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::App(CiHookError::InvalidPayload(err)) => {
                tracing::debug!(error = %err, "rejected webhook payload");
                (StatusCode::BAD_REQUEST, NO_PAYLOAD_MESSAGE.to_string())
            }
            Self::App(err @ (CiHookError::Unreadable(_) | CiHookError::Sink(_))) => {
                tracing::error!(error = %err, "webhook processing failed");
                // failure text is surfaced to the caller verbatim
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Body(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "unable to read request body");
                (rejection.status(), rejection.body_text())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
