//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CiHookError`]
//! via `#[from]`.

/// Top-level error returned by application use-cases.
#[derive(Debug, thiserror::Error)]
pub enum CiHookError {
    /// The request body is not an acceptable payload.
    #[error("invalid payload")]
    InvalidPayload(#[from] PayloadError),

    /// The body is valid JSON but its fields cannot be read.
    #[error(transparent)]
    Unreadable(#[from] ShapeError),

    /// A receipt could not be recorded.
    #[error("failed to record receipt: {0}")]
    Sink(#[from] SinkError),
}

/// Reasons a request body is rejected as "no payload".
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The body is not valid JSON (including an empty body).
    #[error("payload is not valid JSON")]
    Malformed(#[source] serde_json::Error),

    /// The body parsed to a falsy value: `null`, `false`, `0`, `""`, `[]` or `{}`.
    #[error("payload is empty")]
    Empty,
}

/// A non-empty JSON body that has no fields to look up.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// The body parsed to a non-empty value that is not an object.
    #[error("cannot read fields from a JSON {kind}")]
    NotAnObject {
        /// JSON type name of the received value.
        kind: &'static str,
    },
}

/// Failure reported by a receipt log implementation.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SinkError {
    /// Human-readable failure description.
    pub message: String,
}

impl SinkError {
    /// Build a sink error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
