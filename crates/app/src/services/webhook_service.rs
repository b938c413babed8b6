//! Webhook service: accept a raw body, extract the configured field, record it.

use cihook_domain::error::CiHookError;
use cihook_domain::payload::Payload;
use cihook_domain::receipt::Receipt;

use crate::ports::ReceiptLog;

/// Field extracted when none is configured.
pub const DEFAULT_FIELD: &str = "foo";

/// Application service handling inbound webhook payloads.
///
/// Stateless across calls: every request is validated and recorded
/// independently.
pub struct WebhookService<L> {
    log: L,
    field: String,
}

impl<L: ReceiptLog> WebhookService<L> {
    /// Create a new service that records receipts into `log` for `field`.
    pub fn new(log: L, field: impl Into<String>) -> Self {
        Self {
            log,
            field: field.into(),
        }
    }

    /// Key looked up in each payload.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Validate `body`, extract the configured field and record a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`CiHookError::InvalidPayload`] if the body is not JSON or is
    /// falsy, [`CiHookError::Unreadable`] if it is some other non-object
    /// value, or the error propagated from the receipt log.
    pub async fn receive(&self, body: &[u8]) -> Result<Receipt, CiHookError> {
        let payload = Payload::from_slice(body)?;
        let receipt = Receipt::extract(&payload, &self.field);
        self.log.record(&receipt).await?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cihook_domain::error::{PayloadError, ShapeError, SinkError};
    use serde_json::json;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLog {
        receipts: Mutex<Vec<Receipt>>,
    }

    impl ReceiptLog for RecordingLog {
        fn record(
            &self,
            receipt: &Receipt,
        ) -> impl Future<Output = Result<(), CiHookError>> + Send {
            self.receipts.lock().unwrap().push(receipt.clone());
            async { Ok(()) }
        }
    }

    struct FailingLog;

    impl ReceiptLog for FailingLog {
        fn record(
            &self,
            _receipt: &Receipt,
        ) -> impl Future<Output = Result<(), CiHookError>> + Send {
            async { Err(SinkError::new("log stream closed").into()) }
        }
    }

    fn make_service() -> WebhookService<RecordingLog> {
        WebhookService::new(RecordingLog::default(), DEFAULT_FIELD)
    }

    #[tokio::test]
    async fn should_record_value_exactly_once() {
        let svc = make_service();

        let receipt = svc.receive(br#"{"foo": "bar"}"#).await.unwrap();
        assert_eq!(receipt.value, Some(json!("bar")));

        let recorded = svc.log.receipts.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].value, Some(json!("bar")));
    }

    #[tokio::test]
    async fn should_record_none_when_field_missing() {
        let svc = make_service();

        let receipt = svc.receive(br#"{"baz": 1}"#).await.unwrap();
        assert_eq!(receipt.field, "foo");
        assert_eq!(receipt.value, None);
        assert_eq!(svc.log.receipts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_invalid_body_without_recording() {
        let svc = make_service();

        let bodies: [&[u8]; 5] = [b"", b"not json", b"null", b"{}", b"[]"];
        for body in bodies {
            let err = svc.receive(body).await.unwrap_err();
            assert!(matches!(err, CiHookError::InvalidPayload(_)));
        }
        assert!(svc.log.receipts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_empty_object() {
        let svc = make_service();

        let err = svc.receive(b"{}").await.unwrap_err();
        assert!(matches!(
            err,
            CiHookError::InvalidPayload(PayloadError::Empty)
        ));
    }

    #[tokio::test]
    async fn should_fail_without_recording_for_non_object_payload() {
        let svc = make_service();

        let err = svc.receive(b"[1]").await.unwrap_err();
        assert!(matches!(
            err,
            CiHookError::Unreadable(ShapeError::NotAnObject { kind: "array" })
        ));
        assert!(svc.log.receipts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_log_failure() {
        let svc = WebhookService::new(FailingLog, DEFAULT_FIELD);

        let err = svc.receive(br#"{"foo": 1}"#).await.unwrap_err();
        assert!(matches!(err, CiHookError::Sink(_)));
        assert_eq!(err.to_string(), "failed to record receipt: log stream closed");
    }

    #[tokio::test]
    async fn should_extract_configured_field() {
        let svc = WebhookService::new(RecordingLog::default(), "text");
        assert_eq!(svc.field(), "text");

        let receipt = svc
            .receive(br#"{"text": ":white_check_mark: All is well", "foo": "ignored"}"#)
            .await
            .unwrap();
        assert_eq!(receipt.value, Some(json!(":white_check_mark: All is well")));
    }

    #[tokio::test]
    async fn should_work_through_shared_arc_log() {
        let log = std::sync::Arc::new(RecordingLog::default());
        let svc = WebhookService::new(std::sync::Arc::clone(&log), DEFAULT_FIELD);

        svc.receive(br#"{"foo": 1}"#).await.unwrap();
        svc.receive(br#"{"foo": 2}"#).await.unwrap();

        let values: Vec<_> = log
            .receipts
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.value.clone())
            .collect();
        assert_eq!(values, vec![Some(json!(1)), Some(json!(2))]);
    }
}
