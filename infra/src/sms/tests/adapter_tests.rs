use std::sync::Arc;

use mv_core::services::verification::SmsServiceTrait;

use crate::sms::{MockSmsService, SmsServiceAdapter};

#[tokio::test]
async fn test_adapter_forwards_to_provider() {
    let mock = Arc::new(MockSmsService::new());
    let adapter = SmsServiceAdapter::new(mock.clone());

    let id = adapter.send_sms("+919876543210", "hello").await.unwrap();

    assert_eq!(adapter.provider_name(), "Mock");
    assert_eq!(mock.sent_messages().await[0].message_id, id);
}

#[tokio::test]
async fn test_adapter_stringifies_errors() {
    let adapter = SmsServiceAdapter::new(Arc::new(MockSmsService::failing()));

    let err = adapter.send_sms("+919876543210", "hello").await.unwrap_err();
    assert!(err.contains("Simulated SMS sending failure"));
}
