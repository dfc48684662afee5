//! Unit tests for Twilio SMS service. No request reaches Twilio: every case
//! fails validation first.

use mv_shared::config::{SmsConfig, SmsProvider};

use crate::sms::sms_service::SmsService;
use crate::sms::{TwilioConfig, TwilioSmsService};
use crate::InfrastructureError;

fn sms_config() -> SmsConfig {
    SmsConfig {
        provider: SmsProvider::Twilio,
        account_sid: "ACtest_account_sid".to_string(),
        auth_token: "test_auth_token".to_string(),
        from_number: "+15551234567".to_string(),
        ..SmsConfig::default()
    }
}

fn service() -> TwilioSmsService {
    TwilioSmsService::new(TwilioConfig::from_sms_config(&sms_config()).unwrap()).unwrap()
}

#[test]
fn test_twilio_config_from_sms_config() {
    let config = TwilioConfig::from_sms_config(&sms_config()).unwrap();
    assert_eq!(config.account_sid, "ACtest_account_sid");
    assert_eq!(config.auth_token, "test_auth_token");
    assert_eq!(config.from_number, "+15551234567");
}

#[test]
fn test_twilio_config_validation() {
    let missing_sid = SmsConfig {
        account_sid: String::new(),
        ..sms_config()
    };
    assert!(matches!(
        TwilioConfig::from_sms_config(&missing_sid),
        Err(InfrastructureError::Config(_))
    ));

    let missing_token = SmsConfig {
        auth_token: String::new(),
        ..sms_config()
    };
    assert!(TwilioConfig::from_sms_config(&missing_token).is_err());

    let local_sender = SmsConfig {
        from_number: "5551234567".to_string(),
        ..sms_config()
    };
    assert!(TwilioConfig::from_sms_config(&local_sender).is_err());
}

#[test]
fn test_phone_number_validation() {
    let service = service();

    assert_eq!(
        service.validate_phone_number("+919876543210").unwrap(),
        "+919876543210"
    );
    assert!(service.validate_phone_number("9876543210").is_err());
    assert!(service.validate_phone_number("+abc").is_err());
}

#[tokio::test]
async fn test_send_rejects_invalid_destination() {
    let result = service().send_sms("9876543210", "hello").await;
    assert!(matches!(result, Err(InfrastructureError::Sms(_))));
}

#[tokio::test]
async fn test_send_rejects_oversized_body() {
    let body = "x".repeat(1601);
    let result = service().send_sms("+919876543210", &body).await;

    match result {
        Err(InfrastructureError::Sms(msg)) => assert!(msg.contains("maximum length")),
        other => panic!("Expected length error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_provider_name() {
    assert_eq!(service().provider_name(), "Twilio");
}
