//! Mock SMS Service Implementation
//!
//! Logs messages instead of sending them and keeps a copy of everything it
//! accepted, so development setups and tests can read the dispatched OTP.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use mv_shared::utils::phone::{is_valid_international_phone, mask_phone_number};

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// A message accepted by the mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub message_id: String,
    pub to: String,
    pub body: String,
}

/// Mock SMS service for development and testing
#[derive(Clone, Default)]
pub struct MockSmsService {
    sent: Arc<RwLock<Vec<SentSms>>>,
    simulate_failure: bool,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that rejects every message
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Messages accepted so far, oldest first
    pub async fn sent_messages(&self) -> Vec<SentSms> {
        self.sent.read().await.clone()
    }

    /// Most recent message sent to `to`
    pub async fn last_message_to(&self, to: &str) -> Option<SentSms> {
        self.sent.read().await.iter().rev().find(|m| m.to == to).cloned()
    }

    pub async fn message_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let masked_phone = mask_phone_number(phone_number);

        if !is_valid_international_phone(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                masked_phone
            )));
        }

        if self.simulate_failure {
            warn!(phone = %masked_phone, "Mock SMS service simulating failure");
            return Err(InfrastructureError::Sms(
                "Simulated SMS sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());

        // Development provider: the body is logged so the OTP can be read
        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            body = %message,
            "SMS captured by mock provider"
        );

        self.sent.write().await.push(SentSms {
            message_id: message_id.clone(),
            to: phone_number.to_string(),
            body: message.to_string(),
        });

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
