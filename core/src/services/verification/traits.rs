//! Trait for SMS channel integration

use async_trait::async_trait;

/// Outbound SMS channel as seen by the verification service
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send `body` to the dialable number `to`, returning the provider message id
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, String>;
}
