//! SMS Service Trait Adapter
//!
//! Bridges any infrastructure `SmsService` to the core `SmsServiceTrait`
//! consumed by the verification service.

use std::sync::Arc;

use async_trait::async_trait;
use mv_core::services::verification::SmsServiceTrait;

use super::sms_service::SmsService;

/// Adapter that implements the core SmsServiceTrait for a provider
#[derive(Clone)]
pub struct SmsServiceAdapter {
    inner: Arc<dyn SmsService>,
}

impl SmsServiceAdapter {
    pub fn new(inner: Arc<dyn SmsService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

impl From<Box<dyn SmsService>> for SmsServiceAdapter {
    fn from(inner: Box<dyn SmsService>) -> Self {
        Self::new(Arc::from(inner))
    }
}

#[async_trait]
impl SmsServiceTrait for SmsServiceAdapter {
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, String> {
        self.inner
            .send_sms(to, body)
            .await
            .map_err(|e| e.to_string())
    }
}
