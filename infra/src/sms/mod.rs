//! SMS Service Module
//!
//! Outbound SMS providers and the adapter that exposes them to the core
//! verification service.
//!
//! - **SMS Service Trait**: Common interface for all providers
//! - **Mock Implementation**: Logs and records messages for development
//! - **Twilio Support**: Production SMS via the Twilio API

pub mod adapter;
pub mod mock_sms;
pub mod sms_service;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use adapter::SmsServiceAdapter;
pub use mock_sms::{MockSmsService, SentSms};
pub use sms_service::SmsService;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

use mv_shared::config::{SmsConfig, SmsProvider};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an SMS service based on configuration
///
/// # Returns
///
/// The provider named by `config.provider`, or a configuration error when
/// that provider cannot be built.
pub fn create_sms_service(config: &SmsConfig) -> Result<Box<dyn SmsService>, InfrastructureError> {
    match config.provider {
        SmsProvider::Mock => {
            tracing::warn!(
                event = "sms_mock_provider",
                "Using mock SMS provider, messages will only be logged"
            );
            Ok(Box::new(MockSmsService::new()))
        }
        #[cfg(feature = "twilio-sms")]
        SmsProvider::Twilio => {
            let twilio_config = TwilioConfig::from_sms_config(config)?;
            Ok(Box::new(TwilioSmsService::new(twilio_config)?))
        }
        #[cfg(not(feature = "twilio-sms"))]
        SmsProvider::Twilio => Err(InfrastructureError::Config(
            "Twilio provider requires the twilio-sms feature".to_string(),
        )),
    }
}
