//! Twilio SMS Service Implementation
//!
//! Production delivery through Twilio programmable messaging. Destinations
//! must already be in E.164 form; they are checked with `phonenumber` before
//! any request is made. Failed sends are reported, never retried.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use tracing::{debug, error, info};
use twilio::{Client, OutboundMessage};

use mv_shared::config::SmsConfig;
use mv_shared::utils::phone::mask_phone_number;

use crate::{sms::sms_service::SmsService, InfrastructureError};

/// Twilio message bodies are capped at 1600 characters
const MAX_BODY_LENGTH: usize = 1600;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
}

impl TwilioConfig {
    /// Take the Twilio credentials from the SMS channel configuration
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() {
            return Err(InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()));
        }
        if config.auth_token.is_empty() {
            return Err(InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()));
        }
        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            event = "twilio_initialized",
            "Twilio SMS service initialized"
        );

        Ok(Self { client, config })
    }

    /// Validate and normalize a destination to E.164
    pub(crate) fn validate_phone_number(&self, phone: &str) -> Result<String, InfrastructureError> {
        if !phone.starts_with('+') {
            return Err(InfrastructureError::Sms(
                "Phone number must be in E.164 format (e.g., +919876543210)".to_string(),
            ));
        }

        let parsed = phone.parse::<PhoneNumber>().map_err(|e| {
            InfrastructureError::Sms(format!("Invalid phone number format: {}", e))
        })?;
        let formatted = parsed.format().mode(Mode::E164).to_string();
        debug!(phone = %mask_phone_number(&formatted), "Validated phone number");
        Ok(formatted)
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = self.validate_phone_number(phone_number)?;
        let masked = mask_phone_number(&to);

        if message.chars().count() > MAX_BODY_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_BODY_LENGTH
            )));
        }

        let msg = OutboundMessage::new(&self.config.from_number, &to, message);

        match self.client.send_message(msg).await {
            Ok(response) => {
                info!(
                    phone = %masked,
                    sid = %response.sid,
                    event = "sms_sent",
                    "SMS sent via Twilio"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(phone = %masked, error = %e, event = "sms_failed", "Twilio rejected SMS");
                Err(InfrastructureError::Sms(format!("Twilio error: {}", e)))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
