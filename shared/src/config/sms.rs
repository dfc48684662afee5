//! SMS channel configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Which SMS provider delivers outbound messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Logs messages instead of sending them
    #[default]
    Mock,
    /// Twilio programmable messaging
    Twilio,
}

impl std::str::FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(SmsProvider::Mock),
            "twilio" => Ok(SmsProvider::Twilio),
            other => Err(format!("Unknown SMS provider: {}", other)),
        }
    }
}

/// Outbound SMS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Provider used for delivery
    pub provider: SmsProvider,

    /// Twilio account SID
    #[serde(default)]
    pub account_sid: String,

    /// Twilio auth token
    #[serde(default, skip_serializing)]
    pub auth_token: String,

    /// Sender phone number (E.164)
    #[serde(default)]
    pub from_number: String,

    /// Prefix prepended to every destination number
    #[serde(default = "default_country_prefix")]
    pub country_prefix: String,

    /// Upper bound for a single dispatch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            country_prefix: default_country_prefix(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SmsConfig {
    /// Create from environment variables.
    ///
    /// `TWILIO_PHONE_NUMBER` is accepted as an alias for `TWILIO_FROM_NUMBER`.
    pub fn from_env() -> Self {
        let provider = std::env::var("SMS_PROVIDER")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();

        Self {
            provider,
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: std::env::var("TWILIO_FROM_NUMBER")
                .or_else(|_| std::env::var("TWILIO_PHONE_NUMBER"))
                .unwrap_or_default(),
            country_prefix: std::env::var("SMS_COUNTRY_PREFIX")
                .unwrap_or_else(|_| default_country_prefix()),
            timeout_secs: env_or("SMS_TIMEOUT_SECS", default_timeout_secs()),
        }
    }
}

fn default_country_prefix() -> String {
    String::from("+91")
}

fn default_timeout_secs() -> u64 {
    10
}
