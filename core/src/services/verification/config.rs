//! Configuration for the verification service

use std::time::Duration;

use mv_shared::config::{OtpConfig, SmsConfig};

use crate::domain::entities::verification_session::{DEFAULT_OTP_LENGTH, DEFAULT_TTL_MINUTES};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of digits in a generated OTP
    pub otp_length: usize,
    /// Minutes before a pending session expires
    pub ttl_minutes: i64,
    /// Failed comparisons allowed per session; `None` for unlimited
    pub max_attempts: Option<u32>,
    /// Upper bound on a single SMS dispatch
    pub dispatch_timeout: Duration,
    /// Prefix prepended to registered numbers to form the destination
    pub country_prefix: String,
    /// Use a caller-supplied OTP when one is present
    pub accept_client_otp: bool,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            otp_length: DEFAULT_OTP_LENGTH,
            ttl_minutes: DEFAULT_TTL_MINUTES,
            max_attempts: Some(5),
            dispatch_timeout: Duration::from_secs(10),
            country_prefix: "+91".to_string(),
            accept_client_otp: false,
        }
    }
}

impl VerificationServiceConfig {
    /// Build from the application's OTP policy and SMS channel settings
    pub fn from_settings(otp: &OtpConfig, sms: &SmsConfig) -> Self {
        Self {
            otp_length: otp.length,
            ttl_minutes: otp.ttl_minutes,
            max_attempts: otp.attempt_budget(),
            dispatch_timeout: Duration::from_secs(sms.timeout_secs),
            country_prefix: sms.country_prefix.clone(),
            accept_client_otp: otp.accept_client_code,
        }
    }
}
