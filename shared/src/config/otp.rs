//! One-time passcode policy configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// OTP issuance and verification policy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Number of digits in a generated code
    pub length: usize,

    /// Session lifetime in minutes
    pub ttl_minutes: i64,

    /// Failed comparisons allowed per session; 0 means unlimited
    pub max_attempts: u32,

    /// Honour an OTP supplied by the caller instead of generating one
    #[serde(default)]
    pub accept_client_code: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: 6,
            ttl_minutes: 10,
            max_attempts: 5,
            accept_client_code: false,
        }
    }
}

/// Longest accepted session lifetime
pub const MAX_TTL_MINUTES: i64 = 24 * 60;

impl OtpConfig {
    /// Create from `OTP_LENGTH`, `OTP_TTL_MINUTES`, `OTP_MAX_ATTEMPTS` and
    /// `OTP_ACCEPT_CLIENT_CODE`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            length: env_or("OTP_LENGTH", defaults.length),
            ttl_minutes: env_or("OTP_TTL_MINUTES", defaults.ttl_minutes),
            max_attempts: env_or("OTP_MAX_ATTEMPTS", defaults.max_attempts),
            accept_client_code: env_or("OTP_ACCEPT_CLIENT_CODE", defaults.accept_client_code),
        }
        .bounded()
    }

    /// Clamp length to 4..=10 digits and the lifetime to one minute..one day
    pub fn bounded(self) -> Self {
        Self {
            length: self.length.clamp(4, 10),
            ttl_minutes: self.ttl_minutes.clamp(1, MAX_TTL_MINUTES),
            ..self
        }
    }

    /// Attempt budget, `None` when guessing is unlimited
    pub fn attempt_budget(&self) -> Option<u32> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OtpConfig::default();
        assert_eq!(config.length, 6);
        assert_eq!(config.ttl_minutes, 10);
        assert_eq!(config.attempt_budget(), Some(5));
        assert!(!config.accept_client_code);
    }

    #[test]
    fn test_zero_attempts_is_unlimited() {
        let config = OtpConfig {
            max_attempts: 0,
            ..OtpConfig::default()
        };
        assert_eq!(config.attempt_budget(), None);
    }

    #[test]
    fn test_bounded_clamps_out_of_range_values() {
        let huge = OtpConfig {
            length: 64,
            ttl_minutes: i64::MAX,
            ..OtpConfig::default()
        }
        .bounded();
        assert_eq!(huge.length, 10);
        assert_eq!(huge.ttl_minutes, MAX_TTL_MINUTES);

        let tiny = OtpConfig {
            length: 1,
            ttl_minutes: -5,
            ..OtpConfig::default()
        }
        .bounded();
        assert_eq!(tiny.length, 4);
        assert_eq!(tiny.ttl_minutes, 1);
    }

    #[test]
    fn test_bounded_keeps_defaults() {
        let config = OtpConfig::default().bounded();
        assert_eq!(config.length, 6);
        assert_eq!(config.ttl_minutes, 10);
    }
}
