//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of issuing (or reissuing) an OTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueOtpResult {
    /// Masked destination the code was sent to
    pub destination: String,
    /// The SMS message ID from the provider
    pub message_id: String,
    /// When the pending session stops accepting the code
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOtpResult {
    pub mobile_number: String,
    /// False when no registered user carries the verified number
    pub user_verified: bool,
}
