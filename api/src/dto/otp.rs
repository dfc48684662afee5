use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of send-otp and resend-otp. Both fields are optional: the number
/// defaults to the user's registered one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    #[serde(default)]
    #[validate(length(min = 6, max = 20))]
    pub mobile_number: Option<String>,

    /// Only honoured when `OTP_ACCEPT_CLIENT_CODE` is enabled
    #[serde(default)]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(length(min = 6, max = 20, message = "Mobile number must be 6 to 20 characters"))]
    pub mobile_number: String,

    #[validate(length(min = 1, max = 10, message = "OTP is required"))]
    pub entered_otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpSentResponse {
    /// Masked destination, e.g. "+91******3210"
    pub destination: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub mobile_number: String,
    pub is_verified: bool,
}
