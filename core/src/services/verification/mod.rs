//! Verification service module for SMS-based mobile number verification
//!
//! This module provides the complete OTP workflow:
//! - OTP generation and dispatch over the SMS seam
//! - Archival of every dispatched message body
//! - Resend by replacing the pending session
//! - Verification with expiry and a bounded attempt budget

mod config;
mod locks;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::SmsServiceTrait;
pub use types::{IssueOtpResult, VerifyOtpResult};
