//! # MobileVerify Core
//!
//! Core business logic and domain layer for the MobileVerify backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    ArchivedMessage, PopulatedMessage, User, VerificationSession, DEFAULT_OTP_LENGTH,
    DEFAULT_TTL_MINUTES,
};
pub use errors::{DomainError, DomainResult};
pub use repositories::{MessageRepository, UserRepository, VerificationRepository};
pub use services::{
    IssueOtpResult, MessageService, SmsServiceTrait, UserService, VerificationService,
    VerificationServiceConfig, VerifyOtpResult,
};
