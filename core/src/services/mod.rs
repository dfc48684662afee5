//! Business services containing domain logic and use cases.

pub mod message;
pub mod user;
pub mod verification;

// Re-export commonly used types
pub use message::MessageService;
pub use user::UserService;
pub use verification::{
    IssueOtpResult, SmsServiceTrait, VerificationService, VerificationServiceConfig,
    VerifyOtpResult,
};
