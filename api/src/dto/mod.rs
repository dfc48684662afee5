pub mod otp;
pub mod user;

pub use otp::{OtpSentResponse, SendOtpRequest, VerifyOtpRequest, VerifyOtpResponse};
pub use user::CreateUserRequest;
