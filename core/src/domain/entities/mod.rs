//! Domain entities representing core business objects.

pub mod message;
pub mod user;
pub mod verification_session;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use message::{ArchivedMessage, PopulatedMessage};
pub use user::User;
pub use verification_session::{VerificationSession, DEFAULT_OTP_LENGTH, DEFAULT_TTL_MINUTES};
