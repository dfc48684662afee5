pub mod message;
pub mod user;
pub mod verification;

pub use message::{MessageRepository, MockMessageRepository};
pub use user::{MockUserRepository, UserRepository};
pub use verification::{MockVerificationRepository, VerificationRepository};
