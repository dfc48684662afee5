//! Verification session persistence.

use async_trait::async_trait;

use crate::domain::entities::verification_session::VerificationSession;
use crate::errors::DomainError;

/// Repository trait for verification sessions
///
/// Sessions are keyed by mobile number; stores must reject a second session
/// for a number that already has one.
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Store a new session
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - A session already exists for the number
    async fn create(&self, session: VerificationSession) -> Result<VerificationSession, DomainError>;

    async fn find_by_mobile(
        &self,
        mobile_number: &str,
    ) -> Result<Option<VerificationSession>, DomainError>;

    /// Persist the attempt counter of an existing session
    ///
    /// Returns `Ok(false)` when the session no longer exists.
    async fn update_attempts(&self, mobile_number: &str, attempts: u32) -> Result<bool, DomainError>;

    /// Remove the session for a mobile number
    ///
    /// Returns `Ok(false)` when there was none.
    async fn delete_by_mobile(&self, mobile_number: &str) -> Result<bool, DomainError>;
}
