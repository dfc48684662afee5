//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and every operation returns a `DomainError` on
//! storage failure, so implementations must translate their own error types
//! at this boundary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use mv_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_mobile("9999999999").await? {
///     Some(user) => println!("User found: {}", user.id),
///     None => println!("User not found"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - The mobile number is already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find every user whose id is in `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError>;

    /// Find a user by registered mobile number
    async fn find_by_mobile(&self, mobile_number: &str) -> Result<Option<User>, DomainError>;

    /// All users, oldest first
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Set `is_verified` on the user registered with `mobile_number`
    ///
    /// Returns `Ok(false)` when no user has that number.
    async fn mark_verified_by_mobile(&self, mobile_number: &str) -> Result<bool, DomainError>;
}
