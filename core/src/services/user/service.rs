use std::sync::Arc;

use mv_shared::utils::phone::{
    is_valid_international_phone, is_valid_mobile_number, mask_phone_number,
    normalize_phone_number,
};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// User directory service
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Register a new, unverified user
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Conflict)` - A user with this mobile number exists
    /// * `Err(DomainError::Validation)` - A field is blank or the number is malformed
    pub async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        mobile_number: &str,
    ) -> DomainResult<User> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let mobile_number = normalize_phone_number(mobile_number);

        if first_name.is_empty() || last_name.is_empty() {
            return Err(DomainError::validation("First name and last name are required"));
        }
        if !is_valid_mobile_number(&mobile_number) && !is_valid_international_phone(&mobile_number) {
            return Err(DomainError::validation("Invalid mobile number"));
        }

        if self
            .user_repository
            .find_by_mobile(&mobile_number)
            .await?
            .is_some()
        {
            tracing::info!(
                mobile = %mask_phone_number(&mobile_number),
                event = "user_create_conflict",
                "Rejected duplicate registration"
            );
            return Err(DomainError::conflict(
                "User with this mobile number already exists",
            ));
        }

        let user = User::new(
            first_name.to_string(),
            last_name.to_string(),
            mobile_number,
        );
        let created = self.user_repository.create(user).await?;

        tracing::info!(
            user_id = %created.id,
            mobile = %mask_phone_number(&created.mobile_number),
            event = "user_created",
            "Registered new user"
        );

        Ok(created)
    }

    /// All users; `NotFound` when the directory is empty
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        let users = self.user_repository.list().await?;
        if users.is_empty() {
            return Err(DomainError::empty("users"));
        }
        Ok(users)
    }

    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    pub async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        if !self.user_repository.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }

        tracing::info!(user_id = %id, event = "user_deleted", "Deleted user");
        Ok(())
    }
}
