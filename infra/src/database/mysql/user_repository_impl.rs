//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use mv_core::domain::entities::user::User;
use mv_core::errors::DomainError;
use mv_core::repositories::UserRepository;

use super::{column, map_sqlx_error, parse_uuid};

const USER_COLUMNS: &str =
    "id, first_name, last_name, mobile_number, is_verified, created_at, updated_at";

const DUPLICATE_MOBILE: &str = "User with this mobile number already exists";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let id: String = column(row, "id")?;

        Ok(User {
            id: parse_uuid(&id)?,
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
            mobile_number: column(row, "mobile_number")?,
            is_verified: column(row, "is_verified")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, first_name, last_name, mobile_number,
                is_verified, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.mobile_number)
            .bind(user.is_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to create user", DUPLICATE_MOBILE, e))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find user", DUPLICATE_MOBILE, e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT {} FROM users WHERE id IN ({})",
            USER_COLUMNS, placeholders
        );

        let mut q = sqlx::query(&query);
        for id in ids {
            q = q.bind(id.to_string());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find users", DUPLICATE_MOBILE, e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn find_by_mobile(&self, mobile_number: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE mobile_number = ? LIMIT 1",
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(mobile_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find user", DUPLICATE_MOBILE, e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {} FROM users ORDER BY created_at ASC", USER_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list users", DUPLICATE_MOBILE, e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete user", DUPLICATE_MOBILE, e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_verified_by_mobile(&self, mobile_number: &str) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE users SET is_verified = TRUE, updated_at = ? WHERE mobile_number = ?",
        )
        .bind(Utc::now())
        .bind(mobile_number)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update user", DUPLICATE_MOBILE, e))?;

        Ok(result.rows_affected() > 0)
    }
}
