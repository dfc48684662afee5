//! MySQL implementation of the VerificationRepository trait.
//!
//! The unique key on `user_verifications.mobile_number` backs the one
//! session per number rule across processes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use mv_core::domain::entities::verification_session::VerificationSession;
use mv_core::errors::DomainError;
use mv_core::repositories::VerificationRepository;

use super::{column, map_sqlx_error, parse_uuid};

const DUPLICATE_SESSION: &str = "A verification session already exists for this mobile number";

pub struct MySqlVerificationRepository {
    pool: MySqlPool,
}

impl MySqlVerificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &MySqlRow) -> Result<VerificationSession, DomainError> {
        let id: String = column(row, "id")?;

        Ok(VerificationSession {
            id: parse_uuid(&id)?,
            mobile_number: column(row, "mobile_number")?,
            otp: column(row, "otp")?,
            attempts: column(row, "attempts")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            expires_at: column::<DateTime<Utc>>(row, "expires_at")?,
        })
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn create(&self, session: VerificationSession) -> Result<VerificationSession, DomainError> {
        let query = r#"
            INSERT INTO user_verifications (
                id, mobile_number, otp, attempts, created_at, expires_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(session.id.to_string())
            .bind(&session.mobile_number)
            .bind(&session.otp)
            .bind(session.attempts)
            .bind(session.created_at)
            .bind(session.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to create verification session", DUPLICATE_SESSION, e))?;

        Ok(session)
    }

    async fn find_by_mobile(
        &self,
        mobile_number: &str,
    ) -> Result<Option<VerificationSession>, DomainError> {
        let query = r#"
            SELECT id, mobile_number, otp, attempts, created_at, expires_at
            FROM user_verifications
            WHERE mobile_number = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(mobile_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find verification session", DUPLICATE_SESSION, e))?;

        row.as_ref().map(Self::row_to_session).transpose()
    }

    async fn update_attempts(&self, mobile_number: &str, attempts: u32) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE user_verifications SET attempts = ? WHERE mobile_number = ?")
            .bind(attempts)
            .bind(mobile_number)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to update verification session", DUPLICATE_SESSION, e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_mobile(&self, mobile_number: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM user_verifications WHERE mobile_number = ?")
            .bind(mobile_number)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete verification session", DUPLICATE_SESSION, e))?;

        Ok(result.rows_affected() > 0)
    }
}
