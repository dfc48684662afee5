//! MySQL implementation of the MessageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use mv_core::domain::entities::message::ArchivedMessage;
use mv_core::errors::DomainError;
use mv_core::repositories::MessageRepository;

use super::{column, map_sqlx_error, parse_uuid};

pub struct MySqlMessageRepository {
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for MySqlMessageRepository {
    async fn create(&self, message: ArchivedMessage) -> Result<ArchivedMessage, DomainError> {
        let query = r#"
            INSERT INTO messages (id, message, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(message.id.to_string())
            .bind(&message.message)
            .bind(message.user_id.to_string())
            .bind(message.created_at)
            .bind(message.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to archive message", "Message already archived", e))?;

        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ArchivedMessage>, DomainError> {
        let query = r#"
            SELECT id, message, user_id, created_at, updated_at
            FROM messages
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list messages", "Message already archived", e))?;

        rows.iter()
            .map(|row| {
                let id: String = column(row, "id")?;
                let user_id: String = column(row, "user_id")?;
                Ok(ArchivedMessage {
                    id: parse_uuid(&id)?,
                    message: column(row, "message")?,
                    user_id: parse_uuid(&user_id)?,
                    created_at: column::<DateTime<Utc>>(row, "created_at")?,
                    updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
                })
            })
            .collect()
    }
}
