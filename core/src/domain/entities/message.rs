//! Archived copies of dispatched SMS messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Audit record of a dispatched SMS. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedMessage {
    pub id: Uuid,

    /// Message body exactly as dispatched
    pub message: String,

    /// Non-owning reference to the user the message was sent for
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl ArchivedMessage {
    pub fn new(message: String, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            message,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Resolve the user reference, producing the read model.
    ///
    /// `user` is `None` when the referenced user no longer exists.
    pub fn populate(self, user: Option<User>) -> PopulatedMessage {
        PopulatedMessage {
            id: self.id,
            message: self.message,
            user,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Archived message with its user reference resolved to the full record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedMessage {
    pub id: Uuid,
    pub message: String,
    pub user: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
