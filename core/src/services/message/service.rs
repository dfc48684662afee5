use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::message::PopulatedMessage;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{MessageRepository, UserRepository};

/// Message archive service
pub struct MessageService<M: MessageRepository, U: UserRepository> {
    message_repository: Arc<M>,
    user_repository: Arc<U>,
}

impl<M: MessageRepository, U: UserRepository> MessageService<M, U> {
    pub fn new(message_repository: Arc<M>, user_repository: Arc<U>) -> Self {
        Self {
            message_repository,
            user_repository,
        }
    }

    /// All archived messages with their user resolved
    ///
    /// Messages whose user has since been deleted carry `user: None`.
    pub async fn list_messages(&self) -> DomainResult<Vec<PopulatedMessage>> {
        let messages = self.message_repository.list().await?;
        if messages.is_empty() {
            return Err(DomainError::empty("messages"));
        }

        let mut user_ids: Vec<Uuid> = messages.iter().map(|m| m.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let users: HashMap<Uuid, User> = self
            .user_repository
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        tracing::debug!(
            messages = messages.len(),
            users = users.len(),
            event = "messages_populated",
            "Resolved message owners"
        );

        Ok(messages
            .into_iter()
            .map(|m| {
                let user = users.get(&m.user_id).cloned();
                m.populate(user)
            })
            .collect())
    }
}
