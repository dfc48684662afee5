//! In-memory implementation of MessageRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::message::ArchivedMessage;
use crate::errors::DomainError;

use super::trait_::MessageRepository;

/// Mock message archive; can be switched to fail writes
#[derive(Clone, Default)]
pub struct MockMessageRepository {
    messages: Arc<RwLock<Vec<ArchivedMessage>>>,
    fail_writes: bool,
}

impl MockMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive whose `create` always fails
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn create(&self, message: ArchivedMessage) -> Result<ArchivedMessage, DomainError> {
        if self.fail_writes {
            return Err(DomainError::internal("message archive unavailable"));
        }

        self.messages.write().await.push(message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ArchivedMessage>, DomainError> {
        Ok(self.messages.read().await.clone())
    }
}
