//! Archive of dispatched SMS bodies.

use async_trait::async_trait;

use crate::domain::entities::message::ArchivedMessage;
use crate::errors::DomainError;

/// Append-only message archive
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: ArchivedMessage) -> Result<ArchivedMessage, DomainError>;

    /// All archived messages, oldest first
    async fn list(&self) -> Result<Vec<ArchivedMessage>, DomainError>;
}
