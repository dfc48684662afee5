//! In-memory implementation of VerificationRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_session::VerificationSession;
use crate::errors::DomainError;

use super::trait_::VerificationRepository;

/// Mock verification repository keyed by mobile number
#[derive(Clone, Default)]
pub struct MockVerificationRepository {
    sessions: Arc<RwLock<HashMap<String, VerificationSession>>>,
}

impl MockVerificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl VerificationRepository for MockVerificationRepository {
    async fn create(&self, session: VerificationSession) -> Result<VerificationSession, DomainError> {
        let mut sessions = self.sessions.write().await;

        if sessions.contains_key(&session.mobile_number) {
            return Err(DomainError::conflict(
                "A verification session already exists for this mobile number",
            ));
        }

        sessions.insert(session.mobile_number.clone(), session.clone());
        Ok(session)
    }

    async fn find_by_mobile(
        &self,
        mobile_number: &str,
    ) -> Result<Option<VerificationSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(mobile_number).cloned())
    }

    async fn update_attempts(&self, mobile_number: &str, attempts: u32) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(mobile_number) {
            Some(session) => {
                session.attempts = attempts;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_mobile(&self, mobile_number: &str) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(mobile_number).is_some())
    }
}
