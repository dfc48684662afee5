//! Mock implementations for testing verification service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::verification::traits::SmsServiceTrait;

#[derive(Clone, Copy)]
pub enum SmsBehaviour {
    Deliver,
    Fail,
    Hang(Duration),
}

// Mock SMS service recording every delivered (to, body) pair
pub struct MockSmsService {
    pub sent_messages: Arc<Mutex<Vec<(String, String)>>>,
    behaviour: SmsBehaviour,
}

impl MockSmsService {
    pub fn new(behaviour: SmsBehaviour) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            behaviour,
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent_messages.lock().unwrap().clone()
    }

    /// OTP carried by the most recent message
    pub fn last_otp(&self) -> Option<String> {
        self.sent()
            .last()
            .and_then(|(_, body)| body.rsplit(' ').next().map(str::to_string))
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, String> {
        match self.behaviour {
            SmsBehaviour::Deliver => {}
            SmsBehaviour::Fail => return Err("SMS service error".to_string()),
            SmsBehaviour::Hang(delay) => tokio::time::sleep(delay).await,
        }
        self.sent_messages
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(format!("mock-msg-{}", Uuid::new_v4()))
    }
}

// User repository whose verification flag update always fails
#[derive(Default)]
pub struct FlagFailingUserRepository {
    pub inner: MockUserRepository,
}

#[async_trait]
impl UserRepository for FlagFailingUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.inner.create(user).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        self.inner.find_by_ids(ids).await
    }

    async fn find_by_mobile(&self, mobile_number: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_mobile(mobile_number).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.inner.list().await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.inner.delete(id).await
    }

    async fn mark_verified_by_mobile(&self, _mobile_number: &str) -> Result<bool, DomainError> {
        Err(DomainError::internal("user store unavailable"))
    }
}
