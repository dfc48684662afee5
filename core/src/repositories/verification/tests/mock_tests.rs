use chrono::Duration;

use crate::domain::entities::verification_session::VerificationSession;
use crate::errors::DomainError;
use crate::repositories::verification::{MockVerificationRepository, VerificationRepository};

fn session(mobile: &str, otp: &str) -> VerificationSession {
    VerificationSession::new(mobile.to_string(), otp.to_string(), Duration::minutes(10))
}

#[tokio::test]
async fn test_one_session_per_mobile() {
    let repo = MockVerificationRepository::new();
    repo.create(session("9999999999", "111111")).await.unwrap();

    let second = repo.create(session("9999999999", "222222")).await;
    assert!(matches!(second, Err(DomainError::Conflict { .. })));

    let stored = repo.find_by_mobile("9999999999").await.unwrap().unwrap();
    assert_eq!(stored.otp, "111111");
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_update_attempts() {
    let repo = MockVerificationRepository::new();
    repo.create(session("9999999999", "111111")).await.unwrap();

    assert!(repo.update_attempts("9999999999", 2).await.unwrap());
    assert!(!repo.update_attempts("0000000000", 1).await.unwrap());

    let stored = repo.find_by_mobile("9999999999").await.unwrap().unwrap();
    assert_eq!(stored.attempts, 2);
}

#[tokio::test]
async fn test_delete_by_mobile() {
    let repo = MockVerificationRepository::new();
    repo.create(session("9999999999", "111111")).await.unwrap();

    assert!(repo.delete_by_mobile("9999999999").await.unwrap());
    assert!(!repo.delete_by_mobile("9999999999").await.unwrap());
    assert!(repo.find_by_mobile("9999999999").await.unwrap().is_none());

    // The number is free again once deleted
    repo.create(session("9999999999", "333333")).await.unwrap();
}
