//! Unit tests for domain error types

use crate::errors::DomainError;

#[test]
fn test_not_found_messages() {
    assert_eq!(DomainError::not_found("User").to_string(), "User not found");
    assert_eq!(DomainError::empty("users").to_string(), "No users found");
    assert!(DomainError::empty("messages").is_not_found());
}

#[test]
fn test_dispatch_failed_display_keeps_cause() {
    let error = DomainError::DispatchFailed {
        message: "SMS dispatch timed out after 10s".to_string(),
    };
    assert!(error.to_string().contains("timed out"));
}
