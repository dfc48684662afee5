//! Unit tests for the verification session entity

use chrono::Duration;

use crate::domain::entities::verification_session::{VerificationSession, DEFAULT_OTP_LENGTH};

fn session(otp: &str) -> VerificationSession {
    VerificationSession::new("9999999999".to_string(), otp.to_string(), Duration::minutes(10))
}

#[test]
fn test_new_session() {
    let s = session("123456");

    assert_eq!(s.mobile_number, "9999999999");
    assert_eq!(s.otp, "123456");
    assert_eq!(s.attempts, 0);
    assert!(!s.is_expired());
    assert_eq!(s.expires_at - s.created_at, Duration::minutes(10));
}

#[test]
fn test_generate_otp_format() {
    for _ in 0..100 {
        let otp = VerificationSession::generate_otp(DEFAULT_OTP_LENGTH);
        assert_eq!(otp.len(), DEFAULT_OTP_LENGTH);
        assert!(otp.chars().all(|c| c.is_ascii_digit()));
    }
    assert_eq!(VerificationSession::generate_otp(4).len(), 4);
}

#[test]
fn test_generate_otp_uniqueness() {
    let codes: std::collections::HashSet<String> = (0..100)
        .map(|_| VerificationSession::generate_otp(DEFAULT_OTP_LENGTH))
        .collect();

    // Extremely unlikely to draw the same code every time
    assert!(codes.len() > 1);
}

#[test]
fn test_matches_is_exact() {
    let s = session("1234");

    assert!(s.matches("1234"));
    assert!(!s.matches("12345"));
    assert!(!s.matches("123"));
    assert!(!s.matches(" 1234"));
    assert!(!s.matches(""));
}

#[test]
fn test_expired_session() {
    let s = VerificationSession::new("9999999999".to_string(), "1234".to_string(), Duration::seconds(-1));
    assert!(s.is_expired());
}

#[test]
fn test_attempt_tracking() {
    let mut s = session("1234");

    assert_eq!(s.remaining_attempts(Some(3)), Some(3));
    assert_eq!(s.remaining_attempts(None), None);

    assert_eq!(s.record_failed_attempt(), 1);
    assert_eq!(s.record_failed_attempt(), 2);
    assert_eq!(s.remaining_attempts(Some(3)), Some(1));

    s.record_failed_attempt();
    s.record_failed_attempt();
    assert_eq!(s.remaining_attempts(Some(3)), Some(0));
}

#[test]
fn test_debug_redacts_otp() {
    let rendered = format!("{:?}", session("987654"));
    assert!(!rendered.contains("987654"));
    assert!(rendered.contains("<redacted>"));
}
